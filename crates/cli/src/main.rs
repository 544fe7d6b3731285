mod cmd;
mod completions;
mod logging;
mod prompt;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::engine::ArgValueCandidates;
use clap_complete::env::CompleteEnv;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ftpl", version, about = "Create files from templates")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// List template names discovered under templates_dir
    ListTemplates(ListTemplatesArgs),

    /// Create a new file from a template
    New(NewArgs),
}

#[derive(Debug, Args)]
pub struct ListTemplatesArgs {
    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template name (e.g. "Class.ts" or "react/Component.tsx"); picked
    /// interactively when omitted
    #[arg(add = ArgValueCandidates::new(completions::complete_templates))]
    pub template: Option<String>,

    /// Name of the file to create; asked interactively when omitted
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Directory to create the file in (defaults to the workspace root)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Set a variable value, taking precedence over configuration
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = prompt::parse_var_arg)]
    pub vars: Vec<(String, String)>,

    /// Never prompt; unresolved placeholders use their default value
    #[arg(long)]
    pub batch: bool,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,

    /// Print the rendered content instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

fn main() {
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::ListTemplates(args) => {
            cmd::list_templates::run(cli.config.as_deref(), cli.profile.as_deref(), &args)
        }
        Commands::New(args) => {
            cmd::new::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
    }

    logging::flush();
}
