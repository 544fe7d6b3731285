use crate::logging;
use crate::prompt::{ask_filename, select_template, PromptError, PromptOptions, TerminalPrompter};
use crate::NewArgs;
use filetemplates_core::config::types::ResolvedConfig;
use filetemplates_core::templates::engine::{NoPrompt, Prompter, TemplateRenderer};
use filetemplates_core::templates::repository::{
    LoadedTemplate, TemplateRepoError, TemplateRepository,
};
use filetemplates_core::vars::{RenderTarget, VarTable};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &NewArgs) {
    let cfg = super::load_config_or_exit("new", config, profile);
    let options = PromptOptions { batch_mode: args.batch };
    let interactive = options.is_interactive();

    let repo = match TemplateRepository::open_or_create(&cfg.templates_dir) {
        Ok(r) => r,
        Err(e) => fail(&format!("Failed to read templates: {e}")),
    };

    let loaded = load_template(&repo, args.template.as_deref(), interactive);

    let filename = match args.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        Some(_) => fail("File name must not be empty"),
        None if interactive => match ask_filename(loaded.file_name()) {
            Ok(name) => name,
            Err(PromptError::Cancelled) => cancelled(),
            Err(e) => fail(&format!("Failed to read file name: {e}")),
        },
        None => loaded.file_name().to_string(),
    };

    let target_dir = args.dir.as_deref().map_or_else(|| cfg.workspace_root.clone(), absolutize);
    let target = RenderTarget::new(filename, target_dir, cfg.workspace_root.clone());
    let output_path = target.output_path();

    if !args.stdout && output_path.exists() && !args.force {
        fail(&format!(
            "Refusing to overwrite existing file: {} (use --force to replace it)",
            output_path.display()
        ));
    }

    let renderer = TemplateRenderer::new(merged_overrides(&cfg, &args.vars), cfg.variables.clone());
    let mut prompter: Box<dyn Prompter> =
        if interactive { Box::new(TerminalPrompter::new()) } else { Box::new(NoPrompt) };

    let rendered = renderer.render_template(&loaded, &target, prompter.as_mut());
    debug!(prompted = ?rendered.prompted, defaulted = ?rendered.defaulted, "placeholders filled");

    if args.stdout {
        print!("{}", rendered.content);
        return;
    }

    if let Some(parent) = output_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            fail(&format!("Failed to create parent directory {}: {e}", parent.display()));
        }
    }

    if let Err(e) = fs::write(&output_path, &rendered.content) {
        fail(&format!("Failed to write output file {}: {e}", output_path.display()));
    }
    info!(path = %output_path.display(), "created file from template");

    println!("OK   ftpl new");
    println!("template: {}", loaded.logical_name);
    println!("output:   {}", output_path.display());
}

/// Resolve the template to use, asking the user when no name was given.
fn load_template(
    repo: &TemplateRepository,
    name: Option<&str>,
    interactive: bool,
) -> LoadedTemplate {
    let name = match name {
        Some(n) => n.to_string(),
        None if repo.is_empty() => {
            eprintln!("No templates found!");
            eprintln!("Add template files to: {}", repo.root.display());
            logging::flush();
            std::process::exit(1);
        }
        None if interactive => match select_template(repo.list_all()) {
            Ok(Some(info)) => info.logical_name.clone(),
            Ok(None) | Err(PromptError::Cancelled) => cancelled(),
            Err(e) => fail(&format!("Failed to select template: {e}")),
        },
        None => fail("A template name is required when not running interactively"),
    };

    match repo.get_by_name(&name) {
        Ok(t) => t,
        Err(TemplateRepoError::NotFound(name)) => fail(&format!("Template not found: {name}")),
        Err(other) => fail(&format!("Failed to load template: {other}")),
    }
}

/// Configured overrides with `--var` values on top.
fn merged_overrides(cfg: &ResolvedConfig, vars: &[(String, String)]) -> VarTable {
    let mut overrides = cfg.overrides.clone();
    for (k, v) in vars {
        overrides.insert(k.as_str(), v.as_str());
    }
    overrides
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(path)
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    logging::flush();
    std::process::exit(1);
}

fn cancelled() -> ! {
    eprintln!("Cancelled, no file created");
    logging::flush();
    std::process::exit(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetemplates_core::config::loader::ConfigLoader;

    #[test]
    fn test_cli_vars_win_over_config_overrides() {
        let toml = r#"
version = 1
[profiles.default]
workspace_root = "/w"
[overrides]
author = "Config"
license = "MIT"
"#;
        let cfg = ConfigLoader::load_str(toml, "inline", None).unwrap();
        let vars = vec![("author".to_string(), "Cli".to_string())];

        let merged = merged_overrides(&cfg, &vars);
        assert_eq!(merged.get("author"), Some("Cli"));
        assert_eq!(merged.get("license"), Some("MIT"));
    }

    #[test]
    fn test_absolutize_keeps_absolute() {
        let p = std::env::temp_dir();
        assert_eq!(absolutize(&p), p);
        assert!(absolutize(Path::new("rel")).is_absolute());
    }
}
