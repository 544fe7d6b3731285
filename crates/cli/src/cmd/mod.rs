pub mod doctor;
pub mod list_templates;
pub mod new;

use filetemplates_core::config::loader::{default_config_path, ConfigLoader};
use filetemplates_core::config::types::ResolvedConfig;
use std::path::Path;

/// Load the config and install logging, or print `FAIL ftpl <command>` and exit.
pub fn load_config_or_exit(
    command: &str,
    config: Option<&Path>,
    profile: Option<&str>,
) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            if let Err(e) = crate::logging::init(&rc) {
                println!("FAIL ftpl {command}");
                if let Some(path) = &rc.logging.file {
                    println!("cannot open log file {}: {e}", path.display());
                }
                std::process::exit(1);
            }
            rc
        }
        Err(e) => {
            println!("FAIL ftpl {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
