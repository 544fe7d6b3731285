use filetemplates_core::config::loader::default_config_path;
use filetemplates_core::templates::repository::TemplateRepository;
use filetemplates_core::vars::{resolve_variables, VarTable, BUILTIN_NAMES};
use std::path::Path;
use tracing::debug;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = super::load_config_or_exit("doctor", config, profile);
    debug!(profile = %rc.active_profile, "loaded config");

    println!("OK   ftpl doctor");
    println!("core: v{}", filetemplates_core::version());
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("workspace_root: {}", rc.workspace_root.display());
    println!("templates_dir: {}", rc.templates_dir.display());

    match TemplateRepository::new(&rc.templates_dir) {
        Ok(repo) => println!("templates: {}", repo.list_all().len()),
        Err(e) => println!("templates: {e}"),
    }

    println!("overrides: {}", rc.overrides.len());
    println!("variables: {}", rc.variables.len());

    // Built-in names stand in for their per-render values here
    let base: VarTable = BUILTIN_NAMES.iter().map(|n| (*n, *n)).collect();
    let resolution = resolve_variables(base, &rc.variables);
    if !resolution.is_complete() {
        println!("unresolvable variables: {}", resolution.unresolved.join(", "));
    }
}
