use crate::ListTemplatesArgs;
use filetemplates_core::templates::discovery::discover_templates;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct TemplateOutput {
    name: String,
    path: String,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ListTemplatesArgs) {
    let rc = super::load_config_or_exit("list-templates", config, profile);

    match discover_templates(&rc.templates_dir) {
        Ok(list) => {
            if args.json {
                let out: Vec<TemplateOutput> = list
                    .iter()
                    .map(|t| TemplateOutput {
                        name: t.logical_name.clone(),
                        path: t.path.to_string_lossy().to_string(),
                    })
                    .collect();
                match serde_json::to_string_pretty(&out) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to serialize templates: {e}");
                        crate::logging::flush();
                        std::process::exit(1);
                    }
                }
                return;
            }

            if list.is_empty() {
                println!("(no templates found)");
                return;
            }
            for t in &list {
                println!("{}", t.logical_name);
            }
            println!("-- {} templates --", list.len());
        }
        Err(e) => {
            println!("FAIL ftpl list-templates");
            println!("{e}");
            crate::logging::flush();
            std::process::exit(1);
        }
    }
}
