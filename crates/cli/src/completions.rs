//! Shell completion support with dynamic value completers.
//!
//! Template names are read from the templates directory of the default
//! configuration, so completions follow whatever templates exist right now.

use clap_complete::engine::CompletionCandidate;
use filetemplates_core::config::loader::ConfigLoader;
use filetemplates_core::templates::repository::TemplateRepository;

/// Complete template names from TemplateRepository.
pub fn complete_templates() -> Vec<CompletionCandidate> {
    let Ok(cfg) = ConfigLoader::load(None, None) else {
        return Vec::new();
    };
    let Ok(repo) = TemplateRepository::new(&cfg.templates_dir) else {
        return Vec::new();
    };

    repo.list_all()
        .iter()
        .map(|info| CompletionCandidate::new(&info.logical_name))
        .collect()
}
