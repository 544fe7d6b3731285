//! Template discovery, loading and rendering.

pub mod discovery;
pub mod engine;
pub mod repository;

pub use discovery::{TemplateDiscoveryError, TemplateInfo, discover_templates};
pub use engine::{NoPrompt, Prompter, Rendered, TemplateRenderer};
pub use repository::{LoadedTemplate, TemplateRepoError, TemplateRepository};
