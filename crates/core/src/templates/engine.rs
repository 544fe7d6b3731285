use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::vars::{
    GraphResolution, RenderTarget, VarTable, builtin_variables, resolve_variables,
    scan_placeholders, substitute_tokens,
};

use super::repository::LoadedTemplate;

/// Source of values for placeholders nothing else can resolve.
///
/// Called once per unresolved placeholder token, in the order the tokens
/// first appear in the template. Returning `None` or an empty string selects
/// the default value (the upper-cased variable name).
pub trait Prompter {
    fn prompt(&mut self, name: &str) -> Option<String>;
}

/// A prompter that never answers, so every unresolved placeholder gets its
/// default value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn prompt(&mut self, _name: &str) -> Option<String> {
        None
    }
}

impl<F> Prompter for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn prompt(&mut self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Result of rendering a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub content: String,
    /// Variable names the prompter supplied a value for.
    pub prompted: Vec<String>,
    /// Variable names that fell back to their upper-cased default.
    pub defaulted: Vec<String>,
    /// Configured variables that could not be resolved.
    pub unresolved_variables: Vec<String>,
}

/// Renders template text by substituting `#{name}` placeholders.
///
/// Lookup order for each placeholder is: overrides, then built-ins and
/// resolved configured variables, then the prompter.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    overrides: VarTable,
    variables: VarTable,
    today: NaiveDate,
}

impl TemplateRenderer {
    /// `overrides` are literal values used as-is; `variables` may reference
    /// each other and the built-ins.
    pub fn new(overrides: VarTable, variables: VarTable) -> Self {
        Self { overrides, variables, today: Local::now().date_naive() }
    }

    /// Use a fixed date for the `year` and `date` built-ins.
    #[must_use]
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Resolve built-ins and configured variables for `target`.
    pub fn resolve(&self, target: &RenderTarget) -> GraphResolution {
        resolve_variables(builtin_variables(target, self.today), &self.variables)
    }

    pub fn render<P>(&self, text: &str, target: &RenderTarget, prompter: &mut P) -> Rendered
    where
        P: Prompter + ?Sized,
    {
        let resolution = self.resolve(target);
        let resolved = &resolution.resolved;

        let mut replacements = HashMap::new();
        let mut prompted = Vec::new();
        let mut defaulted = Vec::new();

        for placeholder in scan_placeholders(text) {
            let name = placeholder.name.as_str();

            let value = if let Some(v) = self.overrides.get(name) {
                debug!(placeholder = %placeholder.token, "using override");
                v.to_string()
            } else if let Some(v) = resolved.get(name) {
                debug!(placeholder = %placeholder.token, "using resolved variable");
                v.to_string()
            } else {
                match prompter.prompt(name).filter(|v| !v.is_empty()) {
                    Some(v) => {
                        prompted.push(name.to_string());
                        v
                    }
                    None => {
                        defaulted.push(name.to_string());
                        name.to_uppercase()
                    }
                }
            };

            replacements.insert(placeholder.token.clone(), placeholder.replacement(&value));
        }

        Rendered {
            content: substitute_tokens(text, &replacements),
            prompted,
            defaulted,
            unresolved_variables: resolution.unresolved,
        }
    }

    pub fn render_template<P>(
        &self,
        template: &LoadedTemplate,
        target: &RenderTarget,
        prompter: &mut P,
    ) -> Rendered
    where
        P: Prompter + ?Sized,
    {
        debug!(
            template = %template.logical_name,
            output = %target.output_path().display(),
            "rendering template"
        );
        self.render(&template.content, target, prompter)
    }
}
