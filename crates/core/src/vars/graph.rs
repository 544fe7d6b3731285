//! Resolution of configured variables that reference other variables.
//!
//! Configured variables may contain placeholders pointing at built-ins or at
//! each other:
//!
//! ```toml
//! [variables]
//! initials = "AB"
//! company = "#{initials} Corp"
//! banner = "#{+company} (#{year})"
//! ```
//!
//! Resolution runs in rounds. Each round substitutes every reference whose
//! target is already known; a variable with no references left is moved into
//! the resolved table. Iteration stops as soon as a round fails to shrink the
//! pending set, which covers cycles and references to undefined names.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::placeholder::{Placeholder, scan_placeholders, substitute_tokens};
use super::table::VarTable;

/// A configured variable still waiting for some of its references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVariable {
    pub name: String,
    /// Raw string as configured.
    pub raw: String,
    /// `raw` with every reference known so far substituted.
    pub working: String,
    /// Distinct references not yet known.
    pub references: Vec<Placeholder>,
    /// Replacement text for each known reference, keyed by token.
    known: HashMap<String, String>,
}

impl PendingVariable {
    fn new(name: &str, raw: &str, references: Vec<Placeholder>) -> Self {
        Self {
            name: name.to_string(),
            raw: raw.to_string(),
            working: raw.to_string(),
            references,
            known: HashMap::new(),
        }
    }

    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.references.len()
    }

    /// Record every reference that `resolved` can satisfy and rebuild
    /// `working` from `raw`.
    fn substitute_known(&mut self, resolved: &VarTable) {
        let before = self.references.len();
        self.references.retain(|reference| match resolved.get(&reference.name) {
            Some(value) => {
                self.known.insert(reference.token.clone(), reference.replacement(value));
                false
            }
            None => true,
        });
        if self.references.len() != before {
            self.working = substitute_tokens(&self.raw, &self.known);
        }
    }
}

/// Outcome of resolving configured variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphResolution {
    /// Built-ins plus every configured variable that could be resolved.
    pub resolved: VarTable,
    /// Names of configured variables dropped because of cycles or missing
    /// references, sorted.
    pub unresolved: Vec<String>,
    /// Number of rounds run over the pending set.
    pub rounds: usize,
}

impl GraphResolution {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolve `configured` on top of `base`.
///
/// Static entries (no placeholders) are copied straight into the result and
/// take precedence over a base entry of the same name. Entries that cannot be
/// resolved are left out of the result and reported in
/// [`GraphResolution::unresolved`].
pub fn resolve_variables(base: VarTable, configured: &VarTable) -> GraphResolution {
    let mut resolved = base;
    let mut pending: Vec<PendingVariable> = Vec::new();

    for (name, raw) in configured {
        let references = scan_placeholders(raw);
        if references.is_empty() {
            resolved.insert(name.as_str(), raw.as_str());
        } else {
            pending.push(PendingVariable::new(name, raw, references));
        }
    }

    let mut rounds = 0;
    while !pending.is_empty() {
        rounds += 1;
        let start = pending.len();

        let mut still_pending = Vec::with_capacity(start);
        for mut var in pending {
            var.substitute_known(&resolved);
            if var.unresolved_count() == 0 {
                debug!(variable = %var.name, round = rounds, "resolved configured variable");
                resolved.insert(var.name, var.working);
            } else {
                still_pending.push(var);
            }
        }
        pending = still_pending;

        if pending.len() == start {
            break;
        }
    }

    let mut unresolved: Vec<String> = pending.into_iter().map(|v| v.name).collect();
    unresolved.sort();

    if !unresolved.is_empty() {
        warn!(variables = ?unresolved, "could not build all placeholders");
    }

    GraphResolution { resolved, unresolved, rounds }
}
