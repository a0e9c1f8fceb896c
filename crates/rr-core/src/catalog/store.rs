use serde::{Deserialize, Serialize};

use crate::catalog::ActionDescriptor;
use crate::error::{Error, Result};

/// Immutable snapshot of every registered action.
///
/// Built once by the hosting side before any resolution runs, then only ever
/// borrowed. Resolutions are pure functions over the snapshot, so any number
/// may run concurrently without coordination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionCatalog {
    actions: Vec<ActionDescriptor>,
}

impl ActionCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Wrap an already-assembled descriptor sequence without validating the
    /// uniqueness invariant. For hosts that own the invariant themselves;
    /// duplicates surface at lookup time as an ambiguous (failed) match.
    pub fn from_actions(actions: Vec<ActionDescriptor>) -> Self {
        Self { actions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Registration surface for the hosting side. Rejects a second action with
/// the same (handler, method, parameter type sequence), which is what keeps
/// overload resolution well-defined.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    actions: Vec<ActionDescriptor>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    pub fn register(&mut self, action: ActionDescriptor) -> Result<&mut Self> {
        let duplicate = self.actions.iter().any(|existing| {
            existing.handler == action.handler
                && existing.method == action.method
                && existing.param_types().eq(action.param_types())
        });
        if duplicate {
            return Err(Error::DuplicateAction(action.query()));
        }
        debug!(
            "registered {} -> `{}`",
            action.query(),
            action.route_template
        );
        self.actions.push(action);
        Ok(self)
    }

    /// Register with the handler's base route joined onto the action's
    /// relative template.
    pub fn register_prefixed(
        &mut self,
        base: &str,
        mut action: ActionDescriptor,
    ) -> Result<&mut Self> {
        action.route_template = join_route(base, &action.route_template);
        self.register(action)
    }

    pub fn finish(self) -> ActionCatalog {
        ActionCatalog {
            actions: self.actions,
        }
    }
}

fn join_route(base: &str, template: &str) -> String {
    if base.is_empty() {
        return template.to_string();
    }
    let base = base.trim_end_matches('/');
    let template = template.trim_start_matches('/');
    if template.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, template)
    }
}
