//! Editor component tree held by the page.
//!
//! The tree is whatever the editor serialized into a project's markup: a JSON
//! object keyed by component id. Its contents are opaque here; the only
//! operation the viewer needs is replacing it wholesale.

use serde_json::{json, Map, Value};

use crate::page::ResetAction;

/// Id of the component every tree hangs off.
pub const ROOT_COMPONENT: &str = "root";

#[derive(Clone, Debug, PartialEq)]
pub struct ComponentsState {
    components: Value,
}

impl Default for ComponentsState {
    fn default() -> Self {
        Self {
            components: json!({
                ROOT_COMPONENT: {
                    "id": ROOT_COMPONENT,
                    "parent": ROOT_COMPONENT,
                    "type": "Box",
                    "children": [],
                    "props": {},
                }
            }),
        }
    }
}

impl ComponentsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self, action: ResetAction) {
        self.components = action.0;
    }

    pub fn components(&self) -> &Value {
        &self.components
    }

    /// Number of components in the tree, the root included.
    pub fn component_count(&self) -> usize {
        self.components.as_object().map(Map::len).unwrap_or(0)
    }

    pub fn root(&self) -> Option<&Value> {
        self.components.get(ROOT_COMPONENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_root() {
        let state = ComponentsState::new();
        assert_eq!(state.component_count(), 1);
        assert_eq!(state.root().unwrap()["type"], "Box");
    }

    #[test]
    fn test_reset_replaces_tree() {
        let mut state = ComponentsState::new();
        state.reset(ResetAction(json!({
            "root": { "id": "root", "children": ["comp-1"] },
            "comp-1": { "id": "comp-1", "type": "Button" },
        })));
        assert_eq!(state.component_count(), 2);
        assert_eq!(state.components()["comp-1"]["type"], "Button");

        state.reset(ResetAction(json!({ "a": 1 })));
        assert_eq!(state.components(), &json!({ "a": 1 }));
        assert!(state.root().is_none());
    }
}
