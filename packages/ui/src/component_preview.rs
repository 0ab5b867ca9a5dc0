use dioxus::prelude::*;

use crate::use_components;

/// Read-only listing of the loaded component tree.
#[component]
pub fn ComponentPreview() -> Element {
    let components = use_components();

    let entries: Vec<(String, String)> = components
        .read()
        .components()
        .as_object()
        .map(|map| {
            map.iter()
                .map(|(id, component)| {
                    let kind = component
                        .get("type")
                        .and_then(|t| t.as_str())
                        .unwrap_or("Unknown")
                        .to_string();
                    (id.clone(), kind)
                })
                .collect()
        })
        .unwrap_or_default();
    let count = components.read().component_count();

    rsx! {
        div {
            class: "component-preview",
            style: "flex: 1; background: #ffffff; position: relative; z-index: 10; padding: 1.5rem; overflow: auto;",

            p {
                style: "margin: 0 0 1rem; color: #4a5568; font-size: 0.875rem;",
                "{count} components"
            }

            ul {
                style: "margin: 0; padding-left: 1.25rem; font-family: monospace;",
                for (id, kind) in entries {
                    li { key: "{id}", "{id} ({kind})" }
                }
            }
        }
    }
}
