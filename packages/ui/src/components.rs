//! Editor component state shared through context.

use dioxus::prelude::*;
use store::ComponentsState;

/// Get the editor's component tree.
pub fn use_components() -> Signal<ComponentsState> {
    use_context::<Signal<ComponentsState>>()
}

/// Provider component holding the component tree for everything below it.
#[component]
pub fn ComponentsProvider(children: Element) -> Element {
    let components = use_signal(ComponentsState::new);
    use_context_provider(|| components);

    rsx! {
        {children}
    }
}
