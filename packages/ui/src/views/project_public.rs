use dioxus::prelude::*;
use store::{PageState, PageView};

use crate::{use_components, ComponentPreview};

/// Public, read-only page for a single project.
///
/// Fetches the page props for `slug` once on mount, settles the page state
/// from them and, when the project has markup, loads it into the component
/// tree. Shows a spinner until then, and a link home if the project has
/// nothing to show.
#[component]
pub fn ProjectPublicView(
    /// `"<id>-<projectName>"` identifier from the URL.
    slug: String,
) -> Element {
    let mut page = use_signal(PageState::new);
    let mut components = use_components();

    // Runs once per page instance: it reads no signals.
    let _loader = use_resource(move || {
        let slug = slug.clone();
        async move {
            match api::get_public_project(slug.clone()).await {
                Ok(loaded) => {
                    let mut state = *page.peek();
                    if let Some(reset) = state.init(&loaded.props) {
                        components.write().reset(reset);
                    }
                    page.set(state);
                }
                Err(e) => {
                    tracing::error!("Failed to load project {}: {}", slug, e);
                }
            }
        }
    });

    let body = match page().view() {
        PageView::Loading => rsx! {
            div {
                class: "spinner",
                style: "margin: 3rem auto 0; color: #ffffff; font-size: 1.25rem;",
                "Loading..."
            }
        },
        PageView::Editor => rsx! {
            ComponentPreview {}
        },
        PageView::ErrorLink => rsx! {
            div {
                style: "margin: 0 auto; color: #ffffff;",
                a {
                    href: "/",
                    style: "color: #b2f5ea;",
                    "An error has occurred, click to return"
                }
            }
        },
    };

    rsx! {
        div {
            class: "project-public",
            style: "display: flex; min-width: 860px; height: calc(100vh - 3rem); background-color: #1a202c;",
            {body}
        }
    }
}
