//! Landing page listing the public projects.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let paths = use_resource(|| async move { api::get_public_paths().await });

    let list = match &*paths.read() {
        None => rsx! { p { "Loading..." } },
        Some(Err(e)) => rsx! { p { style: "color: #feb2b2;", "Failed to load projects: {e}" } },
        Some(Ok(paths)) if paths.paths.is_empty() => rsx! { p { "No public projects yet." } },
        Some(Ok(paths)) => rsx! {
            ul {
                style: "list-style: none; padding: 0;",
                for slug in paths.slugs().map(str::to_string) {
                    li {
                        key: "{slug}",
                        style: "margin-bottom: 0.5rem;",
                        Link {
                            to: Route::ProjectPublic { slug: slug.clone() },
                            class: "project-link",
                            "{slug}"
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            style: "min-height: 100vh; padding: 2rem; background-color: #1a202c; color: #ffffff;",
            h1 { style: "margin-top: 0; font-weight: 700; font-size: 1.75rem;", "Public projects" }
            {list}
        }
    }
}
