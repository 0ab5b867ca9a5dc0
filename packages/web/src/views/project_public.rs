use dioxus::prelude::*;
use ui::views::ProjectPublicView;

#[component]
pub fn ProjectPublic(slug: String) -> Element {
    rsx! {
        ProjectPublicView { key: "{slug}", slug }
    }
}
