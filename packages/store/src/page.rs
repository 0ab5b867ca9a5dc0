//! # Public project page state
//!
//! The page starts out loading and settles exactly once, when the hosting
//! view calls [`PageState::init`] with the loaded props:
//!
//! ```text
//! loading ──(markup present)──▶ editor      loading=false, error=true
//!         └─(markup missing)──▶ error link  loading=false, error=false
//! ```
//!
//! `error == true` means *no* error occurred. The flag is inverted with
//! respect to its name and [`PageState::view`] reads it that way.
//!
//! When no project was loaded (a fallback page still waiting for its props),
//! `init` leaves the state untouched and the spinner keeps showing.

use serde_json::Value;
use tracing::warn;

use crate::loader::ProjectProps;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub loading: bool,
    pub error: bool,
}

/// Replace the editor's component tree with this parsed markup.
#[derive(Clone, Debug, PartialEq)]
pub struct ResetAction(pub Value);

/// What the page renders for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView {
    Loading,
    Editor,
    ErrorLink,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            loading: true,
            error: true,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settle the page from its props. Returns the reset to apply to the
    /// editor state when the project has usable markup.
    pub fn init(&mut self, props: &ProjectProps) -> Option<ResetAction> {
        self.loading = true;
        let project = props.projects.as_ref()?;

        let parsed = project.markup().and_then(|markup| {
            serde_json::from_str::<Value>(markup)
                .map_err(|e| warn!(id = project.id, error = %e, "project markup is not valid JSON"))
                .ok()
        });

        match parsed {
            Some(components) => {
                self.error = true;
                self.loading = false;
                Some(ResetAction(components))
            }
            None => {
                self.error = false;
                self.loading = false;
                None
            }
        }
    }

    pub fn view(&self) -> PageView {
        match (self.error, self.loading) {
            (true, true) => PageView::Loading,
            (true, false) => PageView::Editor,
            (false, _) => PageView::ErrorLink,
        }
    }
}
