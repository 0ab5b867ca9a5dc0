//! This crate contains all shared UI for the workspace.

pub mod views;

mod components;
pub use components::{use_components, ComponentsProvider};

mod component_preview;
pub use component_preview::ComponentPreview;
