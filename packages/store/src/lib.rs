pub mod components;
pub mod config;
pub mod loader;
pub mod models;
pub mod page;
pub mod repo;
pub mod slug;

mod memory;
pub use memory::MemoryStore;

pub use components::ComponentsState;
pub use config::ViewerConfig;
pub use loader::{
    list_public_identifiers, load_by_identifier, PathEntry, ProjectProps, SlugParams,
    StaticPaths, StaticProps,
};
pub use models::{Project, User};
pub use page::{PageState, PageView, ResetAction};
pub use repo::{ProjectStore, StoreError};
