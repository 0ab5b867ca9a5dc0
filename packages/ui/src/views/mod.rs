mod project_public;
pub use project_public::ProjectPublicView;
