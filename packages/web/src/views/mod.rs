mod home;
pub use home::Home;

mod project_public;
pub use project_public::ProjectPublic;
