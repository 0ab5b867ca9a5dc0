use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::{Project, User};
use crate::repo::{ProjectStore, StoreError};

/// In-memory ProjectStore for testing and local previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    projects: Arc<Mutex<HashMap<i64, Project>>>,
    users: Arc<Mutex<HashMap<i64, User>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    /// Insert or replace a project. Any embedded user is dropped; owners are
    /// resolved through `user_id` on read.
    pub fn insert_project(&self, mut project: Project) {
        project.user = None;
        self.projects.lock().unwrap().insert(project.id, project);
    }
}

impl ProjectStore for MemoryStore {
    async fn find_public(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.public)
            .cloned()
            .collect())
    }

    async fn find_with_user(&self, id: i64) -> Result<Option<Project>, StoreError> {
        let project = self.projects.lock().unwrap().get(&id).cloned();
        Ok(project.map(|mut p| {
            p.user = self.users.lock().unwrap().get(&p.user_id).cloned();
            p
        }))
    }
}
