//! User administration endpoints

mod page;

pub use page::*;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::fetch::Backend;
use crate::models::{Role, User};

#[derive(Debug, Serialize)]
struct RoleUpdate {
    role: Role,
}

/// Client for `/users`
#[derive(Debug, Clone)]
pub struct UsersClient {
    backend: Backend,
}

impl UsersClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.backend.get("/users").execute().await
    }

    pub async fn get(&self, id: &str) -> Result<User> {
        self.backend.get(&format!("/users/{}", id)).execute().await
    }

    /// Update profile fields; the backend decides which keys it accepts
    pub async fn update(&self, id: &str, changes: &Value) -> Result<()> {
        self.backend
            .put(&format!("/users/{}", id))
            .json(changes)?
            .execute_unit()
            .await
    }

    pub async fn update_role(&self, id: &str, role: Role) -> Result<()> {
        self.backend
            .put(&format!("/users/{}/role", id))
            .json(&RoleUpdate { role })?
            .execute_unit()
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.backend
            .delete(&format!("/users/{}", id))
            .execute_unit()
            .await
    }
}
