//! Broadcast and targeted notifications

mod page;

pub use page::*;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fetch::Backend;
use crate::models::{matches_any, Channel, UserRef};
use crate::view::{Collection, Listed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
    pub channel: Channel,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Badge letter: the target's initial, or "A" for all users
    pub fn audience_initial(&self) -> char {
        self.user
            .as_ref()
            .and_then(|user| user.full_name.chars().next())
            .unwrap_or('A')
    }
}

impl Listed for Notification {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        matches_any(
            needle,
            [
                Some(self.title.as_str()),
                Some(self.body.as_str()),
                self.user.as_ref().map(|u| u.full_name.as_str()),
                Some(self.channel.as_str()),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub title: String,
    pub body: String,
    pub channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Client for `/notifications`
#[derive(Debug, Clone)]
pub struct NotificationsClient {
    backend: Backend,
}

impl NotificationsClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<Notification>> {
        self.backend.get("/notifications").execute().await
    }

    pub async fn create(&self, notification: &NewNotification) -> Result<()> {
        self.backend
            .post("/notifications")
            .json(notification)?
            .execute_unit()
            .await
    }
}

#[async_trait]
impl Collection for NotificationsClient {
    type Item = Notification;

    async fn fetch_all(&self) -> Result<Vec<Notification>> {
        self.list().await
    }
}
