//! One-to-one messages between staff members

mod chat;
mod directory;

pub use chat::*;
pub use directory::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fetch::Backend;
use crate::models::Channel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub body: String,
    #[serde(default)]
    pub channel: Channel,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Whether this message was exchanged between `a` and `b`, in either direction
    pub fn between(&self, a: &str, b: &str) -> bool {
        (self.from_user_id == a && self.to_user_id == b)
            || (self.from_user_id == b && self.to_user_id == a)
    }
}

/// One unread private message, as listed by `/messages/private-message-count`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadEntry {
    pub from_user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub from_user_id: String,
    pub to_user_id: String,
    pub body: String,
    pub channel: Channel,
}

/// Client for `/messages`
#[derive(Debug, Clone)]
pub struct MessagesClient {
    backend: Backend,
}

impl MessagesClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<Message>> {
        self.backend.get("/messages").execute().await
    }

    pub async fn send(&self, message: &OutgoingMessage) -> Result<()> {
        self.backend
            .post("/messages")
            .json(message)?
            .execute_unit()
            .await
    }

    pub async fn private_counts(&self) -> Result<Vec<UnreadEntry>> {
        self.backend
            .get("/messages/private-message-count")
            .execute()
            .await
    }

    /// Total unread count shown on the sidebar badge
    pub async fn unread_total(&self) -> Result<u64> {
        self.backend.get("/messages/count").execute().await
    }
}
