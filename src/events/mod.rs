//! Scheduled events

mod page;

pub use page::*;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fetch::Backend;
use crate::models::{matches_any, UserRef};
use crate::view::{Collection, Listed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_at: DateTime<Utc>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub organizer_id: Option<String>,
    #[serde(default)]
    pub organizer: Option<UserRef>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Listed for Event {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        matches_any(
            needle,
            [
                Some(self.title.as_str()),
                self.description.as_deref(),
                self.organizer.as_ref().map(|o| o.full_name.as_str()),
                self.location.as_deref(),
            ],
        )
    }
}

/// Body of `POST /events`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub start_at: String,
    pub end_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,
    pub location: String,
    pub attachments: Vec<String>,
}

/// Client for `/events`
#[derive(Debug, Clone)]
pub struct EventsClient {
    backend: Backend,
}

impl EventsClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        self.backend.get("/events").execute().await
    }

    pub async fn create(&self, event: &NewEvent) -> Result<()> {
        self.backend
            .post("/events")
            .json(event)?
            .execute_unit()
            .await
    }
}

#[async_trait]
impl Collection for EventsClient {
    type Item = Event;

    async fn fetch_all(&self) -> Result<Vec<Event>> {
        self.list().await
    }
}
