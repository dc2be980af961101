//! Partner schools

mod page;

pub use page::*;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fetch::Backend;
use crate::models::{matches_any, Country, Province};
use crate::view::{Collection, Listed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub province: Option<Province>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub student_count: Option<u32>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl School {
    /// Up to two initials for the photo placeholder
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

impl Listed for School {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, needle: &str) -> bool {
        matches_any(
            needle,
            [
                Some(self.name.as_str()),
                self.country.as_ref().map(|c| c.country_name.as_str()),
                self.province.as_ref().map(|p| p.name.as_str()),
                self.address.as_deref(),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchool {
    pub name: String,
    pub country_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_id: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<u32>,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub photos: Vec<String>,
}

/// Client for `/schools`
#[derive(Debug, Clone)]
pub struct SchoolsClient {
    backend: Backend,
}

impl SchoolsClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<School>> {
        self.backend.get("/schools").execute().await
    }

    pub async fn create(&self, school: &NewSchool) -> Result<()> {
        self.backend
            .post("/schools")
            .json(school)?
            .execute_unit()
            .await
    }
}

#[async_trait]
impl Collection for SchoolsClient {
    type Item = School;

    async fn fetch_all(&self) -> Result<Vec<School>> {
        self.list().await
    }
}
