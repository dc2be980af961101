//! Expense claims and their review

mod page;

pub use page::*;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fetch::Backend;
use crate::models::{ApprovalStatus, UserRef};
use crate::view::Reviewable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub invoice_urls: Vec<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub submitted_by: Option<UserRef>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub approved_by: Option<UserRef>,
}

impl Reviewable for Expense {
    fn id(&self) -> &str {
        &self.id
    }

    fn approval(&self) -> ApprovalStatus {
        self.status
    }

    fn set_approval(&mut self, status: ApprovalStatus) {
        self.status = status;
    }
}

/// Body of `PUT /expenses/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseReview {
    pub status: ApprovalStatus,
    pub notes: String,
}

/// Client for `/expenses`
#[derive(Debug, Clone)]
pub struct ExpensesClient {
    backend: Backend,
}

impl ExpensesClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<Expense>> {
        self.backend.get("/expenses").execute().await
    }

    pub async fn update(&self, id: &str, review: &ExpenseReview) -> Result<()> {
        self.backend
            .put(&format!("/expenses/{}", id))
            .json(review)?
            .execute_unit()
            .await
    }
}
