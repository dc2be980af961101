//! Organisation-wide and finance dashboards

mod finance;

pub use finance::*;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fetch::Backend;
use crate::toast::Toasts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDonation {
    pub country: String,
    #[serde(default)]
    pub project: Option<String>,
    pub total_donation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_projects: u64,
    pub active_volunteers: u64,
    pub total_countries: u64,
    pub total_donation: f64,
    pub total_messages: u64,
    #[serde(default)]
    pub top_country_donations: Vec<CountryDonation>,
}

/// Client for `/dashboard` and `/financedashboard/`
#[derive(Debug, Clone)]
pub struct DashboardClient {
    backend: Backend,
}

impl DashboardClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn summary(&self) -> Result<DashboardSummary> {
        self.backend.get("/dashboard").execute().await
    }

    pub async fn finance(&self) -> Result<FinanceSummary> {
        self.backend.get("/financedashboard/").execute().await
    }
}

pub struct DashboardPage {
    client: DashboardClient,
    toasts: Toasts,
    summary: Option<DashboardSummary>,
}

impl DashboardPage {
    pub fn new(client: DashboardClient, toasts: Toasts) -> Self {
        Self {
            client,
            toasts,
            summary: None,
        }
    }

    pub async fn load(&mut self) {
        match self.client.summary().await {
            Ok(summary) => self.summary = Some(summary),
            Err(err) => {
                self.summary = None;
                self.toasts
                    .failure(&err, "Failed to load dashboard data.");
            }
        }
    }

    /// `None` renders the "Failed to load dashboard data." placeholder
    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.summary.as_ref()
    }

    pub fn has_donations(&self) -> bool {
        self.summary
            .as_ref()
            .map_or(false, |summary| !summary.top_country_donations.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_defaults_donations() {
        let json = r#"{
            "totalProjects": 12,
            "activeVolunteers": 40,
            "totalCountries": 3,
            "totalDonation": 15000.5,
            "totalMessages": 7
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_projects, 12);
        assert!(summary.top_country_donations.is_empty());
    }
}
