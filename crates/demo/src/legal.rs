//! Legal case register

use chrono::{DateTime, Datelike, Duration, Utc};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::new_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseCategory {
    Land,
    Financial,
    Employment,
    Fraud,
    Harassment,
    Property,
    Organizational,
    Dispute,
    Compliance,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasePriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Open,
    InProgress,
    OnHold,
    Escalated,
    Won,
    Lost,
    Settled,
    Closed,
}

impl CaseStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Settled | Self::Closed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCase {
    pub id: String,
    pub case_number: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub category: CaseCategory,
    pub priority: CasePriority,
    pub status: CaseStatus,
    pub applicant_id: Option<String>,
    pub respondent_id: Option<String>,
    pub assigned_to_id: Option<String>,
    pub country_id: String,
    pub province_id: Option<String>,
    pub filing_date: Option<DateTime<Utc>>,
    pub hearing_dates: Vec<DateTime<Utc>>,
    pub closed_date: Option<DateTime<Utc>>,
    pub documents: Vec<String>,
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LegalCase {
    fn matches(&self, needle: &str) -> bool {
        [
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.case_number.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
    }

    /// The soonest hearing still ahead of `now`
    pub fn next_hearing(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.hearing_dates.iter().filter(|d| **d > now).min().copied()
    }
}

/// Fields of the "New Legal Case" dialog
#[derive(Debug, Clone, Default)]
pub struct NewCase {
    pub title: String,
    pub category: CaseCategory,
    pub priority: CasePriority,
    pub applicant_id: Option<String>,
    pub respondent_id: Option<String>,
    pub assigned_to_id: Option<String>,
    pub filing_date: Option<DateTime<Utc>>,
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct LegalCaseBook {
    cases: Vec<LegalCase>,
}

impl Default for LegalCaseBook {
    fn default() -> Self {
        Self::seeded()
    }
}

impl LegalCaseBook {
    pub fn empty() -> Self {
        Self { cases: Vec::new() }
    }

    /// The book with its two sample cases
    pub fn seeded() -> Self {
        let now = Utc::now();
        let cases = vec![
            LegalCase {
                id: "c1".to_string(),
                case_number: Some("WVN/2025/0001".to_string()),
                title: "Temple Land Dispute — Bhaktapur".to_string(),
                description: Some(
                    "Dispute over boundary and access to temple-owned land in Bhaktapur district."
                        .to_string(),
                ),
                category: CaseCategory::Land,
                priority: CasePriority::High,
                status: CaseStatus::InProgress,
                applicant_id: Some("u1".to_string()),
                respondent_id: Some("u2".to_string()),
                assigned_to_id: Some("u3".to_string()),
                country_id: "NP".to_string(),
                province_id: Some("3".to_string()),
                filing_date: Some(now - Duration::days(40)),
                hearing_dates: vec![now + Duration::days(7)],
                closed_date: None,
                documents: vec!["https://example.com/documents/title-deed.pdf".to_string()],
                notes: vec![
                    "Initial filing completed.".to_string(),
                    "Met with local council on 2025-10-01".to_string(),
                ],
                created_at: now,
                updated_at: now,
            },
            LegalCase {
                id: "c2".to_string(),
                case_number: Some("WVN/2025/0002".to_string()),
                title: "Staff Contract Dispute — Education Program".to_string(),
                description: Some("Alleged wrongful termination of teacher under project X.".to_string()),
                category: CaseCategory::Employment,
                priority: CasePriority::Medium,
                status: CaseStatus::Open,
                applicant_id: Some("u3".to_string()),
                respondent_id: Some("u2".to_string()),
                assigned_to_id: Some("u1".to_string()),
                country_id: "NP".to_string(),
                province_id: Some("4".to_string()),
                filing_date: Some(now - Duration::days(10)),
                hearing_dates: Vec::new(),
                closed_date: None,
                documents: Vec::new(),
                notes: vec!["HR review ongoing".to_string()],
                created_at: now,
                updated_at: now,
            },
        ];
        Self { cases }
    }

    pub fn cases(&self) -> &[LegalCase] {
        &self.cases
    }

    pub fn get(&self, id: &str) -> Option<&LegalCase> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// Cases matching the search box and both dropdowns (`None` = all)
    pub fn filtered(
        &self,
        query: &str,
        status: Option<CaseStatus>,
        category: Option<CaseCategory>,
    ) -> Vec<&LegalCase> {
        let needle = query.to_lowercase();
        self.cases
            .iter()
            .filter(|c| status.map_or(true, |s| c.status == s))
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .filter(|c| needle.is_empty() || c.matches(&needle))
            .collect()
    }

    /// Open a new case at the top of the list
    pub fn add(&mut self, new_case: NewCase) -> &LegalCase {
        let now = Utc::now();
        let serial = rand::thread_rng().gen_range(1000..10000);
        let title = match new_case.title.trim() {
            "" => "Untitled Case".to_string(),
            title => title.to_string(),
        };
        let notes = match new_case.notes.trim() {
            "" => Vec::new(),
            _ => vec![new_case.notes],
        };

        let case = LegalCase {
            id: new_id("c-"),
            case_number: Some(format!("WVN/{}/{}", now.year(), serial)),
            title,
            description: None,
            category: new_case.category,
            priority: new_case.priority,
            status: CaseStatus::Open,
            applicant_id: new_case.applicant_id,
            respondent_id: new_case.respondent_id,
            assigned_to_id: new_case.assigned_to_id,
            country_id: "NP".to_string(),
            province_id: None,
            filing_date: new_case.filing_date,
            hearing_dates: Vec::new(),
            closed_date: None,
            documents: Vec::new(),
            notes,
            created_at: now,
            updated_at: now,
        };
        debug!("opened legal case {}", case.id);
        self.cases.insert(0, case);
        &self.cases[0]
    }

    pub fn open_count(&self) -> usize {
        self.cases.iter().filter(|c| !c.status.is_closed()).count()
    }
}
