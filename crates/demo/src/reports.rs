//! Finance report queue

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{DemoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    #[serde(rename = "pnl")]
    ProfitAndLoss,
    Balance,
    CashFlow,
    Donor,
    Budget,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::ProfitAndLoss,
        ReportKind::Balance,
        ReportKind::CashFlow,
        ReportKind::Donor,
        ReportKind::Budget,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProfitAndLoss => "Profit & Loss Statement",
            Self::Balance => "Balance Sheet",
            Self::CashFlow => "Cash Flow Analysis",
            Self::Donor => "Donor Contribution Report",
            Self::Budget => "Budget vs. Actual Report",
        }
    }

    fn final_format(&self) -> ReportFormat {
        match self {
            Self::Donor | Self::Budget => ReportFormat::Xlsx,
            _ => ReportFormat::Pdf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportFormat {
    Pdf,
    Xlsx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub kind: ReportKind,
    /// e.g. "2025 FY"
    pub period: String,
    pub scope: String,
    pub date: NaiveDate,
    pub format: ReportFormat,
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Default)]
pub struct ReportCenter {
    reports: Vec<Report>,
    next_id: u64,
}

impl ReportCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a report; it starts as an in-progress PDF at the top of the list
    pub fn generate(&mut self, kind: ReportKind, year: i32, scope: &str) -> u64 {
        self.next_id += 1;
        let report = Report {
            id: self.next_id,
            kind,
            period: format!("{} FY", year),
            scope: scope.to_string(),
            date: Utc::now().date_naive(),
            format: ReportFormat::Pdf,
            status: ReportStatus::InProgress,
        };
        self.reports.insert(0, report);
        self.next_id
    }

    /// Mark a report finished; budget and donor reports come out as spreadsheets
    pub fn complete(&mut self, id: u64) -> Result<&Report> {
        let report = self
            .reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DemoError::NotFound(format!("report {}", id)))?;
        report.status = ReportStatus::Completed;
        report.format = report.kind.final_format();
        Ok(report)
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Reports whose type or scope contains `term`, case-insensitively
    pub fn search(&self, term: &str) -> Vec<&Report> {
        let needle = term.to_lowercase();
        self.reports
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.kind.label().to_lowercase().contains(&needle)
                    || r.scope.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_then_complete() {
        let mut center = ReportCenter::new();
        let pnl = center.generate(ReportKind::ProfitAndLoss, 2025, "All Global Operations");
        let budget = center.generate(ReportKind::Budget, 2024, "India");

        assert_eq!(center.reports()[0].id, budget);
        assert_eq!(center.reports()[0].status, ReportStatus::InProgress);
        assert_eq!(center.reports()[0].format, ReportFormat::Pdf);
        assert_eq!(center.reports()[0].period, "2024 FY");

        assert_eq!(center.complete(budget).unwrap().format, ReportFormat::Xlsx);
        let done = center.complete(pnl).unwrap();
        assert_eq!(done.format, ReportFormat::Pdf);
        assert_eq!(done.status, ReportStatus::Completed);

        assert!(center.complete(99).is_err());
    }

    #[test]
    fn test_search() {
        let mut center = ReportCenter::new();
        center.generate(ReportKind::Donor, 2025, "United States");
        center.generate(ReportKind::Balance, 2025, "India");
        assert_eq!(center.search("donor").len(), 1);
        assert_eq!(center.search("india")[0].kind, ReportKind::Balance);
        assert_eq!(center.search("").len(), 2);
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReportKind::ProfitAndLoss).unwrap(),
            "\"pnl\""
        );
        assert_eq!(
            serde_json::to_string(&ReportKind::CashFlow).unwrap(),
            "\"cash_flow\""
        );
        assert_eq!(ReportKind::ALL.len(), 5);
    }
}
