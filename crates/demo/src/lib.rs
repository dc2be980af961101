//! Client-held stores for the screens that have no backend routes yet:
//! legal cases, IT tickets and generated finance reports.
//!
//! Everything lives in memory and is seeded with sample records.

pub mod legal;
pub mod reports;
pub mod tickets;

use thiserror::Error;

pub use legal::{CaseCategory, CasePriority, CaseStatus, LegalCase, LegalCaseBook, NewCase};
pub use reports::{Report, ReportCenter, ReportFormat, ReportKind, ReportStatus};
pub use tickets::{
    PendingAttachment, PendingAttachments, PickedFile, Preview, Ticket, TicketAttachment,
    TicketDesk, TicketForm, TicketPriority, TicketStatus,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("{0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, DemoError>;

/// Sample people referenced by the seeded records
pub const DEMO_USERS: [(&str, &str); 3] = [
    ("u1", "Sita Shrestha"),
    ("u2", "Ramesh Khatri"),
    ("u3", "Anita Sharma"),
];

/// Display name for a user id; "Unassigned" when there is none
pub fn user_name(id: Option<&str>) -> &'static str {
    match id {
        None => "Unassigned",
        Some(id) => DEMO_USERS
            .iter()
            .find(|(user_id, _)| *user_id == id)
            .map(|(_, name)| *name)
            .unwrap_or("Unknown User"),
    }
}

pub(crate) fn new_id(prefix: &str) -> String {
    format!("{}{}", prefix, &uuid::Uuid::new_v4().simple().to_string()[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name() {
        assert_eq!(user_name(Some("u2")), "Ramesh Khatri");
        assert_eq!(user_name(Some("nobody")), "Unknown User");
        assert_eq!(user_name(None), "Unassigned");
    }

    #[test]
    fn test_new_id_is_prefixed_and_unique() {
        let a = new_id("t-");
        let b = new_id("t-");
        assert!(a.starts_with("t-"));
        assert_eq!(a.len(), 14);
        assert_ne!(a, b);
    }
}
