use super::{Expense, ExpenseReview, ExpensesClient};
use crate::error::{Error, Result};
use crate::models::ApprovalStatus;
use crate::toast::Toasts;
use crate::view::StatusBoard;

/// Pending/approved/rejected tabs over every expense claim
pub struct ExpenseReviewPage {
    client: ExpensesClient,
    toasts: Toasts,
    pub board: StatusBoard<Expense>,
    error: Option<String>,
    pub tab: ApprovalStatus,
}

impl ExpenseReviewPage {
    pub fn new(client: ExpensesClient, toasts: Toasts) -> Self {
        Self {
            client,
            toasts,
            board: StatusBoard::new(),
            error: None,
            tab: ApprovalStatus::Pending,
        }
    }

    pub async fn load(&mut self) {
        match self.client.list().await {
            Ok(expenses) => {
                self.board.replace(expenses);
                self.error = None;
            }
            Err(err) => {
                let message = err.user_message("Failed to load expenses");
                self.toasts.error(message.clone());
                self.error = Some(message);
            }
        }
    }

    /// Message shown instead of the tabs after a failed load
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn visible(&self) -> Vec<&Expense> {
        self.board.bucket(self.tab)
    }

    /// Save a new status and note for one expense.
    ///
    /// Returns `Ok(false)` when nothing changed. On success the expense moves
    /// tabs locally; the list is not refetched.
    pub async fn review(&mut self, id: &str, review: ExpenseReview) -> Result<bool> {
        let expense = self
            .board
            .get(id)
            .ok_or_else(|| Error::general(format!("no expense with id {}", id)))?;
        let current_notes = expense.notes.as_deref().unwrap_or_default();
        if review.status == expense.status && review.notes == current_notes {
            self.toasts.info("No changes to save.");
            return Ok(false);
        }

        if let Err(err) = self.client.update(id, &review).await {
            self.toasts.failure(&err, "Error updating expense status.");
            return Err(err);
        }

        if let Some(expense) = self.board.get_mut(id) {
            expense.status = review.status;
            expense.notes = Some(review.notes);
        }
        self.toasts.success(format!(
            "Expense {} successfully moved to {}!",
            id,
            review.status.as_str().to_uppercase()
        ));
        Ok(true)
    }

    pub fn invoice_label(expense: &Expense) -> String {
        match expense.invoice_urls.len() {
            0 => "No Invoice Attached".to_string(),
            1 => "View 1 Invoice".to_string(),
            n => format!("View {} Invoices", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(invoices: usize) -> Expense {
        Expense {
            id: "e1".to_string(),
            amount: 120.5,
            category: "Travel".to_string(),
            status: ApprovalStatus::Pending,
            invoice_urls: (0..invoices).map(|i| format!("https://cdn/{}.pdf", i)).collect(),
            date: None,
            notes: None,
            submitted_by: None,
            project: None,
            approved_by: None,
        }
    }

    #[test]
    fn test_invoice_label() {
        assert_eq!(
            ExpenseReviewPage::invoice_label(&expense(0)),
            "No Invoice Attached"
        );
        assert_eq!(ExpenseReviewPage::invoice_label(&expense(1)), "View 1 Invoice");
        assert_eq!(ExpenseReviewPage::invoice_label(&expense(3)), "View 3 Invoices");
    }

    #[test]
    fn test_expense_decodes_with_missing_optionals() {
        let json = r#"{"id":"e9","amount":10,"category":"Food","status":"approved"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.status, ApprovalStatus::Approved);
        assert!(expense.invoice_urls.is_empty());
        assert_eq!(expense.amount, 10.0);
    }
}
