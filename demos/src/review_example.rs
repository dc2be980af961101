use dotenv::dotenv;
use ngo_crm::expenses::{ExpenseReview, ExpenseReviewPage};
use ngo_crm::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    pretty_env_logger::init();

    let crm = Crm::from_env()?;
    let email = env::var("NGO_CRM_EMAIL").expect("NGO_CRM_EMAIL must be set");
    let password = env::var("NGO_CRM_PASSWORD").expect("NGO_CRM_PASSWORD must be set");
    crm.login_page().submit(&email, &password).await?;

    println!("Starting review example");

    let mut expenses = crm.expense_review_page();
    expenses.load().await;
    if let Some(error) = expenses.error() {
        println!("Could not load expenses: {}", error);
    }
    for (status, count) in expenses.board.counts() {
        println!("{:>9}: {}", status, count);
    }

    let first_pending = expenses
        .board
        .bucket(ApprovalStatus::Pending)
        .first()
        .map(|expense| {
            println!(
                "Reviewing {} (${:.2}, {})",
                expense.id,
                expense.amount,
                ExpenseReviewPage::invoice_label(expense)
            );
            expense.id.clone()
        });
    if let Some(id) = first_pending {
        let review = ExpenseReview {
            status: ApprovalStatus::Approved,
            notes: "Receipts checked".to_string(),
        };
        expenses.review(&id, review).await?;
    }

    let mut projects = crm.project_approval_page();
    projects.load().await;
    for project in projects.tab(ApprovalStatus::Pending) {
        println!("Pending project: {} ({})", project.title, project.status);
    }

    for toast in crm.toasts().drain() {
        println!("[{:?}] {}", toast.level, toast.message);
    }

    println!("Review example completed");
    Ok(())
}
