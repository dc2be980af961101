use chrono::Datelike;
use dotenv::dotenv;
use ngo_crm::dashboard::YearlyBudget;
use ngo_crm::prelude::*;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    pretty_env_logger::init();

    let crm = Crm::from_env()?;

    println!("Starting dashboard example");

    let mut overview = crm.dashboard_page();
    overview.load().await;
    match overview.summary() {
        Some(summary) => {
            println!("Projects: {}", summary.total_projects);
            println!("Active volunteers: {}", summary.active_volunteers);
            println!("Total donation: ${:.2}", summary.total_donation);
            if !overview.has_donations() {
                println!("No donation data yet");
            }
            for donation in &summary.top_country_donations {
                println!("  {}: ${:.2}", donation.country, donation.total_donation);
            }
        }
        None => println!("Failed to load dashboard data."),
    }

    let year = chrono::Utc::now().year();
    let mut finance = crm.finance_dashboard_page(year);
    finance.load().await;
    finance.add_budget(YearlyBudget {
        year,
        country: "all".to_string(),
        income_budget: 1_500_000.0,
        expense_budget: 1_200_000.0,
    });

    if finance.summary().is_some() {
        println!("\nGoal progress: {}%", finance.goal_progress());
        match finance.income_change() {
            Some(change) => println!("Income vs last month: {:+.1}%", change),
            None => println!("Income vs last month: n/a"),
        }
        println!("Income budget used: {}%", finance.income_budget_progress());
        println!("Expense budget used: {}%", finance.expense_budget_progress());
        for (category, share) in finance.expense_shares() {
            println!("  {:<20} {:>5.1}%", category, share);
        }
        for country in finance.top_and_bottom(3) {
            println!("  {:<20} {:>12.2}", country.country, country.net_balance());
        }
    }

    for toast in crm.toasts().drain() {
        println!("[{:?}] {}", toast.level, toast.message);
    }

    println!("Dashboard example completed");
    Ok(())
}
