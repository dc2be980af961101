use serde::{Deserialize, Serialize};

use super::DashboardClient;
use crate::toast::Toasts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAmount {
    pub source: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFinancial {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterBudget {
    pub quarter: String,
    pub budget: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPerformance {
    pub country: String,
    pub income: f64,
    pub expenses: f64,
}

impl CountryPerformance {
    pub fn net_balance(&self) -> f64 {
        self.income - self.expenses
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    pub fundraising_goal: f64,
    pub goal_achieved: f64,
    pub current_month_income: f64,
    pub last_month_income: f64,
    pub current_month_expenses: f64,
    pub last_month_expenses: f64,
    pub expense_breakdown: Vec<CategoryAmount>,
    pub income_sources: Vec<SourceAmount>,
    pub monthly_financials: Vec<MonthlyFinancial>,
    pub quarterly_budget: Vec<QuarterBudget>,
    pub country_performance: Vec<CountryPerformance>,
}

/// Income and expense targets for one country (or `"all"`) in one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBudget {
    pub year: i32,
    pub country: String,
    pub income_budget: f64,
    pub expense_budget: f64,
}

impl YearlyBudget {
    fn zero(year: i32, country: &str) -> Self {
        Self {
            year,
            country: country.to_string(),
            income_budget: 0.0,
            expense_budget: 0.0,
        }
    }
}

pub const ALL_COUNTRIES: &str = "all";

/// Percentage change from `last` to `current`; `None` when there is no base
pub fn percent_change(current: f64, last: f64) -> Option<f64> {
    if last == 0.0 {
        None
    } else {
        Some((current - last) / last * 100.0)
    }
}

/// Share of a budget consumed, capped at 100
pub fn budget_utilization(actual: f64, budget: f64) -> u32 {
    if budget <= 0.0 {
        return 0;
    }
    (actual / budget * 100.0).round().clamp(0.0, 100.0) as u32
}

pub struct FinanceDashboardPage {
    client: DashboardClient,
    toasts: Toasts,
    summary: Option<FinanceSummary>,
    budgets: Vec<YearlyBudget>,
    pub year: i32,
    pub country: String,
}

impl FinanceDashboardPage {
    pub fn new(client: DashboardClient, toasts: Toasts, year: i32) -> Self {
        Self {
            client,
            toasts,
            summary: None,
            budgets: Vec::new(),
            year,
            country: ALL_COUNTRIES.to_string(),
        }
    }

    pub async fn load(&mut self) {
        match self.client.finance().await {
            Ok(summary) => self.summary = Some(summary),
            Err(err) => self
                .toasts
                .failure(&err, "Failed to load financial data."),
        }
    }

    pub fn summary(&self) -> Option<&FinanceSummary> {
        self.summary.as_ref()
    }

    #[cfg(test)]
    fn with_summary(mut self, summary: FinanceSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn income_change(&self) -> Option<f64> {
        let summary = self.summary.as_ref()?;
        percent_change(summary.current_month_income, summary.last_month_income)
    }

    pub fn expense_change(&self) -> Option<f64> {
        let summary = self.summary.as_ref()?;
        percent_change(summary.current_month_expenses, summary.last_month_expenses)
    }

    /// Rounded percentage of the fundraising goal reached
    pub fn goal_progress(&self) -> u32 {
        match &self.summary {
            Some(summary) if summary.fundraising_goal > 0.0 => {
                (summary.goal_achieved / summary.fundraising_goal * 100.0)
                    .round()
                    .max(0.0) as u32
            }
            _ => 0,
        }
    }

    /// Each expense category's share of total expenses, in percent
    pub fn expense_shares(&self) -> Vec<(String, f64)> {
        let Some(summary) = &self.summary else {
            return Vec::new();
        };
        summary
            .expense_breakdown
            .iter()
            .map(|entry| {
                let share = if summary.total_expenses > 0.0 {
                    entry.amount / summary.total_expenses * 100.0
                } else {
                    0.0
                };
                (entry.category.clone(), share)
            })
            .collect()
    }

    /// Countries by net balance, best first
    pub fn country_ranking(&self) -> Vec<&CountryPerformance> {
        let mut ranked: Vec<&CountryPerformance> = self
            .summary
            .iter()
            .flat_map(|summary| summary.country_performance.iter())
            .collect();
        ranked.sort_by(|a, b| b.net_balance().total_cmp(&a.net_balance()));
        ranked
    }

    /// The `n` best performers followed by the `n` worst, worst first
    pub fn top_and_bottom(&self, n: usize) -> Vec<&CountryPerformance> {
        let ranked = self.country_ranking();
        let mut chart: Vec<&CountryPerformance> = ranked.iter().take(n).copied().collect();
        chart.extend(ranked.iter().rev().take(n).copied());
        chart
    }

    /// Set the budget for a (year, country) pair, replacing any previous one
    pub fn add_budget(&mut self, budget: YearlyBudget) {
        self.budgets
            .retain(|b| !(b.year == budget.year && b.country == budget.country));
        self.budgets.push(budget);
    }

    pub fn budgets(&self) -> &[YearlyBudget] {
        &self.budgets
    }

    /// Country budget, else the year's "all" budget, else zero
    pub fn budget_for(&self, year: i32, country: &str) -> YearlyBudget {
        let find = |country: &str| {
            self.budgets
                .iter()
                .find(|b| b.year == year && b.country == country)
        };
        find(country)
            .or_else(|| find(ALL_COUNTRIES))
            .cloned()
            .unwrap_or_else(|| YearlyBudget::zero(year, country))
    }

    /// Budget for the selected year and country filters
    pub fn current_budget(&self) -> YearlyBudget {
        self.budget_for(self.year, &self.country)
    }

    pub fn income_budget_progress(&self) -> u32 {
        let income = self.summary.as_ref().map_or(0.0, |s| s.total_income);
        budget_utilization(income, self.current_budget().income_budget)
    }

    pub fn expense_budget_progress(&self) -> u32 {
        let expenses = self.summary.as_ref().map_or(0.0, |s| s.total_expenses);
        budget_utilization(expenses, self.current_budget().expense_budget)
    }
}
