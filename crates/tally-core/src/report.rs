//! Monthly normalization and aggregation
//!
//! Incomes are recorded at whatever frequency they are paid; everything here
//! is compared on a monthly basis. Expense totals are all-time sums per
//! category, not windowed by month.

use serde::Serialize;

use crate::models::{Expense, ExpenseCategory, Income, IncomeFrequency};

impl Income {
    /// Monthly-equivalent amount for this income source.
    ///
    /// Hourly assumes a 40-hour week; weekly and annual amounts are spread
    /// over 52 weeks / 12 months.
    pub fn monthly_amount(&self) -> f64 {
        match self.frequency {
            IncomeFrequency::Hourly => self.amount * 40.0 * 52.0 / 12.0,
            IncomeFrequency::Weekly => self.amount * 52.0 / 12.0,
            IncomeFrequency::Monthly => self.amount,
            IncomeFrequency::Annually => self.amount / 12.0,
        }
    }
}

/// Sum of monthly-equivalent amounts over all income sources
pub fn total_monthly_income(incomes: &[Income]) -> f64 {
    incomes.iter().map(|i| i.monthly_amount()).sum()
}

/// All-time total of expense amounts in one category
pub fn category_total(expenses: &[Expense], category: ExpenseCategory) -> f64 {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// All-time total over every expense
pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// One category's slice of the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub category: ExpenseCategory,
    pub total: f64,
    /// Share of monthly income, in percent (0 when there is no income)
    pub share_of_income: f64,
    /// 50/30/20 target for this category, in percent
    pub target_share: f64,
    pub over_target: bool,
}

/// Aggregates behind the dashboard view
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub monthly_income: f64,
    pub total_expenses: f64,
    pub categories: Vec<CategoryBreakdown>,
}

/// Build the dashboard aggregates from the current records.
pub fn dashboard_summary(incomes: &[Income], expenses: &[Expense]) -> DashboardSummary {
    let monthly_income = total_monthly_income(incomes);

    let categories = ExpenseCategory::all()
        .iter()
        .map(|&category| {
            let total = category_total(expenses, category);
            let share_of_income = if monthly_income > 0.0 {
                total / monthly_income * 100.0
            } else {
                0.0
            };
            CategoryBreakdown {
                category,
                total,
                share_of_income,
                target_share: category.target_share(),
                over_target: share_of_income > category.target_share(),
            }
        })
        .collect();

    DashboardSummary {
        monthly_income,
        total_expenses: total_expenses(expenses),
        categories,
    }
}

/// Aggregates behind the performance view (annual framing)
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceSummary {
    pub monthly_income: f64,
    pub annual_income: f64,
    pub total_expenses: f64,
    pub future_total: f64,
    /// Future-category share of total spending, in percent (0 when there is
    /// no spending)
    pub savings_share: f64,
}

pub fn performance_summary(incomes: &[Income], expenses: &[Expense]) -> PerformanceSummary {
    let monthly_income = total_monthly_income(incomes);
    let total = total_expenses(expenses);
    let future_total = category_total(expenses, ExpenseCategory::Future);
    let savings_share = if total > 0.0 {
        future_total / total * 100.0
    } else {
        0.0
    };

    PerformanceSummary {
        monthly_income,
        annual_income: monthly_income * 12.0,
        total_expenses: total,
        future_total,
        savings_share,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeKind;

    fn income(amount: f64, frequency: IncomeFrequency) -> Income {
        Income {
            id: 1,
            description: "Test".to_string(),
            amount,
            frequency,
            kind: IncomeKind::Primary,
        }
    }

    fn expense(amount: f64, category: ExpenseCategory) -> Expense {
        Expense {
            id: 1,
            description: "Test".to_string(),
            amount,
            category,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_hourly_normalization() {
        // 20/hr at 40 hrs/wk over 52 weeks, spread across 12 months
        let i = income(20.0, IncomeFrequency::Hourly);
        assert!((i.monthly_amount() - 20.0 * 40.0 * 52.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_normalization() {
        let i = income(600.0, IncomeFrequency::Weekly);
        assert!((i.monthly_amount() - 600.0 * 52.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_is_unchanged() {
        let i = income(3000.0, IncomeFrequency::Monthly);
        assert_eq!(i.monthly_amount(), 3000.0);
    }

    #[test]
    fn test_annual_normalization() {
        let i = income(60000.0, IncomeFrequency::Annually);
        assert_eq!(i.monthly_amount(), 5000.0);
    }

    #[test]
    fn test_total_monthly_income_sums_sources() {
        let incomes = vec![
            income(3000.0, IncomeFrequency::Monthly),
            income(12000.0, IncomeFrequency::Annually),
        ];
        assert_eq!(total_monthly_income(&incomes), 4000.0);
    }

    #[test]
    fn test_category_totals_partition_expenses() {
        let expenses = vec![
            expense(900.0, ExpenseCategory::Fixed),
            expense(150.0, ExpenseCategory::Fun),
            expense(250.0, ExpenseCategory::Future),
            expense(100.0, ExpenseCategory::Fixed),
        ];
        let by_category: f64 = ExpenseCategory::all()
            .iter()
            .map(|&c| category_total(&expenses, c))
            .sum();
        assert_eq!(by_category, total_expenses(&expenses));
        assert_eq!(category_total(&expenses, ExpenseCategory::Fixed), 1000.0);
    }

    #[test]
    fn test_dashboard_shares_zero_without_income() {
        let expenses = vec![expense(500.0, ExpenseCategory::Fixed)];
        let summary = dashboard_summary(&[], &expenses);
        assert_eq!(summary.monthly_income, 0.0);
        for breakdown in &summary.categories {
            assert_eq!(breakdown.share_of_income, 0.0);
        }
    }

    #[test]
    fn test_dashboard_flags_over_target() {
        // 2000 fixed on 3000 income = 66.7% against a 50% target
        let incomes = vec![income(3000.0, IncomeFrequency::Monthly)];
        let expenses = vec![expense(2000.0, ExpenseCategory::Fixed)];
        let summary = dashboard_summary(&incomes, &expenses);
        let fixed = summary
            .categories
            .iter()
            .find(|c| c.category == ExpenseCategory::Fixed)
            .unwrap();
        assert!(fixed.over_target);
        assert!((fixed.share_of_income - 2000.0 / 3000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_performance_summary_annualizes_income() {
        let incomes = vec![income(3000.0, IncomeFrequency::Monthly)];
        let summary = performance_summary(&incomes, &[]);
        assert_eq!(summary.annual_income, 36000.0);
        assert_eq!(summary.savings_share, 0.0);
    }

    #[test]
    fn test_performance_savings_share() {
        let expenses = vec![
            expense(500.0, ExpenseCategory::Future),
            expense(2000.0, ExpenseCategory::Fixed),
        ];
        let summary = performance_summary(&[], &expenses);
        assert!((summary.savings_share - 20.0).abs() < 1e-9);
    }
}
