//! Budget health rules
//!
//! Checks the shape of overall spending: whether enough is going to the
//! future category and whether spending has outrun income.

use crate::models::ExpenseCategory;

use super::engine::{Rule, RuleContext};
use super::types::{Recommendation, RuleKind, Severity};

/// Share of spending that should reach the future category, in percent
const SAVINGS_TARGET_SHARE: f64 = 20.0;

/// Warns when less than 20% of spending goes to the future category
pub struct SavingsRateRule;

impl Rule for SavingsRateRule {
    fn id(&self) -> RuleKind {
        RuleKind::SavingsRate
    }

    fn name(&self) -> &'static str {
        "Savings Rate"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Recommendation> {
        let total = ctx.total_expenses();
        // No spending at all reads as a 0% savings rate
        let share = if total > 0.0 {
            ctx.category_total(ExpenseCategory::Future) / total * 100.0
        } else {
            0.0
        };

        // Strictly below target; exactly 20% is fine
        if share >= SAVINGS_TARGET_SHARE {
            return vec![];
        }

        vec![Recommendation::new(
            RuleKind::SavingsRate,
            Severity::Warning,
            "Boost Your Savings",
            format!(
                "Only {:.1}% of your spending goes to the future. Aim for at least {:.0}%.",
                share, SAVINGS_TARGET_SHARE
            ),
        )]
    }
}

/// Alerts when total spending exceeds monthly income
pub struct OverspendRule;

impl Rule for OverspendRule {
    fn id(&self) -> RuleKind {
        RuleKind::Overspend
    }

    fn name(&self) -> &'static str {
        "Overspend"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Recommendation> {
        let income = ctx.monthly_income();
        let total = ctx.total_expenses();

        if total <= income {
            return vec![];
        }

        vec![Recommendation::new(
            RuleKind::Overspend,
            Severity::Alert,
            "Spending Exceeds Income",
            format!(
                "You've spent {:.2} against a monthly income of {:.2}. Time to cut back.",
                total, income
            ),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Income, IncomeFrequency, IncomeKind};

    fn income(amount: f64) -> Income {
        Income {
            id: 1,
            description: "Salary".to_string(),
            amount,
            frequency: IncomeFrequency::Monthly,
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
    fn test_savings_warning_below_target() {
        let expenses = vec![
            expense(100.0, ExpenseCategory::Future),
            expense(900.0, ExpenseCategory::Fixed),
        ];
        let ctx = RuleContext::new(&[], &expenses);

        let recs = SavingsRateRule.evaluate(&ctx);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Boost Your Savings");
        assert_eq!(recs[0].severity, Severity::Warning);
    }

    #[test]
    fn test_savings_no_warning_at_exact_target() {
        let expenses = vec![
            expense(500.0, ExpenseCategory::Future),
            expense(2000.0, ExpenseCategory::Fixed),
        ];
        let ctx = RuleContext::new(&[], &expenses);
        assert!(SavingsRateRule.evaluate(&ctx).is_empty());
    }

    #[test]
    fn test_savings_zero_spending_counts_as_zero_rate() {
        let ctx = RuleContext::new(&[], &[]);
        assert_eq!(SavingsRateRule.evaluate(&ctx).len(), 1);
    }

    #[test]
    fn test_overspend_fires_above_income() {
        let incomes = vec![income(1000.0)];
        let expenses = vec![expense(1200.0, ExpenseCategory::Fun)];
        let ctx = RuleContext::new(&incomes, &expenses);

        let recs = OverspendRule.evaluate(&ctx);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Alert);
    }

    #[test]
    fn test_overspend_quiet_at_or_below_income() {
        let incomes = vec![income(1000.0)];
        let expenses = vec![expense(1000.0, ExpenseCategory::Fun)];
        let ctx = RuleContext::new(&incomes, &expenses);
        assert!(OverspendRule.evaluate(&ctx).is_empty());
    }

    #[test]
    fn test_overspend_with_no_income_but_spending() {
        let expenses = vec![expense(10.0, ExpenseCategory::Fun)];
        let ctx = RuleContext::new(&[], &expenses);
        assert_eq!(OverspendRule.evaluate(&ctx).len(), 1);
    }
}
