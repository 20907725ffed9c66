//! Recommendation engine - runs the heuristic rules over the current records

use crate::models::{Expense, ExpenseCategory, Income};
use crate::report;

use super::budget_health::{OverspendRule, SavingsRateRule};
use super::cost_cutting::KeywordRule;
use super::types::{Recommendation, RuleKind};

/// Records handed to each rule, with the aggregates they commonly need
pub struct RuleContext<'a> {
    pub incomes: &'a [Income],
    pub expenses: &'a [Expense],
}

impl<'a> RuleContext<'a> {
    pub fn new(incomes: &'a [Income], expenses: &'a [Expense]) -> Self {
        Self { incomes, expenses }
    }

    pub fn monthly_income(&self) -> f64 {
        report::total_monthly_income(self.incomes)
    }

    pub fn total_expenses(&self) -> f64 {
        report::total_expenses(self.expenses)
    }

    pub fn category_total(&self, category: ExpenseCategory) -> f64 {
        report::category_total(self.expenses, category)
    }

    /// True when any expense description contains any of the given keywords,
    /// case-insensitively.
    pub fn any_expense_mentions(&self, keywords: &[&str]) -> bool {
        self.expenses.iter().any(|e| {
            let description = e.description.to_lowercase();
            keywords.iter().any(|kw| description.contains(kw))
        })
    }
}

/// Trait for recommendation rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> RuleKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and produce recommendations
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Recommendation>;
}

/// The engine that evaluates every registered rule
pub struct RecommendationEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the built-in rules registered in their
    /// declaration order.
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(KeywordRule::insurance_review()));
        engine.register(Box::new(KeywordRule::utility_switch()));
        engine.register(Box::new(KeywordRule::broadband_deal()));
        engine.register(Box::new(SavingsRateRule));
        engine.register(Box::new(OverspendRule));

        engine
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Run every rule and collect recommendations.
    ///
    /// Output keeps rule declaration order; the engine never re-sorts by
    /// severity, and no rule suppresses another.
    pub fn evaluate_all(&self, ctx: &RuleContext<'_>) -> Vec<Recommendation> {
        let mut recommendations = vec![];

        for rule in &self.rules {
            let produced = rule.evaluate(ctx);
            tracing::debug!(
                rule = rule.id().as_str(),
                count = produced.len(),
                "Rule evaluated"
            );
            recommendations.extend(produced);
        }

        recommendations
    }

    /// Registered rule kinds, in evaluation order
    pub fn rule_kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}
