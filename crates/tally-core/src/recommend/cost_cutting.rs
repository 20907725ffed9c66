//! Cost-cutting rules
//!
//! Keyword scans over expense descriptions that point at common switchable
//! household costs: insurance premiums, energy bills, and broadband.

use super::engine::{Rule, RuleContext};
use super::types::{Recommendation, RuleKind, Severity};

/// A rule that fires when any expense description mentions one of a fixed
/// set of keywords
pub struct KeywordRule {
    kind: RuleKind,
    name: &'static str,
    keywords: &'static [&'static str],
    title: &'static str,
    message: &'static str,
}

impl KeywordRule {
    pub fn insurance_review() -> Self {
        Self {
            kind: RuleKind::InsuranceReview,
            name: "Insurance Review",
            keywords: &["insurance"],
            title: "Review Your Insurance",
            message: "You're paying for insurance. Compare quotes once a year - loyalty rarely pays.",
        }
    }

    pub fn utility_switch() -> Self {
        Self {
            kind: RuleKind::UtilitySwitch,
            name: "Utility Switch",
            keywords: &["energy", "electric", "gas", "bill"],
            title: "Shop Around for Utilities",
            message: "Energy bills spotted in your spending. Switching provider often cuts the cost.",
        }
    }

    pub fn broadband_deal() -> Self {
        Self {
            kind: RuleKind::BroadbandDeal,
            name: "Broadband Deal",
            keywords: &["broadband", "internet", "wifi"],
            title: "Renegotiate Your Broadband",
            message: "Broadband costs found. Out-of-contract prices creep up - call and haggle.",
        }
    }
}

impl Rule for KeywordRule {
    fn id(&self) -> RuleKind {
        self.kind
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Recommendation> {
        if !ctx.any_expense_mentions(self.keywords) {
            return vec![];
        }

        vec![Recommendation::new(
            self.kind,
            Severity::Opportunity,
            self.title,
            self.message,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory};

    fn expense(description: &str) -> Expense {
        Expense {
            id: 1,
            description: description.to_string(),
            amount: 50.0,
            category: ExpenseCategory::Fixed,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_insurance_match_is_case_insensitive() {
        let expenses = vec![expense("CAR INSURANCE premium")];
        let ctx = RuleContext::new(&[], &expenses);

        let recs = KeywordRule::insurance_review().evaluate(&ctx);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].severity, Severity::Opportunity);
        assert_eq!(recs[0].title, "Review Your Insurance");
    }

    #[test]
    fn test_utility_matches_any_keyword() {
        for description in ["Energy top-up", "electric meter", "Gas", "Phone bill"] {
            let expenses = vec![expense(description)];
            let ctx = RuleContext::new(&[], &expenses);
            assert_eq!(
                KeywordRule::utility_switch().evaluate(&ctx).len(),
                1,
                "expected match for {:?}",
                description
            );
        }
    }

    #[test]
    fn test_broadband_no_match_without_keyword() {
        let expenses = vec![expense("Groceries"), expense("Cinema tickets")];
        let ctx = RuleContext::new(&[], &expenses);
        assert!(KeywordRule::broadband_deal().evaluate(&ctx).is_empty());
    }

    #[test]
    fn test_keyword_inside_longer_word_still_matches() {
        // Matching is substring-based, not word-based
        let expenses = vec![expense("Billing adjustment")];
        let ctx = RuleContext::new(&[], &expenses);
        assert_eq!(KeywordRule::utility_switch().evaluate(&ctx).len(), 1);
    }

    #[test]
    fn test_single_recommendation_for_many_matches() {
        let expenses = vec![
            expense("Home insurance"),
            expense("Car insurance"),
            expense("Pet insurance"),
        ];
        let ctx = RuleContext::new(&[], &expenses);
        assert_eq!(KeywordRule::insurance_review().evaluate(&ctx).len(), 1);
    }
}
