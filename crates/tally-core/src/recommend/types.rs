//! Core types for the recommendation engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The heuristic rules that can produce recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Insurance spending worth shopping around
    InsuranceReview,
    /// Energy / utility bills worth switching provider
    UtilitySwitch,
    /// Broadband spending worth renegotiating
    BroadbandDeal,
    /// Savings falling short of the 20% target
    SavingsRate,
    /// Spending exceeds monthly income
    Overspend,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::InsuranceReview => "insurance_review",
            RuleKind::UtilitySwitch => "utility_switch",
            RuleKind::BroadbandDeal => "broadband_deal",
            RuleKind::SavingsRate => "savings_rate",
            RuleKind::Overspend => "overspend",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insurance_review" => Ok(RuleKind::InsuranceReview),
            "utility_switch" => Ok(RuleKind::UtilitySwitch),
            "broadband_deal" => Ok(RuleKind::BroadbandDeal),
            "savings_rate" => Ok(RuleKind::SavingsRate),
            "overspend" => Ok(RuleKind::Overspend),
            _ => Err(format!("Unknown rule kind: {}", s)),
        }
    }
}

/// How a recommendation should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A chance to save money
    Opportunity,
    /// A habit worth correcting
    Warning,
    /// Budget is in trouble now
    Alert,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Opportunity => "opportunity",
            Severity::Warning => "warning",
            Severity::Alert => "alert",
        }
    }

    /// Numeric priority (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Opportunity => 1,
            Severity::Warning => 2,
            Severity::Alert => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "opportunity" => Ok(Severity::Opportunity),
            "warning" => Ok(Severity::Warning),
            "alert" => Ok(Severity::Alert),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// An advisory message produced by one rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Rule that produced this recommendation
    pub rule: RuleKind,
    pub severity: Severity,
    /// Short heading (e.g. "Boost Your Savings")
    pub title: String,
    /// One-line advice shown to the user
    pub message: String,
}

impl Recommendation {
    pub fn new(
        rule: RuleKind,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            severity,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_serialization() {
        assert_eq!(RuleKind::SavingsRate.as_str(), "savings_rate");
        assert_eq!(
            RuleKind::from_str("utility_switch").unwrap(),
            RuleKind::UtilitySwitch
        );
        assert!(RuleKind::from_str("bogus").is_err());
    }

    #[test]
    fn test_severity_priority() {
        assert!(Severity::Alert.priority() > Severity::Warning.priority());
        assert!(Severity::Warning.priority() > Severity::Opportunity.priority());
    }

    #[test]
    fn test_recommendation_serializes_snake_case() {
        let rec = Recommendation::new(
            RuleKind::Overspend,
            Severity::Alert,
            "Spending Exceeds Income",
            "You are spending more than you earn",
        );
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["rule"], "overspend");
        assert_eq!(json["severity"], "alert");
    }
}
