//! Domain models for Tally

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often an income amount is paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    Hourly,
    Weekly,
    Monthly,
    Annually,
}

impl IncomeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Annually => "annually",
        }
    }

    /// All frequencies, in form-display order
    pub fn all() -> &'static [IncomeFrequency] {
        &[
            Self::Hourly,
            Self::Weekly,
            Self::Monthly,
            Self::Annually,
        ]
    }
}

impl std::str::FromStr for IncomeFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "annually" | "yearly" => Ok(Self::Annually),
            _ => Err(format!("Unknown income frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for IncomeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Income source kind - primary salary vs side income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeKind {
    #[default]
    Primary,
    Other,
}

impl IncomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Other => "other",
        }
    }

    /// Description used when the submitted form leaves it blank
    pub fn default_description(&self) -> &'static str {
        match self {
            Self::Primary => "Primary Income",
            Self::Other => "Other Income",
        }
    }

    pub fn all() -> &'static [IncomeKind] {
        &[Self::Primary, Self::Other]
    }
}

impl std::str::FromStr for IncomeKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown income kind: {}", s)),
        }
    }
}

impl std::fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded income source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub description: String,
    /// Amount per pay period (non-negative)
    pub amount: f64,
    pub frequency: IncomeFrequency,
    pub kind: IncomeKind,
}

/// A new income source before it is assigned an id
#[derive(Debug, Clone)]
pub struct NewIncome {
    /// Falls back to the kind's default description when empty
    pub description: Option<String>,
    pub amount: f64,
    pub frequency: IncomeFrequency,
    pub kind: IncomeKind,
}

/// Budget category an expense belongs to, following the 50/30/20 split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Essentials: rent, utilities, insurance
    Fixed,
    /// Discretionary spending
    Fun,
    /// Savings and investments
    Future,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Fun => "fun",
            Self::Future => "future",
        }
    }

    /// Target share of monthly income for this category, in percent
    pub fn target_share(&self) -> f64 {
        match self {
            Self::Fixed => 50.0,
            Self::Fun => 30.0,
            Self::Future => 20.0,
        }
    }

    pub fn all() -> &'static [ExpenseCategory] {
        &[Self::Fixed, Self::Fun, Self::Future]
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "fun" => Ok(Self::Fun),
            "future" => Ok(Self::Future),
            _ => Err(format!("Unknown expense category: {}", s)),
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    /// Non-negative
    pub amount: f64,
    pub category: ExpenseCategory,
    pub created_at: DateTime<Utc>,
}

/// A new expense before it is assigned an id and timestamp
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category: ExpenseCategory,
}

/// Partial update for an income record; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct IncomeUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub frequency: Option<IncomeFrequency>,
    pub kind: Option<IncomeKind>,
}

/// Partial update for an expense record; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<ExpenseCategory>,
}
