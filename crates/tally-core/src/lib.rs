//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance tracker:
//! - Domain models for income sources and categorized expenses
//! - In-memory record store with process-lifetime ids
//! - Monthly income normalization and category aggregation
//! - Recommendation engine with fixed advisory heuristics

pub mod error;
pub mod models;
pub mod recommend;
pub mod report;
pub mod store;

pub use error::{Error, Result};
pub use models::{
    Expense, ExpenseCategory, ExpenseUpdate, Income, IncomeFrequency, IncomeKind, IncomeUpdate,
    NewExpense, NewIncome,
};
pub use recommend::{Recommendation, RecommendationEngine, RuleContext, RuleKind, Severity};
pub use report::{
    dashboard_summary, performance_summary, CategoryBreakdown, DashboardSummary,
    PerformanceSummary,
};
pub use store::{RecordStore, StoreSnapshot};
