//! Recommendation Engine - Advisory Heuristics
//!
//! A fixed set of deterministic rules evaluated over the current record set
//! each time the performance view is requested. Every rule that matches
//! contributes a recommendation; output order is rule declaration order and
//! no rule suppresses another.
//!
//! ## Built-in rules
//!
//! - **Insurance Review** - insurance spending worth shopping around
//! - **Utility Switch** - energy bills worth switching provider
//! - **Broadband Deal** - broadband costs worth renegotiating
//! - **Savings Rate** - future-category spending below the 20% target
//! - **Overspend** - total spending exceeds monthly income
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::recommend::{RecommendationEngine, RuleContext};
//!
//! let engine = RecommendationEngine::new();
//! let recs = engine.evaluate_all(&RuleContext::new(&incomes, &expenses));
//! ```

pub mod budget_health;
pub mod cost_cutting;
pub mod engine;
pub mod types;

pub use budget_health::{OverspendRule, SavingsRateRule};
pub use cost_cutting::KeywordRule;
pub use engine::{RecommendationEngine, Rule, RuleContext};
pub use types::{Recommendation, RuleKind, Severity};
