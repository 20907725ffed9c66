//! Dashboard and performance view handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use tally_core::models::{Expense, Income};
use tally_core::recommend::{Recommendation, RecommendationEngine, RuleContext};
use tally_core::report::{self, DashboardSummary, PerformanceSummary};

/// Landing page payload
#[derive(Debug, Serialize)]
pub struct LandingResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub incomes: usize,
    pub expenses: usize,
}

/// GET / - Landing page (when no static UI is mounted)
pub async fn landing(State(state): State<Arc<AppState>>) -> Json<LandingResponse> {
    Json(LandingResponse {
        name: "tally",
        version: env!("CARGO_PKG_VERSION"),
        incomes: state.store.list_incomes().len(),
        expenses: state.store.list_expenses().len(),
    })
}

/// Dashboard view: aggregates plus the full record lists the page renders
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
}

/// GET /dashboard - Aggregate view
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let incomes = state.store.list_incomes();
    let expenses = state.store.list_expenses();
    let summary = report::dashboard_summary(&incomes, &expenses);

    Json(DashboardResponse {
        summary,
        incomes,
        expenses,
    })
}

/// Performance view: annual framing plus recommendations
#[derive(Debug, Serialize)]
pub struct PerformanceResponse {
    pub summary: PerformanceSummary,
    pub recommendations: Vec<Recommendation>,
}

/// GET /performance - Annual performance and recommendations
///
/// Recommendations are re-evaluated on every request; nothing is persisted.
pub async fn get_performance(State(state): State<Arc<AppState>>) -> Json<PerformanceResponse> {
    let incomes = state.store.list_incomes();
    let expenses = state.store.list_expenses();

    let summary = report::performance_summary(&incomes, &expenses);
    let engine = RecommendationEngine::new();
    let recommendations = engine.evaluate_all(&RuleContext::new(&incomes, &expenses));

    Json(PerformanceResponse {
        summary,
        recommendations,
    })
}
