//! Expense handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::{handlers::parse_amount, AppError, AppState, SuccessResponse};
use tally_core::models::{Expense, ExpenseCategory, ExpenseUpdate, NewExpense};

/// Form metadata for the add-expense page, plus the created record on success
#[derive(Debug, Serialize)]
pub struct ExpenseFormResponse {
    pub categories: Vec<ExpenseCategory>,
    pub created: Option<Expense>,
}

impl ExpenseFormResponse {
    fn new(created: Option<Expense>) -> Self {
        Self {
            categories: ExpenseCategory::all().to_vec(),
            created,
        }
    }
}

/// Submitted add-expense form; everything optional so a partial submission
/// still reaches the handler instead of failing extraction
#[derive(Debug, Deserialize)]
pub struct ExpenseFormBody {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

/// GET /add-expense - Form metadata
pub async fn expense_form() -> Json<ExpenseFormResponse> {
    Json(ExpenseFormResponse::new(None))
}

/// POST /add-expense - Create an expense from a form submission
///
/// Missing or unparseable required fields are a silent no-op: the form
/// metadata is served again and nothing is recorded.
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ExpenseFormBody>,
) -> Json<ExpenseFormResponse> {
    let description = form
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    let amount = form
        .amount
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|a| a.is_finite() && *a >= 0.0);
    let category = form
        .category
        .as_deref()
        .and_then(|s| s.parse::<ExpenseCategory>().ok());

    let (Some(description), Some(amount), Some(category)) = (description, amount, category) else {
        tracing::debug!("Incomplete add-expense submission ignored");
        return Json(ExpenseFormResponse::new(None));
    };

    let expense = state.store.add_expense(NewExpense {
        description,
        amount,
        category,
    });

    Json(ExpenseFormResponse::new(Some(expense)))
}

/// Request body for updating an expense; omitted fields are unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    pub description: Option<String>,
    /// Number or numeric string
    pub amount: Option<serde_json::Value>,
    pub category: Option<String>,
}

/// POST /update-expense/:id - Partial update
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateExpenseRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let amount = req.amount.as_ref().map(parse_amount).transpose()?;
    let category = req
        .category
        .as_deref()
        .map(|s| {
            s.parse::<ExpenseCategory>()
                .map_err(|e| AppError::bad_request(&e))
        })
        .transpose()?;

    state.store.update_expense(
        id,
        ExpenseUpdate {
            description: req.description,
            amount,
            category,
        },
    )?;

    Ok(Json(SuccessResponse { success: true }))
}

/// DELETE /delete-expense/:id - Remove an expense
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.store.delete_expense(id)?;
    Ok(Json(SuccessResponse { success: true }))
}
