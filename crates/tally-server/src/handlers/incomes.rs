//! Income handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::{handlers::parse_amount, AppError, AppState, SuccessResponse};
use tally_core::models::{Income, IncomeFrequency, IncomeKind, IncomeUpdate, NewIncome};

/// One selectable income kind, with the description used when none is given
#[derive(Debug, Serialize)]
pub struct KindOption {
    pub kind: IncomeKind,
    pub default_description: &'static str,
}

/// Form metadata for the add-income page, plus the created record on success
#[derive(Debug, Serialize)]
pub struct IncomeFormResponse {
    pub frequencies: Vec<IncomeFrequency>,
    pub kinds: Vec<KindOption>,
    pub created: Option<Income>,
}

impl IncomeFormResponse {
    fn new(created: Option<Income>) -> Self {
        Self {
            frequencies: IncomeFrequency::all().to_vec(),
            kinds: IncomeKind::all()
                .iter()
                .map(|&kind| KindOption {
                    kind,
                    default_description: kind.default_description(),
                })
                .collect(),
            created,
        }
    }
}

/// Submitted add-income form; everything optional so a partial submission
/// still reaches the handler instead of failing extraction
#[derive(Debug, Deserialize)]
pub struct IncomeFormBody {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub frequency: Option<String>,
    pub kind: Option<String>,
}

/// GET /add-income - Form metadata
pub async fn income_form() -> Json<IncomeFormResponse> {
    Json(IncomeFormResponse::new(None))
}

/// POST /add-income - Create an income source from a form submission
///
/// Missing or unparseable required fields are a silent no-op: the form
/// metadata is served again and nothing is recorded, the JSON equivalent of
/// re-rendering the form page.
pub async fn create_income(
    State(state): State<Arc<AppState>>,
    Form(form): Form<IncomeFormBody>,
) -> Json<IncomeFormResponse> {
    let amount = form
        .amount
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|a| a.is_finite() && *a >= 0.0);
    let frequency = form
        .frequency
        .as_deref()
        .and_then(|s| s.parse::<IncomeFrequency>().ok());
    // Kind defaults to primary when the field is absent; an unknown value is
    // still a no-op
    let kind = match form.kind.as_deref() {
        None => Some(IncomeKind::default()),
        Some(s) => s.parse::<IncomeKind>().ok(),
    };

    let (Some(amount), Some(frequency), Some(kind)) = (amount, frequency, kind) else {
        tracing::debug!("Incomplete add-income submission ignored");
        return Json(IncomeFormResponse::new(None));
    };

    let income = state.store.add_income(NewIncome {
        description: form.description,
        amount,
        frequency,
        kind,
    });

    Json(IncomeFormResponse::new(Some(income)))
}

/// Request body for updating an income; omitted fields are unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateIncomeRequest {
    pub description: Option<String>,
    /// Number or numeric string
    pub amount: Option<serde_json::Value>,
    pub frequency: Option<String>,
    pub kind: Option<String>,
}

/// POST /update-income/:id - Partial update
pub async fn update_income(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateIncomeRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let amount = req.amount.as_ref().map(parse_amount).transpose()?;
    let frequency = req
        .frequency
        .as_deref()
        .map(|s| {
            s.parse::<IncomeFrequency>()
                .map_err(|e| AppError::bad_request(&e))
        })
        .transpose()?;
    let kind = req
        .kind
        .as_deref()
        .map(|s| s.parse::<IncomeKind>().map_err(|e| AppError::bad_request(&e)))
        .transpose()?;

    state.store.update_income(
        id,
        IncomeUpdate {
            description: req.description,
            amount,
            frequency,
            kind,
        },
    )?;

    Ok(Json(SuccessResponse { success: true }))
}

/// DELETE /delete-income/:id - Remove an income source
pub async fn delete_income(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.store.delete_income(id)?;
    Ok(Json(SuccessResponse { success: true }))
}
