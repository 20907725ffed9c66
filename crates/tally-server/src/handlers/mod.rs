//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for one part of the route surface.

pub mod expenses;
pub mod incomes;
pub mod reports;

// Re-export all handlers for use in router
pub use expenses::*;
pub use incomes::*;
pub use reports::*;

use crate::AppError;

/// Parse an amount field that may arrive as a JSON number or a string (HTML
/// forms and the inline editor both send strings).
///
/// Rejects non-numeric values and negative amounts with a 400.
pub(crate) fn parse_amount(value: &serde_json::Value) -> Result<f64, AppError> {
    let amount = match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| AppError::bad_request("Invalid amount"))?,
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::bad_request(&format!("Invalid amount: {}", s)))?,
        _ => return Err(AppError::bad_request("Invalid amount")),
    };

    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::bad_request("Amount must be non-negative"));
    }
    Ok(amount)
}
