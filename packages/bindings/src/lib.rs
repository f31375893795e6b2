use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

use emi_core::amortization::{self, LoanInput, LoanSummary};
use emi_core::formatting::CurrencyFormat;
use emi_core::EmiError;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Engine errors keep their kind tag so JS callers can branch on it.
fn to_tagged_error(e: EmiError) -> napi::Error {
    napi::Error::from_reason(format!("{}: {}", e.kind(), e))
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

/// EMI, totals and breakdown. Returns `"null"` when the installment cannot
/// be represented.
#[napi]
pub fn calculate_loan(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = amortization::calculate_loan(&input)
        .map_err(to_tagged_error)?
        .map(|out| out.map(|schedule| LoanSummary::from(&schedule)));
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Full schedule including every period. Returns `"null"` when the
/// installment cannot be represented.
#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = amortization::calculate_loan(&input).map_err(to_tagged_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format an amount (decimal string) with the default rupee format, or with
/// the format given as JSON.
#[napi]
pub fn format_currency(amount: String, format_json: Option<String>) -> NapiResult<String> {
    let value: Decimal = amount.trim().parse().map_err(to_napi_error)?;
    let format: CurrencyFormat = match format_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => CurrencyFormat::default(),
    };
    Ok(format.format(value))
}
