//! Level-payment (EMI) loan amortization.
//!
//! The engine is a set of pure functions: `validate` raw inputs into a
//! `LoanRequest`, `compute_installment`, then `build_schedule` (or the lazy
//! `amortize`). Nothing is cached between calls, so discarding a previous
//! result is simply dropping the `LoanSchedule`. All math uses
//! `rust_decimal::Decimal`.

pub mod installment;
pub mod request;
pub mod schedule;

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money};
use crate::EmiResult;

pub use installment::compute_installment;
pub use request::{validate, LoanInput, LoanRequest};
pub use schedule::{amortize, build_schedule, Amortization, LoanBreakdown, LoanSchedule, PeriodEntry};

/// Headline figures of a loan, without the per-period rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub installment: Money,
    pub total_interest: Money,
    pub total_payable: Money,
    pub tenure_months: u32,
    pub breakdown: LoanBreakdown,
}

impl From<&LoanSchedule> for LoanSummary {
    fn from(schedule: &LoanSchedule) -> Self {
        LoanSummary {
            installment: schedule.installment,
            total_interest: schedule.total_interest,
            total_payable: schedule.total_payable,
            tenure_months: schedule.tenure_months(),
            breakdown: schedule.breakdown(),
        }
    }
}

/// Validate, price and amortize a loan in one call.
///
/// `Ok(None)` means the installment or the totals could not be represented
/// (for example an absurd rate overflowed); there is nothing to display and the caller
/// should leave any previous result alone.
pub fn calculate_loan(input: &LoanInput) -> EmiResult<Option<ComputationOutput<LoanSchedule>>> {
    calculate_loan_with_warnings(input, Vec::new())
}

/// As [`calculate_loan`], carrying warnings raised by the caller (e.g. input
/// clamping) into the output envelope.
pub fn calculate_loan_with_warnings(
    input: &LoanInput,
    warnings: Vec<String>,
) -> EmiResult<Option<ComputationOutput<LoanSchedule>>> {
    let start = Instant::now();

    let request = validate(input)?;
    let Some(schedule) = compute_installment(&request)
        .and_then(|installment| build_schedule(&request, installment))
    else {
        return Ok(None);
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(Some(with_metadata(
        "Level-payment amortization (EMI = P*r*(1+r)^N / ((1+r)^N - 1))",
        &request,
        warnings,
        elapsed,
        schedule,
    )))
}
