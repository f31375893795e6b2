use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use super::request::LoanRequest;
use crate::types::Money;

/// Equated monthly installment (EMI) for a fully amortizing loan.
///
/// `P * r * (1+r)^N / ((1+r)^N - 1)` with `r` the monthly rate and `N` the
/// tenure in months. Returns `None` when any step overflows or divides by
/// zero, or when the result is not positive. Callers treat `None` as
/// "nothing to show" rather than as an error.
pub fn compute_installment(request: &LoanRequest) -> Option<Money> {
    let rate = request.monthly_rate();
    let factor = (Decimal::ONE + rate).checked_powu(u64::from(request.tenure_months()))?;
    let annuity_factor = factor.checked_sub(Decimal::ONE)?;

    let installment = request
        .principal()
        .checked_mul(rate)?
        .checked_mul(factor)?
        .checked_div(annuity_factor)?;

    (installment > Decimal::ZERO).then_some(installment)
}
