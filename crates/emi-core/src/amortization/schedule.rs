//! Month-by-month amortization of a level-payment loan.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::request::LoanRequest;
use crate::types::{Money, Rate};

const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One row of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEntry {
    /// 1-based month number.
    pub period_number: u32,
    pub principal_portion: Money,
    pub interest_portion: Money,
    /// Outstanding balance after this payment, floored at zero.
    pub remaining_balance: Money,
}

/// Installment, totals, and the full period-by-period breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub installment: Money,
    /// installment * tenure
    pub total_payable: Money,
    /// total_payable - principal
    pub total_interest: Money,
    pub periods: Vec<PeriodEntry>,
}

/// How the total payable splits between principal and interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanBreakdown {
    pub principal: Money,
    pub total_interest: Money,
    /// Principal as a percentage of total payable.
    pub principal_share: Rate,
    /// Interest as a percentage of total payable.
    pub interest_share: Rate,
}

impl LoanSchedule {
    pub fn principal(&self) -> Money {
        self.total_payable - self.total_interest
    }

    pub fn tenure_months(&self) -> u32 {
        self.periods.len() as u32
    }

    pub fn breakdown(&self) -> LoanBreakdown {
        let principal = self.principal();
        let (principal_share, interest_share) = if self.total_payable.is_zero() {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            let p = principal / self.total_payable * HUNDRED;
            (p, HUNDRED - p)
        };
        LoanBreakdown {
            principal,
            total_interest: self.total_interest,
            principal_share,
            interest_share,
        }
    }
}

// ---------------------------------------------------------------------------
// Lazy schedule
// ---------------------------------------------------------------------------

/// Iterator over the periods of a schedule.
///
/// Interest for each period accrues on the unclamped running balance; only
/// the `remaining_balance` reported in each entry is floored at zero.
#[derive(Debug, Clone)]
pub struct Amortization {
    monthly_rate: Rate,
    installment: Money,
    balance: Money,
    next_period: u32,
    remaining: u32,
}

impl Amortization {
    /// Running balance after the last yielded period, before clamping.
    pub fn outstanding(&self) -> Money {
        self.balance
    }
}

impl Iterator for Amortization {
    type Item = PeriodEntry;

    fn next(&mut self) -> Option<PeriodEntry> {
        if self.remaining == 0 {
            return None;
        }

        let interest_portion = self.balance * self.monthly_rate;
        let principal_portion = self.installment - interest_portion;
        self.balance -= principal_portion;

        let entry = PeriodEntry {
            period_number: self.next_period,
            principal_portion,
            interest_portion,
            remaining_balance: self.balance.max(Decimal::ZERO),
        };
        self.next_period = self.next_period.saturating_add(1);
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Amortization {}

impl std::iter::FusedIterator for Amortization {}

/// Start a fresh, lazily evaluated schedule for `request` at `installment`.
pub fn amortize(request: &LoanRequest, installment: Money) -> Amortization {
    Amortization {
        monthly_rate: request.monthly_rate(),
        installment,
        balance: request.principal(),
        next_period: 1,
        remaining: request.tenure_months(),
    }
}

/// Build the complete schedule eagerly.
///
/// Returns `None` when the totals cannot be represented, the same silent
/// no-result case as [`compute_installment`](super::compute_installment).
pub fn build_schedule(request: &LoanRequest, installment: Money) -> Option<LoanSchedule> {
    let tenure = Decimal::from(request.tenure_months());
    let total_payable = installment.checked_mul(tenure)?;
    let total_interest = total_payable.checked_sub(request.principal())?;
    Some(LoanSchedule {
        installment,
        total_payable,
        total_interest,
        periods: amortize(request, installment).collect(),
    })
}
