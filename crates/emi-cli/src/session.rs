use tracing::debug;

use emi_core::amortization::{calculate_loan_with_warnings, LoanInput, LoanSchedule};
use emi_core::EmiResult;

use crate::config::InputLimits;

/// Holds the schedule currently on display.
///
/// A successful calculation replaces it; a failed or degenerate one leaves
/// it as it was; `reset` clears it.
#[derive(Debug, Default)]
pub struct Session {
    limits: InputLimits,
    current: Option<LoanSchedule>,
    warnings: Vec<String>,
}

impl Session {
    pub fn new(limits: InputLimits) -> Self {
        Session {
            limits,
            current: None,
            warnings: Vec::new(),
        }
    }

    pub fn calculate(&mut self, mut input: LoanInput) -> EmiResult<Option<&LoanSchedule>> {
        let warnings = self.limits.apply(&mut input);
        match calculate_loan_with_warnings(&input, warnings)? {
            Some(output) => {
                debug!(tenure = output.result.tenure_months(), "schedule replaced");
                self.warnings = output.warnings;
                self.current = Some(output.result);
                Ok(self.current.as_ref())
            }
            None => {
                debug!("installment not representable, keeping previous schedule");
                Ok(None)
            }
        }
    }

    pub fn reset(&mut self) {
        debug!("session reset");
        self.current = None;
        self.warnings.clear();
    }

    pub fn current(&self) -> Option<&LoanSchedule> {
        self.current.as_ref()
    }

    /// Warnings raised by the calculation that produced the current schedule.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
