//! Loan inputs and their validation.
//!
//! `LoanInput` is what a presentation layer hands over: possibly missing,
//! possibly negative, possibly not a number. `validate` turns it into a
//! `LoanRequest`, the only form the rest of the engine accepts.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EmiError;
use crate::types::{Money, Rate};
use crate::EmiResult;

const MONTHS_PER_YEAR: i64 = 12;
const PERCENT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Raw loan parameters as supplied by a caller.
///
/// `None` in `principal` or `annual_interest_rate` means "not a number".
/// Missing or `null` tenure fields count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Option<Money>,
    /// Annual rate in percent (8.5 = 8.5% per year).
    pub annual_interest_rate: Option<Decimal>,
    #[serde(default = "zero_tenure")]
    pub tenure_years: Option<i64>,
    #[serde(default = "zero_tenure")]
    pub tenure_months: Option<i64>,
}

fn zero_tenure() -> Option<i64> {
    Some(0)
}

impl LoanInput {
    pub fn new(principal: Money, annual_interest_rate: Decimal, years: i64, months: i64) -> Self {
        LoanInput {
            principal: Some(principal),
            annual_interest_rate: Some(annual_interest_rate),
            tenure_years: Some(years),
            tenure_months: Some(months),
        }
    }

    /// Build an input from raw text fields.
    ///
    /// Blank principal or rate is treated as not-a-number. Years and months
    /// take the leading whole number of the text ("1.5" is 1, "12 months"
    /// is 12); text with no leading digits counts as zero.
    pub fn from_text(principal: &str, annual_interest_rate: &str, years: &str, months: &str) -> Self {
        LoanInput {
            principal: parse_amount(principal),
            annual_interest_rate: parse_amount(annual_interest_rate),
            tenure_years: parse_count(years),
            tenure_months: parse_count(months),
        }
    }
}

fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
}

fn parse_count(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Some(0);
    }
    // Out-of-range counts saturate so validation reports an overlong tenure
    let count = match unsigned[..digits].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(count)
}

// ---------------------------------------------------------------------------
// Validated request
// ---------------------------------------------------------------------------

/// A loan whose principal, rate and tenure are all strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanRequest {
    principal: Money,
    annual_interest_rate: Decimal,
    tenure_months: u32,
}

impl LoanRequest {
    pub fn principal(&self) -> Money {
        self.principal
    }

    /// Annual rate in percent.
    pub fn annual_interest_rate(&self) -> Decimal {
        self.annual_interest_rate
    }

    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }

    /// Periodic rate as a decimal: annual percent / 12 / 100.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_interest_rate / Decimal::from(MONTHS_PER_YEAR) / PERCENT
    }
}

/// Validate raw loan parameters.
///
/// Negative values are checked first across every field, so a negative
/// principal is reported as `NegativeValue` even when the tenure is also
/// zero.
pub fn validate(input: &LoanInput) -> EmiResult<LoanRequest> {
    let negatives = [
        ("principal", input.principal.is_some_and(|v| v < Decimal::ZERO)),
        ("annual_interest_rate", input.annual_interest_rate.is_some_and(|v| v < Decimal::ZERO)),
        ("tenure_years", input.tenure_years.is_some_and(|v| v < 0)),
        ("tenure_months", input.tenure_months.is_some_and(|v| v < 0)),
    ];
    if let Some((field, _)) = negatives.iter().find(|(_, negative)| *negative) {
        return Err(EmiError::NegativeValue {
            field: (*field).into(),
        });
    }

    let principal = match input.principal {
        Some(p) if !p.is_zero() => p,
        _ => {
            return Err(EmiError::InvalidInput {
                field: "principal".into(),
                reason: "Principal must be a positive number".into(),
            })
        }
    };
    let annual_interest_rate = match input.annual_interest_rate {
        Some(r) if !r.is_zero() => r,
        _ => {
            return Err(EmiError::InvalidInput {
                field: "annual_interest_rate".into(),
                reason: "Interest rate must be a positive number".into(),
            })
        }
    };
    let years = input.tenure_years.unwrap_or(0);
    let months = input.tenure_months.unwrap_or(0);
    if years == 0 && months == 0 {
        return Err(EmiError::InvalidInput {
            field: "tenure".into(),
            reason: "Tenure must be at least one month".into(),
        });
    }

    let tenure_months = years
        .checked_mul(MONTHS_PER_YEAR)
        .and_then(|m| m.checked_add(months))
        .and_then(|m| u32::try_from(m).ok())
        .ok_or_else(|| EmiError::InvalidInput {
            field: "tenure".into(),
            reason: "Tenure is too long".into(),
        })?;

    Ok(LoanRequest {
        principal,
        annual_interest_rate,
        tenure_months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_combines_tenure() {
        let req = validate(&LoanInput::new(dec!(250000), dec!(9.5), 2, 6)).unwrap();
        assert_eq!(req.principal(), dec!(250000));
        assert_eq!(req.annual_interest_rate(), dec!(9.5));
        assert_eq!(req.tenure_months(), 30);
    }

    #[test]
    fn test_monthly_rate() {
        let req = validate(&LoanInput::new(dec!(1000), dec!(12), 1, 0)).unwrap();
        assert_eq!(req.monthly_rate(), dec!(0.01));
    }

    #[test]
    fn test_negative_principal_rejected() {
        let err = validate(&LoanInput::new(dec!(-1000), dec!(10), 1, 0)).unwrap_err();
        match err {
            EmiError::NegativeValue { field } => assert_eq!(field, "principal"),
            other => panic!("Expected NegativeValue, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_wins_over_zero_tenure() {
        let err = validate(&LoanInput::new(dec!(1000), dec!(10), 0, -1)).unwrap_err();
        assert_eq!(err.kind(), "NegativeValueError");

        let err = validate(&LoanInput::new(dec!(0), dec!(-2), 0, 0)).unwrap_err();
        assert_eq!(err.kind(), "NegativeValueError");
    }

    #[test]
    fn test_zero_tenure_rejected() {
        let err = validate(&LoanInput::new(dec!(1000), dec!(10), 0, 0)).unwrap_err();
        match err {
            EmiError::InvalidInput { field, .. } => assert_eq!(field, "tenure"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_principal_and_rate_rejected() {
        let err = validate(&LoanInput::new(dec!(0), dec!(10), 1, 0)).unwrap_err();
        assert_eq!(err.kind(), "InvalidInputError");

        let err = validate(&LoanInput::new(dec!(1000), dec!(0), 1, 0)).unwrap_err();
        assert_eq!(err.kind(), "InvalidInputError");
    }

    #[test]
    fn test_from_text_parsing() {
        let input = LoanInput::from_text(" 100000 ", "10", "", "12");
        assert_eq!(input.principal, Some(dec!(100000)));
        assert_eq!(input.tenure_years, Some(0));
        assert_eq!(input.tenure_months, Some(12));
        assert_eq!(validate(&input).unwrap().tenure_months(), 12);

        let input = LoanInput::from_text("abc", "10", "1", "0");
        assert_eq!(input.principal, None);
        assert_eq!(validate(&input).unwrap_err().kind(), "InvalidInputError");

        let input = LoanInput::from_text("1e5", "8", "1", "0");
        assert_eq!(input.principal, Some(dec!(100000)));
    }

    #[test]
    fn test_tenure_text_takes_leading_whole_number() {
        let input = LoanInput::from_text("1000", "10", "1.5", "0");
        assert_eq!(input.tenure_years, Some(1));
        assert_eq!(validate(&input).unwrap().tenure_months(), 12);

        let input = LoanInput::from_text("1000", "10", "2 years", "+3");
        assert_eq!(validate(&input).unwrap().tenure_months(), 27);
    }

    #[test]
    fn test_unparseable_tenure_counts_as_zero() {
        let input = LoanInput::from_text("100000", "10", "abc", "12");
        assert_eq!(input.tenure_years, Some(0));
        assert_eq!(validate(&input).unwrap().tenure_months(), 12);

        let input = LoanInput::from_text("100000", "10", "abc", "-");
        match validate(&input).unwrap_err() {
            EmiError::InvalidInput { field, .. } => assert_eq!(field, "tenure"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_null_tenure_counts_as_zero() {
        let input: LoanInput = serde_json::from_str(
            r#"{"principal": 5000, "annual_interest_rate": 7, "tenure_years": null, "tenure_months": 4}"#,
        )
        .unwrap();
        assert_eq!(validate(&input).unwrap().tenure_months(), 4);
    }

    #[test]
    fn test_huge_tenure_text_is_too_long() {
        let input = LoanInput::from_text("1000", "10", "99999999999999999999", "0");
        assert_eq!(input.tenure_years, Some(i64::MAX));
        assert_eq!(validate(&input).unwrap_err().kind(), "InvalidInputError");

        let input = LoanInput::from_text("1000", "10", "-99999999999999999999", "0");
        assert_eq!(validate(&input).unwrap_err().kind(), "NegativeValueError");
    }

    #[test]
    fn test_negative_text_is_negative_value() {
        let input = LoanInput::from_text("1000", "10", "-2", "0");
        assert_eq!(validate(&input).unwrap_err().kind(), "NegativeValueError");

        let input = LoanInput::from_text("1000", "10", "1", "-1.5");
        assert_eq!(input.tenure_months, Some(-1));
        assert_eq!(validate(&input).unwrap_err().kind(), "NegativeValueError");
    }

    #[test]
    fn test_tenure_overflow_rejected() {
        let err = validate(&LoanInput::new(dec!(1000), dec!(10), i64::MAX, 0)).unwrap_err();
        assert_eq!(err.kind(), "InvalidInputError");
    }

    #[test]
    fn test_json_missing_tenure_defaults_to_zero() {
        let input: LoanInput =
            serde_json::from_str(r#"{"principal": 5000, "annual_interest_rate": 7, "tenure_months": 6}"#)
                .unwrap();
        assert_eq!(input.tenure_years, Some(0));
        assert_eq!(validate(&input).unwrap().tenure_months(), 6);
    }
}
