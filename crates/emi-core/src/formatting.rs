//! Currency display for amounts produced by the engine.
//!
//! The engine only emits plain `Decimal` values; this module is the single
//! place that rounds them for display. Defaults match Indian rupee
//! conventions: `₹` prefix, lakh/crore digit grouping (`1,05,499`), up to
//! two fraction digits with trailing zeros dropped.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Digit grouping for the integer part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Last three digits, then groups of two: 1,23,45,678
    #[default]
    Indian,
    /// Groups of three: 12,345,678
    Western,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
    pub max_fraction_digits: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: "₹".to_string(),
            grouping: Grouping::Indian,
            max_fraction_digits: 2,
        }
    }
}

impl CurrencyFormat {
    pub fn format(&self, amount: Money) -> String {
        let rounded = amount
            .round_dp_with_strategy(self.max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let negative = rounded < Decimal::ZERO;
        let digits = rounded.abs().to_string();

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_digits(int_part, self.grouping));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}

fn group_digits(int_part: &str, grouping: Grouping) -> String {
    let len = int_part.len();
    if len <= 3 {
        return int_part.to_string();
    }

    let (head, tail) = int_part.split_at(len - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}
