use emi_core::formatting::CurrencyFormat;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{display_field, plain_value, scalar_fields};

/// Schedule columns in display order.
const PERIOD_COLUMNS: [(&str, &str); 4] = [
    ("period_number", "Month"),
    ("principal_portion", "Principal"),
    ("interest_portion", "Interest"),
    ("remaining_balance", "Balance"),
];

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value, currency: &CurrencyFormat) {
    println!("{}", render_table(value, currency));
}

pub fn render_table(value: &Value, currency: &CurrencyFormat) -> String {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => render_result(result, Some(map), currency),
            _ => render_result(map, None, currency),
        },
        Value::Array(arr) => arr.iter().map(plain_value).collect::<Vec<_>>().join("\n"),
        _ => value.to_string(),
    }
}

fn render_result(
    result: &serde_json::Map<String, Value>,
    envelope: Option<&serde_json::Map<String, Value>>,
    currency: &CurrencyFormat,
) -> String {
    let mut sections = Vec::new();

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in scalar_fields(result) {
        builder.push_record([key.clone(), display_field(&key, val, currency)]);
    }
    sections.push(Table::from(builder).to_string());

    if let Some(Value::Array(periods)) = result.get("periods") {
        sections.push(render_periods(periods, currency));
    }

    if let Some(env) = envelope {
        if let Some(Value::Array(warnings)) = env.get("warnings") {
            if !warnings.is_empty() {
                let mut lines = vec!["Warnings:".to_string()];
                for w in warnings {
                    if let Value::String(s) = w {
                        lines.push(format!("  - {}", s));
                    }
                }
                sections.push(lines.join("\n"));
            }
        }
        if let Some(Value::String(meth)) = env.get("methodology") {
            sections.push(format!("Methodology: {}", meth));
        }
    }

    sections.join("\n\n")
}

fn render_periods(periods: &[Value], currency: &CurrencyFormat) -> String {
    if periods.is_empty() {
        return "(empty)".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(PERIOD_COLUMNS.iter().map(|(_, label)| label.to_string()));
    for period in periods {
        if let Value::Object(map) = period {
            let row: Vec<String> = PERIOD_COLUMNS
                .iter()
                .map(|(key, _)| {
                    map.get(*key)
                        .map(|v| display_field(key, v, currency))
                        .unwrap_or_default()
                })
                .collect();
            builder.push_record(row);
        }
    }
    Table::from(builder).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_schedule_envelope() {
        let value = json!({
            "result": {
                "installment": "8791.5887",
                "total_payable": "105499.0647",
                "total_interest": "5499.0647",
                "periods": [
                    {
                        "period_number": 1,
                        "principal_portion": "7958.2554",
                        "interest_portion": "833.3333",
                        "remaining_balance": "92041.7446"
                    }
                ]
            },
            "methodology": "Level-payment amortization",
            "warnings": ["Principal clamped"]
        });
        let out = render_table(&value, &CurrencyFormat::default());
        assert!(out.contains("₹8,791.59"));
        assert!(out.contains("₹1,05,499.06"));
        assert!(out.contains("Month"));
        assert!(out.contains("₹92,041.74"));
        assert!(out.contains("Warnings:"));
        assert!(out.contains("Methodology: Level-payment amortization"));
    }

    #[test]
    fn test_render_bare_object() {
        let value = json!({"installment": "100"});
        let out = render_table(&value, &CurrencyFormat::default());
        assert!(out.contains("₹100"));
        assert!(!out.contains("Methodology"));
    }
}
