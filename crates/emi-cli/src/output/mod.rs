pub mod csv_out;
pub mod html;
pub mod minimal;
pub mod table;

use emi_core::formatting::CurrencyFormat;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::OutputFormat;

/// Fields holding currency amounts.
const MONEY_FIELDS: [&str; 7] = [
    "installment",
    "total_interest",
    "total_payable",
    "principal",
    "principal_portion",
    "interest_portion",
    "remaining_balance",
];

/// Fields holding percentages.
const SHARE_FIELDS: [&str; 2] = ["principal_share", "interest_share"];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value, currency: &CurrencyFormat) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value, currency),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Decimal carried in a JSON string (the default Decimal encoding) or number.
fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

fn field_name(key: &str) -> &str {
    key.rsplit('.').next().unwrap_or(key)
}

/// Human-facing rendering: currency for amounts, `%` for shares.
fn display_field(key: &str, value: &Value, currency: &CurrencyFormat) -> String {
    let name = field_name(key);
    if let Some(d) = as_decimal(value) {
        if MONEY_FIELDS.contains(&name) {
            return currency.format(d);
        }
        if SHARE_FIELDS.contains(&name) {
            return format!("{}%", d.round_dp(2).normalize());
        }
    }
    plain_value(value)
}

/// Machine-facing rendering: amounts and shares rounded to two places.
fn export_field(key: &str, value: &Value) -> String {
    let name = field_name(key);
    if MONEY_FIELDS.contains(&name) || SHARE_FIELDS.contains(&name) {
        if let Some(d) = as_decimal(value) {
            return d.round_dp(2).to_string();
        }
    }
    plain_value(value)
}

fn plain_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// The object holding the figures: the envelope's `result`, or the value itself.
fn result_object(value: &Value) -> Option<&serde_json::Map<String, Value>> {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
        .as_object()
}

/// Scalar fields of an object, with nested objects flattened to
/// `parent.child` keys. Arrays are skipped.
fn scalar_fields(map: &serde_json::Map<String, Value>) -> Vec<(String, &Value)> {
    let mut fields = Vec::new();
    for (key, val) in map {
        match val {
            Value::Object(inner) => {
                for (child, v) in inner {
                    if !v.is_array() && !v.is_object() {
                        fields.push((format!("{key}.{child}"), v));
                    }
                }
            }
            Value::Array(_) => {}
            _ => fields.push((key.clone(), val)),
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_field_money_and_share() {
        let currency = CurrencyFormat::default();
        assert_eq!(
            display_field("installment", &json!("8791.588723"), &currency),
            "₹8,791.59"
        );
        assert_eq!(
            display_field("breakdown.interest_share", &json!("5.2125"), &currency),
            "5.21%"
        );
        assert_eq!(display_field("tenure_months", &json!(12), &currency), "12");
    }

    #[test]
    fn test_export_field_rounds() {
        assert_eq!(export_field("remaining_balance", &json!("91975.0795")), "91975.08");
        assert_eq!(export_field("period_number", &json!(3)), "3");
    }

    #[test]
    fn test_scalar_fields_flatten() {
        let value = json!({
            "installment": "1",
            "breakdown": {"principal": "2", "interest_share": "3"},
            "periods": [{"period_number": 1}]
        });
        let keys: Vec<String> = scalar_fields(value.as_object().unwrap())
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert!(keys.contains(&"installment".to_string()));
        assert!(keys.contains(&"breakdown.principal".to_string()));
        assert!(!keys.iter().any(|k| k.starts_with("periods")));
    }
}
