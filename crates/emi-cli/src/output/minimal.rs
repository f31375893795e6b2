use serde_json::Value;

use super::{export_field, plain_value, result_object};

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in order of priority, then falls
/// back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    println!("{}", render_minimal(value));
}

pub fn render_minimal(value: &Value) -> String {
    let priority_keys = ["installment", "total_payable", "total_interest"];

    if let Some(map) = result_object(value) {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    return export_field(key, val);
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, export_field(key, val));
        }
    }

    plain_value(value)
}
