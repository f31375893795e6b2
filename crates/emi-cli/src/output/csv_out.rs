use serde_json::Value;
use std::io;

use super::{export_field, result_object, scalar_fields};

/// Schedule columns as (source field, CSV header).
const PERIOD_COLUMNS: [(&str, &str); 4] = [
    ("period_number", "period"),
    ("principal_portion", "principal"),
    ("interest_portion", "interest"),
    ("remaining_balance", "balance"),
];

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV write error: {}", e);
    }
}

/// A schedule becomes one row per period; anything else becomes
/// `field,value` pairs.
pub fn write_csv<W: io::Write>(writer: W, value: &Value) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    match result_object(value) {
        Some(result) => {
            if let Some(Value::Array(periods)) = result.get("periods") {
                wtr.write_record(PERIOD_COLUMNS.iter().map(|(_, header)| *header))?;
                for period in periods {
                    if let Value::Object(map) = period {
                        let row: Vec<String> = PERIOD_COLUMNS
                            .iter()
                            .map(|(key, _)| {
                                map.get(*key)
                                    .map(|v| export_field(key, v))
                                    .unwrap_or_default()
                            })
                            .collect();
                        wtr.write_record(&row)?;
                    }
                }
            } else {
                wtr.write_record(["field", "value"])?;
                for (key, val) in scalar_fields(result) {
                    wtr.write_record([key.as_str(), &export_field(&key, val)])?;
                }
            }
        }
        None => {
            wtr.write_record([&export_field("", value)])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_string(value: &Value) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_schedule_rows() {
        let value = json!({
            "result": {
                "installment": "4182.2003",
                "periods": [
                    {"period_number": 1, "principal_portion": "848.867", "interest_portion": "3333.3333", "remaining_balance": "499151.133"},
                    {"period_number": 2, "principal_portion": "854.526", "interest_portion": "3327.6742", "remaining_balance": "498296.607"}
                ]
            }
        });
        let out = to_string(&value);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "period,principal,interest,balance");
        assert_eq!(lines[1], "1,848.87,3333.33,499151.13");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_summary_pairs() {
        let value = json!({"result": {"installment": "8791.5887", "tenure_months": 12}});
        let out = to_string(&value);
        assert!(out.starts_with("field,value\n"));
        assert!(out.contains("installment,8791.59"));
        assert!(out.contains("tenure_months,12"));
    }
}
