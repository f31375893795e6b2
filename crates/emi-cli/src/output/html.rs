use emi_core::amortization::LoanSchedule;
use emi_core::formatting::CurrencyFormat;
use std::fmt::Write;

const PRINT_STYLE: &str = "body { font-family: sans-serif; } \
table { width: 100%; border-collapse: collapse; } \
th, td { padding: 8px; border: 1px solid #ddd; text-align: right; } \
th { background-color: #f2f2f2; }";

/// Standalone, printable HTML page for a schedule.
pub fn render_schedule(schedule: &LoanSchedule, currency: &CurrencyFormat) -> String {
    let mut html = String::new();
    let money = |amount| escape(&currency.format(amount));

    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    html.push_str("<title>Amortization Schedule</title>");
    let _ = write!(html, "<style> {} </style>", PRINT_STYLE);
    html.push_str("</head><body>\n<h2>Amortization Schedule</h2>\n");

    let _ = writeln!(
        html,
        "<p>Monthly EMI: {} &middot; Total interest: {} &middot; Total payable: {}</p>",
        money(schedule.installment),
        money(schedule.total_interest),
        money(schedule.total_payable),
    );

    html.push_str(
        "<table>\n<thead><tr><th>Month</th><th>Principal</th><th>Interest</th><th>Balance</th></tr></thead>\n<tbody>\n",
    );
    for period in &schedule.periods {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            period.period_number,
            money(period.principal_portion),
            money(period.interest_portion),
            money(period.remaining_balance),
        );
    }
    html.push_str("</tbody>\n</table>\n</body></html>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use emi_core::amortization::{build_schedule, compute_installment, validate, LoanInput};
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_row_per_period() {
        let req = validate(&LoanInput::new(dec!(100000), dec!(10), 1, 0)).unwrap();
        let schedule = build_schedule(&req, compute_installment(&req).unwrap()).unwrap();
        let html = render_schedule(&schedule, &CurrencyFormat::default());

        assert!(html.contains("<title>Amortization Schedule</title>"));
        assert!(html.contains("Monthly EMI: ₹8,791.59"));
        assert_eq!(html.matches("<tr><td>").count(), 12);
        assert!(html.contains("<tr><td>12</td>"));
    }

    #[test]
    fn test_symbol_is_escaped() {
        let req = validate(&LoanInput::new(dec!(1000), dec!(12), 0, 1)).unwrap();
        let schedule = build_schedule(&req, compute_installment(&req).unwrap()).unwrap();
        let currency = CurrencyFormat {
            symbol: "<R>".into(),
            ..CurrencyFormat::default()
        };
        let html = render_schedule(&schedule, &currency);
        assert!(html.contains("&lt;R&gt;1,010"));
        assert!(!html.contains("<R>"));
    }
}
