use std::io::{self, Read};

use emi_core::amortization::LoanInput;

/// Loan parameters piped on stdin as JSON.
/// Returns None if stdin is a TTY (interactive) or nothing was piped.
pub fn read_stdin() -> Result<Option<LoanInput>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    read_piped(io::stdin().lock())
}

fn read_piped<R: Read>(mut reader: R) -> Result<Option<LoanInput>, Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let loan_input = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse loan input from stdin: {}", e))?;
    Ok(Some(loan_input))
}
