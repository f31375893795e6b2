use std::fs;
use std::path::{Path, PathBuf};

use emi_core::amortization::LoanInput;

/// Read loan parameters from a JSON file.
pub fn read_loan_input(path: &str) -> Result<LoanInput, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e))?;
    let loan_input = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse loan input '{}': {}", resolved.display(), e))?;
    Ok(loan_input)
}

/// Relative paths resolve against the working directory; the target must
/// be an existing regular file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.is_file() {
        return Err(format!("Loan input file not found: {}", resolved.display()).into());
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn test_reads_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loan.json");
        fs::write(&path, r#"{"principal": 250000, "annual_interest_rate": "9.25", "tenure_years": 3}"#)
            .unwrap();

        let loan_input = read_loan_input(path.to_str().unwrap()).unwrap();
        assert_eq!(loan_input.principal, Some(dec!(250000)));
        assert_eq!(loan_input.annual_interest_rate, Some(dec!(9.25)));
        assert_eq!(loan_input.tenure_years, Some(3));
        assert_eq!(loan_input.tenure_months, Some(0));
    }

    #[test]
    fn test_missing_file() {
        let err = read_loan_input("/nonexistent/loan.json").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loan.json");
        fs::write(&path, "{principal: }").unwrap();
        let err = read_loan_input(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse loan input"));
    }
}
