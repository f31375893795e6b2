//! CLI configuration, read from YAML.
//!
//! Looked up in order: `--config <file>`, `./emi.yaml`, built-in defaults.
//! Every field is optional in the file.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use emi_core::amortization::LoanInput;
use emi_core::formatting::CurrencyFormat;

use crate::OutputFormat;

const DEFAULT_CONFIG_FILE: &str = "emi.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format used when `--output` is not given.
    pub output: Option<OutputFormat>,
    pub currency: CurrencyFormat,
    pub limits: InputLimits,
}

/// Upper bounds applied to raw input before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub max_principal: Decimal,
    /// Percent per year.
    pub max_annual_rate: Decimal,
    /// Years and months combined.
    pub max_tenure_months: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        InputLimits {
            max_principal: dec!(10_000_000),
            max_annual_rate: dec!(25),
            max_tenure_months: 1200,
        }
    }
}

impl InputLimits {
    /// Clamp principal, rate and tenure to their maxima, returning one
    /// warning per clamped field. Values below the limits, including negatives, are left
    /// for validation to judge.
    pub fn apply(&self, input: &mut LoanInput) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(principal) = input.principal {
            if principal > self.max_principal {
                warn!(%principal, max = %self.max_principal, "principal above limit, clamping");
                warnings.push(format!(
                    "Principal {} exceeds the maximum of {}; using the maximum",
                    principal, self.max_principal
                ));
                input.principal = Some(self.max_principal);
            }
        }

        if let Some(rate) = input.annual_interest_rate {
            if rate > self.max_annual_rate {
                warn!(%rate, max = %self.max_annual_rate, "interest rate above limit, clamping");
                warnings.push(format!(
                    "Interest rate {}% exceeds the maximum of {}%; using the maximum",
                    rate, self.max_annual_rate
                ));
                input.annual_interest_rate = Some(self.max_annual_rate);
            }
        }

        let years = input.tenure_years.unwrap_or(0);
        let months = input.tenure_months.unwrap_or(0);
        if years >= 0 && months >= 0 {
            let tenure = years.saturating_mul(12).saturating_add(months);
            let max = self.max_tenure_months;
            if tenure > i64::from(max) {
                warn!(tenure, max, "tenure above limit, clamping");
                warnings.push(format!(
                    "Tenure of {} months exceeds the maximum of {} months; using the maximum",
                    tenure, max
                ));
                input.tenure_years = Some(0);
                input.tenure_months = Some(i64::from(max));
            }
        }

        warnings
    }
}

/// Load configuration from an explicit path, the default file, or defaults.
pub fn load(path: Option<&str>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    match path {
        Some(p) => read_config(Path::new(p)),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                read_config(default_path)
            } else {
                debug!("no config file, using defaults");
                Ok(CliConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config '{}': {}", path.display(), e))?;
    let config: CliConfig = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse config '{}': {}", path.display(), e))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
