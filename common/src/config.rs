use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EstateError, Result};
use crate::financing::{FinancingTerms, LoanTerm};

/// Tunables for a showcase session. Every field has a default, so a config
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Autoplay period of the rotating carousel.
    pub autoplay_interval_ms: u64,
    /// Viewports at least this wide show every card at once.
    pub wide_viewport_min_width: u32,
    /// Platform commission added on top of a user-submitted base price.
    pub commission_percent: u32,
    pub down_payment_ratio: f64,
    pub annual_rate_percent: f64,
    pub default_term: LoanTerm,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4000,
            wide_viewport_min_width: 1024,
            commission_percent: 15,
            down_payment_ratio: 0.30,
            annual_rate_percent: 8.0,
            default_term: LoanTerm::TenYears,
        }
    }
}

impl ShowcaseConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EstateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EstateError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(EstateError::Config("autoplay_interval_ms must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.down_payment_ratio) {
            return Err(EstateError::Config(format!(
                "down_payment_ratio {} outside 0..=1",
                self.down_payment_ratio
            )));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(EstateError::Config(format!(
                "annual_rate_percent {} must be a non-negative number",
                self.annual_rate_percent
            )));
        }
        Ok(())
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn financing_terms(&self) -> FinancingTerms {
        FinancingTerms {
            down_payment_ratio: self.down_payment_ratio,
            annual_rate_percent: self.annual_rate_percent,
        }
    }
}
