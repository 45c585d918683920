// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Classifier Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{RumorError, RumorResult};

/// Runtime configuration for the statement classifier.
///
/// Defaults reproduce the demo's fixed constants. Every field can be
/// overridden from JSON, but `validate()` rejects any combination that
/// could push a confidence outside [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RumorConfig {
    /// Minimum statement length (characters, after trimming).
    /// Default: 10.
    pub min_statement_chars: usize,

    /// Risk score at or above which the statement is labelled FAKE.
    /// Default: 2.0 (a single risk phrase).
    pub risk_threshold: f64,

    /// Credible score at or above which the statement is labelled REAL.
    /// Default: 2.0.
    pub credible_threshold: f64,

    /// Uncertainty score at or above which the statement is UNCERTAIN.
    /// Default: 1.0 (two uncertainty phrases).
    pub uncertainty_threshold: f64,

    /// Upper bound on FAKE and REAL confidence.
    /// Default: 0.95.
    pub confidence_cap: f64,

    /// Base confidence of the FAKE branch. Default: 0.7.
    pub fake_base: f64,

    /// Base confidence of the REAL branch. Default: 0.65.
    pub real_base: f64,

    /// Confidence added per point of signal score (FAKE and REAL).
    /// Default: 0.1.
    pub score_slope: f64,

    /// Jitter span for the FAKE and REAL branches. Default: 0.15.
    pub signal_jitter: f64,

    /// Base confidence of the UNCERTAIN branch. Default: 0.4.
    pub uncertain_base: f64,

    /// Jitter span of the UNCERTAIN branch. Default: 0.3.
    pub uncertain_jitter: f64,

    /// Base confidence of the fallback branch. Default: 0.5.
    pub neutral_base: f64,

    /// Jitter span of the fallback branch. Default: 0.4.
    pub neutral_jitter: f64,

    /// Decimal places shown to the user. Default: 3.
    pub display_decimals: u32,

    /// Model name printed in the technical details block.
    pub model_name: String,
}

impl Default for RumorConfig {
    fn default() -> Self {
        Self {
            min_statement_chars: 10,
            risk_threshold: 2.0,
            credible_threshold: 2.0,
            uncertainty_threshold: 1.0,
            confidence_cap: 0.95,
            fake_base: 0.7,
            real_base: 0.65,
            score_slope: 0.1,
            signal_jitter: 0.15,
            uncertain_base: 0.4,
            uncertain_jitter: 0.3,
            neutral_base: 0.5,
            neutral_jitter: 0.4,
            display_decimals: 3,
            model_name: "BERT-base-uncased (Simulated)".to_string(),
        }
    }
}

fn check_unit(name: &str, value: f64) -> RumorResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(RumorError::Config(format!(
            "{name} must be in [0, 1], got {value}"
        )));
    }
    Ok(())
}

fn check_positive(name: &str, value: f64) -> RumorResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(RumorError::Config(format!("{name} must be > 0, got {value}")));
    }
    Ok(())
}

impl RumorConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> RumorResult<()> {
        if self.min_statement_chars == 0 {
            return Err(RumorError::Config(
                "min_statement_chars must be >= 1".to_string(),
            ));
        }
        check_positive("risk_threshold", self.risk_threshold)?;
        check_positive("credible_threshold", self.credible_threshold)?;
        check_positive("uncertainty_threshold", self.uncertainty_threshold)?;

        check_unit("confidence_cap", self.confidence_cap)?;
        check_unit("fake_base", self.fake_base)?;
        check_unit("real_base", self.real_base)?;
        check_unit("uncertain_base", self.uncertain_base)?;
        check_unit("neutral_base", self.neutral_base)?;
        check_unit("score_slope", self.score_slope)?;
        check_unit("signal_jitter", self.signal_jitter)?;
        check_unit("uncertain_jitter", self.uncertain_jitter)?;
        check_unit("neutral_jitter", self.neutral_jitter)?;

        // The uncapped branches must stay inside [0, 1] on their own.
        if self.uncertain_base + self.uncertain_jitter > 1.0 {
            return Err(RumorError::Config(format!(
                "uncertain_base + uncertain_jitter must be <= 1, got {} + {} = {}",
                self.uncertain_base,
                self.uncertain_jitter,
                self.uncertain_base + self.uncertain_jitter
            )));
        }
        if self.neutral_base + self.neutral_jitter > 1.0 {
            return Err(RumorError::Config(format!(
                "neutral_base + neutral_jitter must be <= 1, got {} + {} = {}",
                self.neutral_base,
                self.neutral_jitter,
                self.neutral_base + self.neutral_jitter
            )));
        }
        if self.display_decimals > 10 {
            return Err(RumorError::Config(format!(
                "display_decimals must be <= 10, got {}",
                self.display_decimals
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their default.
    pub fn from_json(json: &str) -> RumorResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| RumorError::Config(format!("JSON parse error: {e}")))
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> RumorResult<String> {
        serde_json::to_string(self)
            .map_err(|e| RumorError::Config(format!("JSON encode error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RumorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_constants() {
        let cfg = RumorConfig::default();
        assert_eq!(cfg.min_statement_chars, 10);
        assert_eq!(cfg.confidence_cap, 0.95);
        assert_eq!(cfg.display_decimals, 3);
    }

    #[test]
    fn test_cap_out_of_range() {
        let cfg = RumorConfig {
            confidence_cap: 1.2,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(RumorError::Config(_))));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let cfg = RumorConfig {
            credible_threshold: 0.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let cfg = RumorConfig {
            risk_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_uncertain_span_overflow() {
        let cfg = RumorConfig {
            uncertain_base: 0.8,
            uncertain_jitter: 0.3,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("uncertain_base + uncertain_jitter"));
    }

    #[test]
    fn test_neutral_span_overflow() {
        let cfg = RumorConfig {
            neutral_jitter: 0.6,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_min_chars_rejected() {
        let cfg = RumorConfig {
            min_statement_chars: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = RumorConfig::from_json(r#"{"min_statement_chars": 20}"#).unwrap();
        assert_eq!(cfg.min_statement_chars, 20);
        assert_eq!(cfg.fake_base, 0.7);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RumorConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("JSON parse error"));
    }

    #[test]
    fn test_json_roundtrip_preserves_model_name() {
        let cfg = RumorConfig {
            model_name: "keyword heuristic".into(),
            ..Default::default()
        };
        let back = RumorConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }
}
