// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Statement Classifier
// ─────────────────────────────────────────────────────────────────────
//! Keyword-heuristic rumor classifier.
//!
//! A statement is lower-cased and scored against three weighted phrase
//! tables. The first rule that fires decides the label:
//!
//! 1. `risk >= risk_threshold` → FAKE
//! 2. `credible >= credible_threshold` → REAL
//! 3. `uncertainty >= uncertainty_threshold` → UNCERTAIN
//! 4. otherwise a coin flip between REAL and FAKE
//!
//! Branch selection depends only on the text. Randomness enters through
//! the `JitterSource` as confidence jitter and the fallback coin.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};

use rumornet_types::{
    clamp_score, Branch, Classification, Label, RumorConfig, RumorError, RumorResult,
    SignalScores,
};

use crate::explain::{explanation, technical_details, too_short_message, ExplanationKind};
use crate::jitter::{JitterSource, SeededJitter, ThreadJitter};
use crate::keywords::{score_signals, statement_stats};

/// Scoring rule that fired for an accepted statement.
///
/// Rejected input never reaches rule selection, so there is no rejected
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Risk,
    Credible,
    Uncertainty,
    Fallback,
}

impl Rule {
    pub fn branch(self) -> Branch {
        match self {
            Rule::Risk => Branch::Risk,
            Rule::Credible => Branch::Credible,
            Rule::Uncertainty => Branch::Uncertainty,
            Rule::Fallback => Branch::Fallback,
        }
    }
}

/// Heuristic statement classifier.
///
/// Holds no per-call state; safe to share behind an `Arc`.
pub struct StatementClassifier {
    config: RumorConfig,
    jitter: Arc<dyn JitterSource>,
}

impl Default for StatementClassifier {
    fn default() -> Self {
        Self::new(RumorConfig::default(), Arc::new(ThreadJitter))
    }
}

impl StatementClassifier {
    /// Build without validating `config`.
    pub fn new(config: RumorConfig, jitter: Arc<dyn JitterSource>) -> Self {
        Self { config, jitter }
    }

    /// Build after validating `config`.
    pub fn try_new(config: RumorConfig, jitter: Arc<dyn JitterSource>) -> RumorResult<Self> {
        config.validate()?;
        log::info!(
            "statement classifier configured: min_chars={}, thresholds=({}, {}, {})",
            config.min_statement_chars,
            config.risk_threshold,
            config.credible_threshold,
            config.uncertainty_threshold
        );
        Ok(Self::new(config, jitter))
    }

    /// Default config with a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RumorConfig::default(), Arc::new(SeededJitter::new(seed)))
    }

    /// Check the trimmed length against `min_statement_chars`.
    pub fn validate_statement(&self, statement: &str) -> RumorResult<()> {
        let got = statement.trim().chars().count();
        if got < self.config.min_statement_chars {
            return Err(RumorError::InputTooShort {
                min_chars: self.config.min_statement_chars,
                got,
            });
        }
        Ok(())
    }

    /// Decision rule for a set of scores. Never consults randomness.
    pub fn select_rule(&self, scores: &SignalScores) -> Rule {
        if scores.risk >= self.config.risk_threshold {
            Rule::Risk
        } else if scores.credible >= self.config.credible_threshold {
            Rule::Credible
        } else if scores.uncertainty >= self.config.uncertainty_threshold {
            Rule::Uncertainty
        } else {
            Rule::Fallback
        }
    }

    /// Classify a statement, stamping details with the local time.
    pub fn classify(&self, statement: &str) -> Classification {
        self.classify_at(statement, &Local::now())
    }

    /// Classify a statement, stamping details with `timestamp`.
    ///
    /// Total over all input: short input yields an ERROR classification
    /// instead of an error value.
    pub fn classify_at<Tz>(&self, statement: &str, timestamp: &DateTime<Tz>) -> Classification
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        if let Err(err) = self.validate_statement(statement) {
            log::debug!("statement rejected: {err}");
            return Classification::rejected(too_short_message(self.config.min_statement_chars));
        }

        let lowered = statement.to_lowercase();
        let scores = score_signals(&lowered);
        let stats = statement_stats(statement, &lowered);
        let rule = self.select_rule(&scores);

        let cfg = &self.config;
        let (label, confidence, kind) = match rule {
            Rule::Risk => (
                Label::Fake,
                cfg.confidence_cap.min(
                    cfg.fake_base
                        + cfg.score_slope * scores.risk
                        + self.jitter.uniform(cfg.signal_jitter),
                ),
                ExplanationKind::Fake {
                    risk_score: scores.risk,
                },
            ),
            Rule::Credible => (
                Label::Real,
                cfg.confidence_cap.min(
                    cfg.real_base
                        + cfg.score_slope * scores.credible
                        + self.jitter.uniform(cfg.signal_jitter),
                ),
                ExplanationKind::Real {
                    credible_score: scores.credible,
                },
            ),
            Rule::Uncertainty => (
                Label::Uncertain,
                cfg.uncertain_base + self.jitter.uniform(cfg.uncertain_jitter),
                ExplanationKind::Uncertain,
            ),
            Rule::Fallback => {
                let label = if self.jitter.coin_flip() {
                    Label::Real
                } else {
                    Label::Fake
                };
                (
                    label,
                    cfg.neutral_base + self.jitter.uniform(cfg.neutral_jitter),
                    ExplanationKind::Neutral,
                )
            }
        };
        let confidence = clamp_score(confidence, 0.0, 1.0);
        let branch = rule.branch();

        log::debug!(
            "classified {} via {} branch (risk={}, credible={}, uncertainty={}, confidence={confidence:.4})",
            label.as_str(),
            branch.as_str(),
            scores.risk,
            scores.credible,
            scores.uncertainty,
        );

        Classification {
            label,
            branch,
            confidence,
            explanation: explanation(kind),
            details: technical_details(&stats, timestamp, &cfg.model_name),
            scores: Some(scores),
            stats: Some(stats),
        }
    }

    /// Read-only access to config.
    pub fn config(&self) -> &RumorConfig {
        &self.config
    }
}
