// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Verdict Types
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to nearest bound.
#[inline]
pub fn clamp_score(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_score: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_score: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

/// Round half away from zero to `decimals` places.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Fake,
    Real,
    Uncertain,
    Error,
}

impl Label {
    /// Short status string rendered by the UI.
    pub fn display(&self) -> &'static str {
        match self {
            Label::Fake => "🚨 FAKE",
            Label::Real => "✅ REAL",
            Label::Uncertain => "⚠️ UNCERTAIN",
            Label::Error => "❌ Error",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fake => "FAKE",
            Label::Real => "REAL",
            Label::Uncertain => "UNCERTAIN",
            Label::Error => "ERROR",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Decision rule that produced a classification.
///
/// Equal to the label family except for `Fallback`, whose label is a
/// coin flip between REAL and FAKE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// Input failed length validation.
    Rejected,
    Risk,
    Credible,
    Uncertainty,
    /// No rule fired.
    Fallback,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Rejected => "rejected",
            Branch::Risk => "risk",
            Branch::Credible => "credible",
            Branch::Uncertainty => "uncertainty",
            Branch::Fallback => "fallback",
        }
    }
}

/// Weighted keyword scores for one statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalScores {
    /// Sum of risk-phrase weights.
    pub risk: f64,
    /// Sum of credible-phrase weights.
    pub credible: f64,
    /// Sum of uncertainty-phrase weights.
    pub uncertainty: f64,
    /// Phrases that matched, in table order.
    pub matched: Vec<String>,
}

/// Surface statistics of a statement, shown in the details block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementStats {
    /// Whitespace-delimited token count.
    pub word_count: usize,
    /// Any ASCII decimal digit present.
    pub has_numbers: bool,
    /// Any source marker present.
    pub has_sources: bool,
}

/// Full outcome of classifying one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    pub branch: Branch,
    /// Confidence in [0, 1], unrounded.
    pub confidence: f64,
    /// Markdown explanation selected by branch.
    pub explanation: String,
    /// Markdown technical summary; empty for rejected input.
    pub details: String,
    /// Scores that drove the decision (None when rejected).
    pub scores: Option<SignalScores>,
    /// Statement statistics (None when rejected).
    pub stats: Option<StatementStats>,
}

impl Classification {
    /// Result for input that never reached scoring.
    pub fn rejected(explanation: impl Into<String>) -> Self {
        Self {
            label: Label::Error,
            branch: Branch::Rejected,
            confidence: 0.0,
            explanation: explanation.into(),
            details: String::new(),
            scores: None,
            stats: None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.branch == Branch::Rejected
    }

    /// Confidence rounded for display.
    pub fn rounded_confidence(&self, decimals: u32) -> f64 {
        round_to(self.confidence, decimals)
    }
}
