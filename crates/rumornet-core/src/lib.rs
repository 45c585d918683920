// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Keyword-heuristic rumor classifier for the RumorNet demo.
//!
//! No model is loaded. A statement is scored against three fixed
//! phrase tables (risk, credible, uncertainty) and labelled FAKE, REAL
//! or UNCERTAIN by the first threshold it crosses, with a jittered
//! confidence. Statements that cross none get a coin-flip label.
//!
//! # Invariants
//!
//! 1. **Total**: every string yields a classification with all fields
//!    set. Input shorter than the minimum becomes an ERROR result.
//!
//! 2. **Branch is a function of the text**: the jitter source only moves
//!    confidence and the fallback label, never which rule fires.
//!
//! 3. **Confidence stays in [0, 1]**: FAKE and REAL are capped at
//!    `confidence_cap`; the other branches are bounded by config
//!    validation and a final clamp.

pub mod classifier;
pub mod explain;
pub mod jitter;
pub mod keywords;
pub mod panel;

pub use classifier::{Rule, StatementClassifier};
pub use explain::{explanation, technical_details, ExplanationKind};
pub use jitter::{ExternalJitter, FixedJitter, JitterSource, SeededJitter, ThreadJitter};
pub use keywords::{
    KeywordTable, CREDIBLE_INDICATORS, HIGH_RISK_PATTERNS, SOURCE_MARKERS, UNCERTAINTY_PHRASES,
};
pub use panel::{AnalysisPanel, PanelOutputs, SAMPLE_STATEMENTS};
