// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! RumorNet statement classifier.

pub mod config;
pub mod error;
pub mod verdict;

pub use config::RumorConfig;
pub use error::{RumorError, RumorResult};
pub use verdict::{
    clamp_score, round_to, Branch, Classification, Label, SignalScores, StatementStats,
};
