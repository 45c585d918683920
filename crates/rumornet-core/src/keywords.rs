// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Keyword Tables
// ─────────────────────────────────────────────────────────────────────
//! Fixed weighted phrase tables used to score a statement.
//!
//! Matching is plain substring search on the lower-cased statement, so
//! `could` also fires inside `couldn't`. Each phrase counts at most once.

use rumornet_types::{SignalScores, StatementStats};

/// A read-only list of lowercase phrases sharing one per-match weight.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    pub name: &'static str,
    pub weight: f64,
    pub phrases: &'static [&'static str],
}

impl KeywordTable {
    /// Phrases contained in `lowered`, in table order.
    pub fn matches<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.phrases
            .iter()
            .copied()
            .filter(move |phrase| lowered.contains(phrase))
    }

    /// Weighted score of `lowered` against this table.
    pub fn score(&self, lowered: &str) -> f64 {
        self.matches(lowered).count() as f64 * self.weight
    }
}

pub const HIGH_RISK_PATTERNS: KeywordTable = KeywordTable {
    name: "high_risk_patterns",
    weight: 2.0,
    phrases: &[
        // Conspiracy theories
        "microchip",
        "tracking",
        "mind control",
        "population control",
        // Medical misinformation
        "bleach",
        "cure covid",
        "vaccines dangerous",
        "autism",
        // Technology fears
        "5g causes",
        "radiation",
        "towers cause",
        // Political misinformation
        "rigged",
        "stolen election",
        "deep state",
        // Science denial
        "climate hoax",
        "flat earth",
        "chemtrails",
    ],
};

pub const CREDIBLE_INDICATORS: KeywordTable = KeywordTable {
    name: "credible_indicators",
    weight: 1.0,
    phrases: &[
        // Official sources
        "according to",
        "official report",
        "study shows",
        "research finds",
        "published in",
        "peer reviewed",
        "scientific study",
        // Institutional references
        "cdc says",
        "who reports",
        "fda approved",
        "government data",
        // Qualified language
        "evidence suggests",
        "preliminary findings",
        "experts believe",
    ],
};

pub const UNCERTAINTY_PHRASES: KeywordTable = KeywordTable {
    name: "uncertainty_phrases",
    weight: 0.5,
    phrases: &[
        "might",
        "could",
        "possibly",
        "potentially",
        "some believe",
        "reportedly",
        "allegedly",
        "claims suggest",
    ],
};

/// Words whose presence marks a statement as citing a source.
pub const SOURCE_MARKERS: &[&str] = &["source:", "study", "report", "according"];

/// Score a statement against all three tables.
///
/// `lowered` must be the lower-cased statement.
pub fn score_signals(lowered: &str) -> SignalScores {
    let matched = [HIGH_RISK_PATTERNS, CREDIBLE_INDICATORS, UNCERTAINTY_PHRASES]
        .iter()
        .flat_map(|table| table.matches(lowered).collect::<Vec<_>>())
        .map(str::to_string)
        .collect();

    SignalScores {
        risk: HIGH_RISK_PATTERNS.score(lowered),
        credible: CREDIBLE_INDICATORS.score(lowered),
        uncertainty: UNCERTAINTY_PHRASES.score(lowered),
        matched,
    }
}

/// Derive surface statistics. `statement` is the text as submitted,
/// `lowered` its lower-cased form. Only ASCII decimal digits count as
/// data; `½` or `Ⅻ` do not.
pub fn statement_stats(statement: &str, lowered: &str) -> StatementStats {
    StatementStats {
        word_count: statement.split_whitespace().count(),
        has_numbers: statement.chars().any(|c| c.is_ascii_digit()),
        has_sources: SOURCE_MARKERS.iter().any(|m| lowered.contains(m)),
    }
}
