// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Explanation Templates
// ─────────────────────────────────────────────────────────────────────
//! Markdown text rendered under the prediction.

use chrono::{DateTime, TimeZone};

use rumornet_types::StatementStats;

/// Shown when the trimmed statement is below the minimum length.
pub fn too_short_message(min_chars: usize) -> String {
    format!("Please enter a statement with at least {min_chars} characters.")
}

/// Shown by the panel when the input box is empty.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a statement to analyze.";

/// Which explanation to render, with the score it quotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplanationKind {
    Fake { risk_score: f64 },
    Real { credible_score: f64 },
    Uncertain,
    Neutral,
}

/// Scores are whole numbers for the FAKE and REAL tables; print them
/// without a trailing `.0`.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    }
}

pub fn explanation(kind: ExplanationKind) -> String {
    match kind {
        ExplanationKind::Fake { risk_score } => format!(
            "
**🚨 HIGH RISK OF MISINFORMATION DETECTED**

**Red Flags Identified:**
• Contains language patterns commonly associated with misinformation
• Lacks credible source citations
• May promote unsubstantiated claims
• Risk indicators found: {}

**Recommendation:**
❌ **DO NOT SHARE** without verification from multiple credible sources
🔍 Cross-check with official health organizations, government agencies, or peer-reviewed research
📚 Look for scientific evidence and expert consensus

**Remember:** Misinformation can cause real harm. Always verify before sharing.
",
            format_score(risk_score)
        ),
        ExplanationKind::Real { credible_score } => format!(
            "
**✅ LIKELY CREDIBLE INFORMATION**

**Positive Indicators:**
• Uses language patterns associated with factual reporting
• May reference official sources or studies
• Shows measured, evidence-based language
• Credibility indicators: {}

**Good Practices Detected:**
✅ Appears to cite sources or use official language
✅ Uses measured, non-sensational tone
✅ Consistent with evidence-based reporting

**Note:** Even credible-seeming information should be verified with primary sources.
",
            format_score(credible_score)
        ),
        ExplanationKind::Uncertain => "
**⚠️ UNCERTAIN - REQUIRES VERIFICATION**

**Mixed Signals:**
• Contains both credible and uncertain language patterns
• May be opinion, speculation, or preliminary information
• Requires additional context for accurate assessment

**Next Steps:**
🔍 Verify with primary sources
📊 Look for supporting data and evidence  \n\
🏛️ Check official statements from relevant authorities
👥 Seek expert opinions and peer review

**Caution:** Treat as unverified until confirmed by reliable sources.
"
        .to_string(),
        ExplanationKind::Neutral => "
**Analysis Complete**

This statement doesn't contain strong indicators in either direction. Our AI model suggests:

**Verification Steps:**
1. 🔍 Check primary sources
2. 📊 Look for supporting evidence
3. 🏛️ Consult official authorities
4. 👥 Seek expert opinions

**Always Remember:**
• AI predictions are not 100% accurate
• Critical thinking is essential
• Multiple sources provide better verification
• When in doubt, consult experts
"
        .to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Technical summary block. The timestamp is display-only.
pub fn technical_details<Tz>(
    stats: &StatementStats,
    timestamp: &DateTime<Tz>,
    model_name: &str,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "
**📊 Technical Analysis:**
• **Length**: {} words
• **Contains Data**: {}
• **Source References**: {}
• **Analysis Time**: {}
• **Model**: {}

**Confidence Factors:**
• Linguistic pattern analysis
• Keyword risk assessment  \n\
• Source credibility indicators
• Structural content analysis
",
        stats.word_count,
        yes_no(stats.has_numbers),
        yes_no(stats.has_sources),
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        model_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_too_short_message_default() {
        assert_eq!(
            too_short_message(10),
            "Please enter a statement with at least 10 characters."
        );
    }

    #[test]
    fn test_fake_quotes_risk_score() {
        let text = explanation(ExplanationKind::Fake { risk_score: 4.0 });
        assert!(text.contains("HIGH RISK OF MISINFORMATION DETECTED"));
        assert!(text.contains("Risk indicators found: 4\n"));
    }

    #[test]
    fn test_real_quotes_credible_score() {
        let text = explanation(ExplanationKind::Real { credible_score: 3.0 });
        assert!(text.contains("LIKELY CREDIBLE INFORMATION"));
        assert!(text.contains("Credibility indicators: 3\n"));
    }

    #[test]
    fn test_fractional_score_kept() {
        assert_eq!(format_score(2.5), "2.5");
        assert_eq!(format_score(2.0), "2");
    }

    #[test]
    fn test_uncertain_and_neutral_are_distinct() {
        let u = explanation(ExplanationKind::Uncertain);
        let n = explanation(ExplanationKind::Neutral);
        assert!(u.contains("UNCERTAIN - REQUIRES VERIFICATION"));
        assert!(n.contains("Analysis Complete"));
        assert_ne!(u, n);
    }

    #[test]
    fn test_details_layout() {
        let stats = StatementStats {
            word_count: 12,
            has_numbers: true,
            has_sources: false,
        };
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 5, 7).unwrap();
        let text = technical_details(&stats, &ts, "BERT-base-uncased (Simulated)");
        assert!(text.contains("• **Length**: 12 words"));
        assert!(text.contains("• **Contains Data**: Yes"));
        assert!(text.contains("• **Source References**: No"));
        assert!(text.contains("• **Analysis Time**: 2026-03-01 09:05:07"));
        assert!(text.contains("• **Model**: BERT-base-uncased (Simulated)"));
    }

    #[test]
    fn test_markdown_hard_breaks_kept() {
        let u = explanation(ExplanationKind::Uncertain);
        assert!(u.contains("📊 Look for supporting data and evidence  \n🏛️ Check official"));
        let stats = StatementStats {
            word_count: 3,
            has_numbers: false,
            has_sources: false,
        };
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 5, 7).unwrap();
        let d = technical_details(&stats, &ts, "m");
        assert!(d.contains("• Keyword risk assessment  \n• Source credibility indicators"));
    }
}
