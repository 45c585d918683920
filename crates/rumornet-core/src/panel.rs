// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Analysis Panel
// ─────────────────────────────────────────────────────────────────────
//! What the UI does with the classifier, minus the widgets.
//!
//! The panel owns the four output fields (prediction, confidence,
//! explanation, details), the analyze and clear actions, and the fixed
//! sample statements offered as example buttons.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use rumornet_types::{Classification, Label};

use crate::classifier::StatementClassifier;
use crate::explain::EMPTY_INPUT_MESSAGE;

/// Sample statements that pre-fill the input box.
pub const SAMPLE_STATEMENTS: [&str; 6] = [
    "Vaccines contain microchips designed to track people's movements and thoughts.",
    "According to the latest CDC report, vaccination rates have increased by 15% this quarter.",
    "5G cell towers are causing coronavirus symptoms in nearby populations.",
    "A peer-reviewed study published in Nature shows promising results for the new treatment.",
    "The government is hiding the truth about climate change to control the population.",
    "Official unemployment statistics show a 0.3% decrease according to the Bureau of Labor Statistics.",
];

/// How many samples get an example button.
pub const EXAMPLE_BUTTONS: usize = 3;

const CAPTION_CHARS: usize = 50;

/// Caption of example button `index` (zero-based), or `None` past the
/// last button.
pub fn example_caption(index: usize) -> Option<String> {
    if index >= EXAMPLE_BUTTONS {
        return None;
    }
    let text = SAMPLE_STATEMENTS[index];
    let head: String = text.chars().take(CAPTION_CHARS).collect();
    Some(format!("Example {}: {head}...", index + 1))
}

/// Text placed in the input box when example button `index` is pressed.
pub fn select_example(index: usize) -> Option<&'static str> {
    (index < EXAMPLE_BUTTONS).then(|| SAMPLE_STATEMENTS[index])
}

/// The four values rendered under the input box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelOutputs {
    /// Short status string, e.g. `🚨 FAKE`.
    pub prediction: String,
    /// Confidence rounded for display.
    pub confidence: f64,
    pub explanation: String,
    pub details: String,
}

impl PanelOutputs {
    fn error(message: &str) -> Self {
        Self {
            prediction: Label::Error.display().to_string(),
            confidence: 0.0,
            explanation: message.to_string(),
            details: String::new(),
        }
    }

    fn from_classification(c: &Classification, decimals: u32) -> Self {
        Self {
            prediction: c.label.display().to_string(),
            confidence: c.rounded_confidence(decimals),
            explanation: c.explanation.clone(),
            details: c.details.clone(),
        }
    }

    /// Outputs as the `(prediction, confidence, explanation, details)`
    /// tuple UI callbacks return.
    pub fn into_tuple(self) -> (String, f64, String, String) {
        (self.prediction, self.confidence, self.explanation, self.details)
    }
}

/// Input box plus outputs for one page.
pub struct AnalysisPanel {
    classifier: Arc<StatementClassifier>,
    input: String,
    outputs: PanelOutputs,
}

impl AnalysisPanel {
    pub fn new(classifier: Arc<StatementClassifier>) -> Self {
        Self {
            classifier,
            input: String::new(),
            outputs: PanelOutputs::default(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn outputs(&self) -> &PanelOutputs {
        &self.outputs
    }

    /// Analyze `text` exactly as submitted.
    ///
    /// Empty text short-circuits without calling the classifier.
    pub fn analyze(&self, text: &str) -> PanelOutputs {
        if text.is_empty() {
            return PanelOutputs::error(EMPTY_INPUT_MESSAGE);
        }
        let classification = self.classifier.classify(text);
        PanelOutputs::from_classification(
            &classification,
            self.classifier.config().display_decimals,
        )
    }

    /// Analyze the current input and store the outputs.
    pub fn submit(&mut self) -> &PanelOutputs {
        self.outputs = self.analyze(&self.input);
        &self.outputs
    }

    /// Pre-fill the input from example button `index`.
    pub fn pick_example(&mut self, index: usize) -> Option<&str> {
        let text = select_example(index)?;
        self.input = text.to_string();
        Some(&self.input)
    }

    /// Reset input and outputs. Never calls the classifier.
    pub fn clear(&mut self) {
        self.input.clear();
        self.outputs = PanelOutputs::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::{FixedJitter, JitterSource};
    use rumornet_types::RumorConfig;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often the classifier asked for randomness.
    struct CountingJitter {
        calls: AtomicUsize,
    }

    impl JitterSource for CountingJitter {
        fn uniform(&self, span: f64) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            span / 3.0
        }

        fn coin_flip(&self) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    fn panel_with(jitter: Arc<dyn JitterSource>) -> AnalysisPanel {
        AnalysisPanel::new(Arc::new(StatementClassifier::new(
            RumorConfig::default(),
            jitter,
        )))
    }

    #[test]
    fn test_empty_input_message() {
        let out = panel_with(Arc::new(FixedJitter::zero())).analyze("");
        assert_eq!(out.prediction, "❌ Error");
        assert_eq!(out.confidence, 0.0);
        assert_eq!(out.explanation, "Please enter a statement to analyze.");
        assert!(out.details.is_empty());
    }

    #[test]
    fn test_short_input_uses_classifier_message() {
        let out = panel_with(Arc::new(FixedJitter::zero())).analyze("   hi   ");
        assert_eq!(out.prediction, "❌ Error");
        assert_eq!(
            out.explanation,
            "Please enter a statement with at least 10 characters."
        );
    }

    #[test]
    fn test_confidence_rounded_to_three_decimals() {
        let jitter = Arc::new(CountingJitter {
            calls: AtomicUsize::new(0),
        });
        let out = panel_with(jitter).analyze("It might possibly rain over the hills tomorrow.");
        // 0.4 + 0.3 / 3
        assert_eq!(out.prediction, "⚠️ UNCERTAIN");
        assert_eq!(out.confidence, 0.5);

        let jitter = Arc::new(CountingJitter {
            calls: AtomicUsize::new(0),
        });
        let out = panel_with(jitter).analyze("The weather today is sunny and warm.");
        // 0.5 + 0.4 / 3 = 0.6333...
        assert_eq!(out.prediction, "✅ REAL");
        assert_eq!(out.confidence, 0.633);
    }

    #[test]
    fn test_submit_stores_outputs() {
        let mut panel = panel_with(Arc::new(FixedJitter::zero()));
        panel.set_input(SAMPLE_STATEMENTS[0]);
        let out = panel.submit().clone();
        assert_eq!(out.prediction, "🚨 FAKE");
        assert_eq!(out.confidence, 0.9);
        assert_eq!(panel.outputs(), &out);
    }

    #[test]
    fn test_clear_skips_classifier() {
        let jitter = Arc::new(CountingJitter {
            calls: AtomicUsize::new(0),
        });
        let mut panel = panel_with(jitter.clone());
        panel.set_input("The weather today is sunny and warm.");
        panel.submit();
        let before = jitter.calls.load(Ordering::SeqCst);
        assert!(before > 0);

        panel.clear();
        assert_eq!(jitter.calls.load(Ordering::SeqCst), before);
        assert_eq!(panel.input(), "");
        assert_eq!(panel.outputs(), &PanelOutputs::default());
    }

    #[test]
    fn test_example_captions() {
        assert_eq!(
            example_caption(0).unwrap(),
            "Example 1: Vaccines contain microchips designed to track peop..."
        );
        assert!(example_caption(2).unwrap().starts_with("Example 3: 5G cell towers"));
        assert!(example_caption(EXAMPLE_BUTTONS).is_none());
    }

    #[test]
    fn test_pick_example_fills_input() {
        let mut panel = panel_with(Arc::new(FixedJitter::zero()));
        assert_eq!(panel.pick_example(1), Some(SAMPLE_STATEMENTS[1]));
        assert_eq!(panel.input(), SAMPLE_STATEMENTS[1]);
        assert!(panel.pick_example(5).is_none());
        assert_eq!(panel.input(), SAMPLE_STATEMENTS[1]);
    }

    #[test]
    fn test_into_tuple_order() {
        let out = PanelOutputs {
            prediction: "p".into(),
            confidence: 0.5,
            explanation: "e".into(),
            details: "d".into(),
        };
        assert_eq!(
            out.into_tuple(),
            ("p".to_string(), 0.5, "e".to_string(), "d".to_string())
        );
    }

    #[test]
    fn test_samples_all_classify() {
        let panel = panel_with(Arc::new(FixedJitter::zero()));
        for text in SAMPLE_STATEMENTS {
            let out = panel.analyze(text);
            assert_ne!(out.prediction, "❌ Error");
            assert!(!out.details.is_empty());
        }
    }
}
