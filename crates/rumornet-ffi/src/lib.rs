// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied. PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the RumorNet classifier.
//!
//! Exposes `RumorConfig`, `Classification` and `RustStatementClassifier`
//! plus the panel helpers a Python UI needs to wire its widgets.
//!
//! # FFI Safety
//!
//! - GIL acquired via `Python::with_gil` before every Python callback.
//! - Python exceptions in a jitter callback fall back to a draw of 0.5.
//! - All config validated before storage (`RumorConfig::validate()`).
//!
//! Install: `pip install -e crates/rumornet-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from rumornet_kernel import RustStatementClassifier, clear_outputs
//!
//! clf = RustStatementClassifier(seed=42)
//! label, confidence, explanation, details = clf.analyze("Vaccines contain microchips ...")
//! ```

use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use rumornet_core::panel::{example_caption as caption_for, EXAMPLE_BUTTONS};
use rumornet_core::{
    AnalysisPanel, ExternalJitter, JitterSource, SeededJitter, StatementClassifier, ThreadJitter,
    SAMPLE_STATEMENTS,
};
use rumornet_types::{Classification, RumorConfig};

// ─── PyRumorConfig ──────────────────────────────────────────────────

/// Python-visible classifier configuration.
#[pyclass(name = "RumorConfig")]
#[derive(Clone)]
struct PyRumorConfig {
    inner: RumorConfig,
}

#[pymethods]
impl PyRumorConfig {
    #[new]
    #[pyo3(signature = (
        min_statement_chars = 10,
        risk_threshold = 2.0,
        credible_threshold = 2.0,
        uncertainty_threshold = 1.0,
        confidence_cap = 0.95,
        fake_base = 0.7,
        real_base = 0.65,
        score_slope = 0.1,
        signal_jitter = 0.15,
        uncertain_base = 0.4,
        uncertain_jitter = 0.3,
        neutral_base = 0.5,
        neutral_jitter = 0.4,
        display_decimals = 3,
        model_name = None,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        min_statement_chars: usize,
        risk_threshold: f64,
        credible_threshold: f64,
        uncertainty_threshold: f64,
        confidence_cap: f64,
        fake_base: f64,
        real_base: f64,
        score_slope: f64,
        signal_jitter: f64,
        uncertain_base: f64,
        uncertain_jitter: f64,
        neutral_base: f64,
        neutral_jitter: f64,
        display_decimals: u32,
        model_name: Option<String>,
    ) -> PyResult<Self> {
        let config = RumorConfig {
            min_statement_chars,
            risk_threshold,
            credible_threshold,
            uncertainty_threshold,
            confidence_cap,
            fake_base,
            real_base,
            score_slope,
            signal_jitter,
            uncertain_base,
            uncertain_jitter,
            neutral_base,
            neutral_jitter,
            display_decimals,
            model_name: model_name.unwrap_or_else(|| RumorConfig::default().model_name),
        };
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string. Missing keys take their default.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config =
            RumorConfig::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner: config })
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner
            .to_json()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn min_statement_chars(&self) -> usize {
        self.inner.min_statement_chars
    }

    #[getter]
    fn confidence_cap(&self) -> f64 {
        self.inner.confidence_cap
    }

    #[getter]
    fn display_decimals(&self) -> u32 {
        self.inner.display_decimals
    }

    #[getter]
    fn model_name(&self) -> &str {
        &self.inner.model_name
    }

    fn __repr__(&self) -> String {
        format!(
            "RumorConfig(min_chars={}, thresholds=({}, {}, {}), cap={})",
            self.inner.min_statement_chars,
            self.inner.risk_threshold,
            self.inner.credible_threshold,
            self.inner.uncertainty_threshold,
            self.inner.confidence_cap
        )
    }
}

// ─── PyClassification ───────────────────────────────────────────────

/// Python-visible classification result.
#[pyclass(name = "Classification")]
#[derive(Clone)]
struct PyClassification {
    inner: Classification,
}

#[pymethods]
impl PyClassification {
    /// Display string, e.g. "🚨 FAKE".
    #[getter]
    fn label(&self) -> &'static str {
        self.inner.label.display()
    }

    /// Bare label name: FAKE, REAL, UNCERTAIN or ERROR.
    #[getter]
    fn label_name(&self) -> &'static str {
        self.inner.label.as_str()
    }

    #[getter]
    fn branch(&self) -> &'static str {
        self.inner.branch.as_str()
    }

    #[getter]
    fn confidence(&self) -> f64 {
        self.inner.confidence
    }

    #[getter]
    fn explanation(&self) -> &str {
        &self.inner.explanation
    }

    #[getter]
    fn details(&self) -> &str {
        &self.inner.details
    }

    /// Matched phrases in table order (empty when rejected).
    #[getter]
    fn matched(&self) -> Vec<String> {
        self.inner
            .scores
            .as_ref()
            .map(|s| s.matched.clone())
            .unwrap_or_default()
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("label", self.inner.label.as_str())?;
        dict.set_item("branch", self.inner.branch.as_str())?;
        dict.set_item("confidence", self.inner.confidence)?;
        dict.set_item("explanation", &self.inner.explanation)?;
        dict.set_item("details", &self.inner.details)?;
        if let Some(scores) = &self.inner.scores {
            dict.set_item("risk_score", scores.risk)?;
            dict.set_item("credible_score", scores.credible)?;
            dict.set_item("uncertainty_score", scores.uncertainty)?;
            dict.set_item("matched", scores.matched.clone())?;
        }
        if let Some(stats) = &self.inner.stats {
            dict.set_item("word_count", stats.word_count)?;
            dict.set_item("has_numbers", stats.has_numbers)?;
            dict.set_item("has_sources", stats.has_sources)?;
        }
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "Classification(label={}, branch={}, confidence={:.4})",
            self.inner.label.as_str(),
            self.inner.branch.as_str(),
            self.inner.confidence
        )
    }
}

// ─── RustStatementClassifier ────────────────────────────────────────

/// Keyword-heuristic statement classifier exposed to Python.
#[pyclass(name = "RustStatementClassifier")]
struct PyStatementClassifier {
    classifier: Arc<StatementClassifier>,
    panel: AnalysisPanel,
}

#[pymethods]
impl PyStatementClassifier {
    /// Create a new classifier.
    ///
    /// Args:
    ///     config: Optional RumorConfig (uses defaults if None).
    ///     seed: Optional u64 seed for reproducible jitter.
    ///     jitter_callback: Optional Callable[[], float] returning a
    ///                      uniform draw in [0, 1]. Takes precedence
    ///                      over `seed`.
    #[new]
    #[pyo3(signature = (config = None, seed = None, jitter_callback = None))]
    fn new(
        config: Option<PyRumorConfig>,
        seed: Option<u64>,
        jitter_callback: Option<PyObject>,
    ) -> PyResult<Self> {
        let cfg = config.map(|c| c.inner).unwrap_or_default();

        let jitter: Arc<dyn JitterSource> = match (jitter_callback, seed) {
            (Some(cb), _) => Arc::new(ExternalJitter::new(move || {
                Python::with_gil(|py| match cb.call0(py) {
                    Ok(result) => result.extract::<f64>(py).unwrap_or(0.5),
                    Err(_) => 0.5,
                })
            })),
            (None, Some(seed)) => Arc::new(SeededJitter::new(seed)),
            (None, None) => Arc::new(ThreadJitter),
        };

        let classifier = Arc::new(
            StatementClassifier::try_new(cfg, jitter)
                .map_err(|e| PyValueError::new_err(e.to_string()))?,
        );
        Ok(Self {
            panel: AnalysisPanel::new(Arc::clone(&classifier)),
            classifier,
        })
    }

    /// Full classification with scores and statistics.
    fn classify(&self, statement: &str) -> PyClassification {
        PyClassification {
            inner: self.classifier.classify(statement),
        }
    }

    /// UI callback: returns (prediction, confidence, explanation, details)
    /// with the confidence rounded for display.
    fn analyze(&self, text: &str) -> (String, f64, String, String) {
        self.panel.analyze(text).into_tuple()
    }

    #[getter]
    fn config(&self) -> PyRumorConfig {
        PyRumorConfig {
            inner: self.classifier.config().clone(),
        }
    }
}

// ─── Panel helpers ──────────────────────────────────────────────────

/// All fixed sample statements.
#[pyfunction]
fn sample_statements() -> Vec<&'static str> {
    SAMPLE_STATEMENTS.to_vec()
}

/// Sample statements that get an example button.
#[pyfunction]
fn example_statements() -> Vec<&'static str> {
    SAMPLE_STATEMENTS[..EXAMPLE_BUTTONS].to_vec()
}

/// Caption for example button `index`, or None past the last button.
#[pyfunction]
fn example_caption(index: usize) -> Option<String> {
    caption_for(index)
}

/// Values for the clear button: (input, prediction, explanation,
/// details, confidence).
#[pyfunction]
fn clear_outputs() -> (&'static str, &'static str, &'static str, &'static str, f64) {
    ("", "", "", "", 0.0)
}

// ─── Module Registration ────────────────────────────────────────────

/// RumorNet Kernel: keyword-heuristic rumor classifier.
///
/// - `RumorConfig`: configuration
/// - `Classification`: classification result
/// - `RustStatementClassifier`: classifier + UI callback
/// - `sample_statements`, `example_statements`, `example_caption`,
///   `clear_outputs`: panel helpers
#[pymodule]
fn rumornet_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRumorConfig>()?;
    m.add_class::<PyClassification>()?;
    m.add_class::<PyStatementClassifier>()?;
    m.add_function(wrap_pyfunction!(sample_statements, m)?)?;
    m.add_function(wrap_pyfunction!(example_statements, m)?)?;
    m.add_function(wrap_pyfunction!(example_caption, m)?)?;
    m.add_function(wrap_pyfunction!(clear_outputs, m)?)?;
    Ok(())
}
