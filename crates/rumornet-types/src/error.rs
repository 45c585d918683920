// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all RumorNet kernel failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RumorError {
    /// Statement is shorter than the minimum after trimming.
    ///
    /// The classifier turns this into an ERROR classification instead of
    /// returning it to the caller.
    #[error("statement too short: {got} characters after trimming, need at least {min_chars}")]
    InputTooShort { min_chars: usize, got: usize },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type RumorResult<T> = Result<T, RumorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_too_short_message() {
        let err = RumorError::InputTooShort { min_chars: 10, got: 2 };
        assert_eq!(
            err.to_string(),
            "statement too short: 2 characters after trimming, need at least 10"
        );
    }

    #[test]
    fn test_config_message() {
        let err = RumorError::Config("bad".into());
        assert_eq!(err.to_string(), "config error: bad");
    }
}
