//! Error types for the quiz engine.
//!
//! Only configuration validation and the settings store can fail; every
//! conversion and grading function is total.

use thiserror::Error;

/// Why a [`Configuration`](crate::model::Configuration) was rejected.
///
/// Checks run in declaration order and the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or both range endpoints are not a single A–Z letter.
    #[error("invalid letter range: {start:?}..{end:?}")]
    InvalidRange { start: String, end: String },

    /// The range start comes after the range end.
    #[error("start letter {start} must not come after end letter {end}")]
    StartAfterEnd { start: char, end: char },

    /// Question count is below 1.
    #[error("invalid question count: {0} (must be at least 1)")]
    InvalidQuestionCount(u32),

    /// Question count is above the per-drill limit.
    #[error("too many questions: {count} (at most {max})")]
    TooManyQuestions { count: u32, max: u32 },
}

/// Failures of a [`KeyValueStore`](crate::settings::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinct() {
        let range = ConfigError::InvalidRange {
            start: "1".into(),
            end: "Z".into(),
        };
        let order = ConfigError::StartAfterEnd {
            start: 'Z',
            end: 'A',
        };
        let count = ConfigError::InvalidQuestionCount(0);
        let limit = ConfigError::TooManyQuestions {
            count: 5000,
            max: 1000,
        };
        assert!(range.to_string().contains("invalid letter range"));
        assert!(order.to_string().contains("must not come after"));
        assert!(count.to_string().contains("question count"));
        assert!(limit.to_string().contains("at most 1000"));
    }
}
