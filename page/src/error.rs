//! Error types for page state transitions and content checks.

use thiserror::Error;

/// Errors raised by the FAQ accordion and by content validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    /// A toggle named an entry that does not exist.
    #[error("FAQ index {index} is out of range (list has {len} entries)")]
    FaqIndexOutOfRange {
        /// Requested entry
        index: usize,
        /// Number of entries in the accordion
        len: usize,
    },

    /// A static content slice that the page renders is empty.
    #[error("content section `{0}` is empty")]
    EmptySection(&'static str),

    /// An answer would be clipped by the collapse animation's height cap.
    #[error("FAQ answer {index} needs ~{estimated_rem:.1}rem but the cap is {cap_rem}rem")]
    AnswerExceedsCap {
        /// Offending entry
        index: usize,
        /// Estimated rendered height of the answer
        estimated_rem: f32,
        /// Height cap applied while the entry is open
        cap_rem: f32,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = PageError::FaqIndexOutOfRange { index: 7, len: 4 };
        assert_eq!(
            err.to_string(),
            "FAQ index 7 is out of range (list has 4 entries)"
        );
    }

    #[test]
    fn cap_message_shows_estimate_and_cap() {
        let err = PageError::AnswerExceedsCap {
            index: 2,
            estimated_rem: 30.4,
            cap_rem: 24.0,
        };
        assert_eq!(
            err.to_string(),
            "FAQ answer 2 needs ~30.4rem but the cap is 24rem"
        );
    }
}
