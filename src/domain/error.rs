// Domain errors raised by the scale service
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    /// Date text did not match `YYYY-MM-DD`.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Min. greater than max. (min {min}, max {max})")]
    MinGreaterThanMax { min: i32, max: i32 },

    /// `max - min` does not fit the reading type.
    #[error("reading range {min}..{max} is too wide")]
    ReadingOutOfRange { min: i32, max: i32 },
}

impl ScaleError {
    /// Every variant is a rejection of caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ScaleError::InvalidDate { .. }
                | ScaleError::MinGreaterThanMax { .. }
                | ScaleError::ReadingOutOfRange { .. }
        )
    }
}
