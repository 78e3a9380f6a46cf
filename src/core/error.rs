//! Recoverable errors reported back to the caller.
//!
//! Only user-correctable input is an error value. Caller bugs (a turn
//! submitted outside play, a wrong number of names, a player count outside
//! 1-20) are assertion failures instead.

use thiserror::Error;

/// Validation failure while confirming the setup screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No talk category was selected.
    #[error("empty category selection")]
    EmptyCategorySelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(
            SetupError::EmptyCategorySelection.to_string(),
            "empty category selection"
        );
    }
}
