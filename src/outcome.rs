//! # Operation Outcomes
//!
//! Every API operation resolves to an [`Outcome`]: either a typed success
//! value or a display-ready failure message. Nothing else crosses the
//! boundary — no panic, no error enum, no status code. Callers are expected
//! to `match` both variants exhaustively.

use serde::Serialize;

/// Result of a single API operation.
///
/// The failure side deliberately carries only a human-readable message.
/// Transport faults, protocol violations and server-reported errors all
/// collapse into the same shape; the caller shows the message and moves on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "lowercase")]
pub enum Outcome<T> {
    /// The operation completed and produced a value.
    Success(T),
    /// The operation failed; the message is ready for display.
    Failure(String),
}

impl<T> Outcome<T> {
    /// True if this is a [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Map the success value, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Convert into a standard `Result`, with the failure message as `Err`.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(message) => Err(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_map_preserves_failure() {
        let failure: Outcome<i32> = Outcome::Failure("sin conexión".to_string());
        assert_eq!(
            failure.map(|n| n * 2),
            Outcome::Failure("sin conexión".to_string())
        );
    }

    #[test]
    fn test_map_transforms_success() {
        assert_eq!(Outcome::Success(21).map(|n| n * 2), Outcome::Success(42));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::Success(1).into_result(), Ok(1));
        let failure: Outcome<i32> = Outcome::Failure("x".to_string());
        assert_eq!(failure.into_result(), Err("x".to_string()));
    }
}
