//! Error handling foundation for factdeck.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each crate defines its own domain-specific error types in their own
//! error modules, using rootcause's `.context()` to add layer-appropriate
//! context as errors propagate up the stack.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
///
/// Each layer adds its own context via `.context()` as errors propagate.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Rejected;

    impl fmt::Display for Rejected {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "rejected")
        }
    }

    impl std::error::Error for Rejected {}

    fn reject() -> Result<u8, Rejected> {
        Err(Rejected.into())
    }

    #[test]
    fn typed_context_converts_with_question_mark() {
        let err = reject().unwrap_err();
        assert!(err.to_string().contains("rejected"));
    }
}
