//! Error types for the dialog crate.
//!
//! - Decoding errors (`UnknownIntent`, `MissingParameter`, `InvalidParameter`)
//!   mean the dispatcher sent something this agent does not handle.
//! - `Planning` is a context wrapper for failures inside the conversation
//!   crate, which point at a damaged session blob.

use std::fmt;

/// Errors from dispatching and answering a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// No handler exists for the intent.
    UnknownIntent { name: String },
    /// A required intent parameter is absent.
    MissingParameter { intent: String, parameter: String },
    /// An intent parameter has an unusable value.
    InvalidParameter {
        intent: String,
        parameter: String,
        reason: String,
    },
    /// Planning the outcome failed (use as context wrapper).
    Planning { intent: String },
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIntent { name } => write!(f, "no handler for intent '{name}'"),
            Self::MissingParameter { intent, parameter } => {
                write!(f, "intent '{intent}' is missing parameter '{parameter}'")
            }
            Self::InvalidParameter {
                intent,
                parameter,
                reason,
            } => {
                write!(f, "invalid parameter '{parameter}' for intent '{intent}': {reason}")
            }
            Self::Planning { intent } => {
                write!(f, "failed to answer intent '{intent}'")
            }
        }
    }
}

impl std::error::Error for DialogError {}
