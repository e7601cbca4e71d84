//! Core types and utilities shared across the factdeck crates.
//!
//! This crate provides the `Result` alias used for layered error reporting
//! and the strongly-typed identifiers attached to conversations and turns.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ConversationId, ParseIdError, TurnId};
