//! Error types for the conversation crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `CatalogError`: Invalid catalog definitions
//! - `StoreError`: Reading or writing fact pools in the session blob
//! - `SelectError`: Drawing from a pool
//! - `PlanError`: High-level wrapper naming the flow that failed
//!
//! None of these reach the user. Running out of facts is an ordinary
//! `FactOutcome`, not an error.

use crate::category::Category;
use std::fmt;

/// Errors from building a fact catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A category was given no facts.
    EmptyCategory { category: Category },
    /// The same fact id appears twice within one category.
    DuplicateFact { category: Category, fact_id: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory { category } => {
                write!(f, "catalog category '{category}' has no facts")
            }
            Self::DuplicateFact { category, fact_id } => {
                write!(f, "fact '{fact_id}' listed twice in category '{category}'")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Errors from session fact store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The pool was read before the session was initialized.
    Uninitialized { category: Category },
    /// The stored value is not a list of fact ids.
    Malformed { category: Category, reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized { category } => {
                write!(f, "fact pool '{category}' read before session initialization")
            }
            Self::Malformed { category, reason } => {
                write!(f, "fact pool '{category}' is malformed: {reason}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Errors from drawing a fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The pool has no facts left to draw.
    PoolExhausted,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolExhausted => write!(f, "cannot draw from an exhausted fact pool"),
        }
    }
}

impl std::error::Error for SelectError {}

/// High-level planning errors.
///
/// Use these to add context when wrapping lower-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Failure while serving the category flow (use as context wrapper).
    CategoryFlow { category: Category },
    /// Failure while serving the cats flow (use as context wrapper).
    CatsFlow,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryFlow { category } => {
                write!(f, "failed to plan a '{category}' fact")
            }
            Self::CatsFlow => write!(f, "failed to plan a cat fact"),
        }
    }
}

impl std::error::Error for PlanError {}
