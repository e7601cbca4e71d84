//! Session fact-pool state machine for factdeck.
//!
//! This crate provides:
//!
//! - **Fact Catalog**: The facts every session starts with, per category
//! - **Session Fact Store**: Typed access to the pools kept in the session blob
//! - **Selector**: Uniform draws without replacement
//! - **Transition Policy**: Deliver, redirect to the sibling category, or stop
//! - **Planner**: One [`FactOutcome`] per fact request
//!
//! Rendering the outcome for a particular platform is left to the caller.

pub mod catalog;
pub mod category;
pub mod error;
pub mod fact;
pub mod outcome;
pub mod planner;
pub mod policy;
pub mod selector;
pub mod session;

pub use catalog::FactCatalog;
pub use category::{Category, PrimaryCategory, UnknownCategoryError};
pub use error::{CatalogError, PlanError, SelectError, StoreError};
pub use fact::{FactId, FactPool};
pub use outcome::FactOutcome;
pub use planner::FactResponsePlanner;
pub use policy::{CategoryDecision, CatsDecision, PoolSnapshot};
pub use session::{ConversationData, SessionFactStore};
