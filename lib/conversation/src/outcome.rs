//! The result of planning one fact request.

use crate::category::PrimaryCategory;
use crate::fact::FactId;
use serde::{Deserialize, Serialize};

/// What the conversation should say next.
///
/// Carries every identifier the renderer needs, so it never has to look at
/// the session pools itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FactOutcome {
    /// A fact from the requested category was drawn.
    Delivered {
        fact_id: FactId,
        category: PrimaryCategory,
    },
    /// The requested category ran dry; suggest its sibling.
    RedirectToSibling {
        other_category: PrimaryCategory,
        /// Cat facts are left and should be offered too.
        mention_cats: bool,
    },
    /// Both primary categories are used up. The conversation ends.
    Exhausted,
    /// A cat fact was drawn.
    CatsDelivered { fact_id: FactId },
    /// No cat facts are left.
    CatsExhausted,
}

impl FactOutcome {
    /// Returns the fact told by this outcome, if any.
    #[must_use]
    pub fn fact_id(&self) -> Option<&FactId> {
        match self {
            Self::Delivered { fact_id, .. } | Self::CatsDelivered { fact_id } => Some(fact_id),
            _ => None,
        }
    }

    /// Returns true if the conversation cannot continue.
    #[must_use]
    pub fn ends_conversation(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
