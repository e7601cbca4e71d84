//! Category transition policy.
//!
//! Decides what a fact request turns into, given how many facts are left in
//! each pool. The policy only looks at emptiness; drawing is done by the
//! planner once the policy has chosen a pool.
//!
//! Category flow, first match wins:
//! 1. History and headquarters both empty: the conversation is exhausted.
//!    Cats do not keep it alive.
//! 2. Requested pool empty: redirect to the sibling, offering cats too when
//!    any are left.
//! 3. Otherwise draw from the requested pool.
//!
//! The cats flow is separate: draw a cat fact, or report that they ran out.

use crate::category::{Category, PrimaryCategory};
use crate::fact::FactPool;

/// The three pools of a session, read together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolSnapshot {
    /// Remaining history facts.
    pub history: FactPool,
    /// Remaining headquarters facts.
    pub headquarters: FactPool,
    /// Remaining cat facts.
    pub cats: FactPool,
}

impl PoolSnapshot {
    /// Returns the pool of a category.
    #[must_use]
    pub fn get(&self, category: Category) -> &FactPool {
        match category {
            Category::History => &self.history,
            Category::Headquarters => &self.headquarters,
            Category::Cats => &self.cats,
        }
    }

    /// Takes the pool of a category out of the snapshot.
    #[must_use]
    pub fn into_pool(self, category: Category) -> FactPool {
        match category {
            Category::History => self.history,
            Category::Headquarters => self.headquarters,
            Category::Cats => self.cats,
        }
    }

    /// Returns true once both primary pools are empty.
    #[must_use]
    pub fn primaries_exhausted(&self) -> bool {
        self.history.is_empty() && self.headquarters.is_empty()
    }
}

/// What to do with a category-flow request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryDecision {
    /// No primary facts left anywhere; end the conversation.
    Exhausted,
    /// The requested category is empty; steer to its sibling.
    Redirect {
        /// The category to steer to.
        to: PrimaryCategory,
        /// Whether cats should be offered as well.
        mention_cats: bool,
    },
    /// Draw a fact from the requested category.
    Draw(PrimaryCategory),
}

/// What to do with a cats-flow request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatsDecision {
    /// No cat facts left.
    Exhausted,
    /// Draw a cat fact.
    Draw,
}

/// Decides a category-flow request.
#[must_use]
pub fn decide_category(requested: PrimaryCategory, pools: &PoolSnapshot) -> CategoryDecision {
    if pools.primaries_exhausted() {
        return CategoryDecision::Exhausted;
    }

    if pools.get(requested.category()).is_empty() {
        return CategoryDecision::Redirect {
            to: requested.sibling(),
            mention_cats: !pools.cats.is_empty(),
        };
    }

    CategoryDecision::Draw(requested)
}

/// Decides a cats-flow request.
#[must_use]
pub fn decide_cats(pools: &PoolSnapshot) -> CatsDecision {
    if pools.cats.is_empty() {
        CatsDecision::Exhausted
    } else {
        CatsDecision::Draw
    }
}
