//! Turns one fact request into a [`FactOutcome`].
//!
//! The planner is the only component that combines the store, the policy and
//! the selector. Each call seeds the session on first use, reads the pools,
//! applies the policy, and writes back the pool it drew from.

use crate::catalog::FactCatalog;
use crate::category::Category;
use crate::error::PlanError;
use crate::outcome::FactOutcome;
use crate::policy::{self, CategoryDecision, CatsDecision};
use crate::selector;
use crate::session::{ConversationData, SessionFactStore};
use factdeck_core::Result;
use rand::Rng;
use rootcause::prelude::ResultExt;
use tracing::{debug, instrument};

/// Plans fact outcomes against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct FactResponsePlanner<'c> {
    catalog: &'c FactCatalog,
}

impl Default for FactResponsePlanner<'static> {
    fn default() -> Self {
        Self::new(FactCatalog::standard())
    }
}

impl<'c> FactResponsePlanner<'c> {
    /// Creates a planner over the given catalog.
    #[must_use]
    pub fn new(catalog: &'c FactCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog sessions are seeded from.
    #[must_use]
    pub fn catalog(&self) -> &'c FactCatalog {
        self.catalog
    }

    /// Handles a request for a fact from `requested`.
    ///
    /// A request for `Cats` is served by the cats flow, since the category
    /// flow only steers between the primary pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the session blob holds malformed pools.
    #[instrument(skip_all, fields(category = %requested))]
    pub fn handle<D, R>(
        &self,
        session: &mut D,
        requested: Category,
        rng: &mut R,
    ) -> Result<FactOutcome, PlanError>
    where
        D: ConversationData + ?Sized,
        R: Rng,
    {
        let Some(primary) = requested.primary() else {
            return self.handle_cats(session, rng);
        };
        let flow = PlanError::CategoryFlow {
            category: requested,
        };

        let mut store = self.open(session);
        let pools = store.snapshot().context(flow.clone())?;

        let outcome = match policy::decide_category(primary, &pools) {
            CategoryDecision::Exhausted => FactOutcome::Exhausted,
            CategoryDecision::Redirect { to, mention_cats } => FactOutcome::RedirectToSibling {
                other_category: to,
                mention_cats,
            },
            CategoryDecision::Draw(category) => {
                let pool = pools.into_pool(category.into());
                let (fact_id, remaining) = selector::draw(pool, rng).context(flow)?;
                store.set_pool(category.into(), &remaining);
                debug!(remaining = remaining.len(), "fact pool shrunk");
                FactOutcome::Delivered { fact_id, category }
            }
        };

        debug!(?outcome, "planned category fact");
        Ok(outcome)
    }

    /// Handles a request for a cat fact.
    ///
    /// # Errors
    ///
    /// Returns an error if the session blob holds malformed pools.
    #[instrument(skip_all)]
    pub fn handle_cats<D, R>(&self, session: &mut D, rng: &mut R) -> Result<FactOutcome, PlanError>
    where
        D: ConversationData + ?Sized,
        R: Rng,
    {
        let mut store = self.open(session);
        let pools = store.snapshot().context(PlanError::CatsFlow)?;

        let outcome = match policy::decide_cats(&pools) {
            CatsDecision::Exhausted => FactOutcome::CatsExhausted,
            CatsDecision::Draw => {
                let pool = pools.into_pool(Category::Cats);
                let (fact_id, remaining) =
                    selector::draw(pool, rng).context(PlanError::CatsFlow)?;
                store.set_pool(Category::Cats, &remaining);
                FactOutcome::CatsDelivered { fact_id }
            }
        };

        debug!(?outcome, "planned cat fact");
        Ok(outcome)
    }

    fn open<'s, D>(&self, session: &'s mut D) -> SessionFactStore<'s, D>
    where
        D: ConversationData + ?Sized,
        'c: 's,
    {
        let mut store = SessionFactStore::new(session, self.catalog);
        if store.ensure_initialized() {
            debug!("seeded fact pools for a new session");
        }
        store
    }
}
