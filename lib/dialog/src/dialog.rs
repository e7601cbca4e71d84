//! One conversational turn from decoded intent to reply.

use crate::error::DialogError;
use crate::intent::Intent;
use crate::render::{RenderConfig, Renderer};
use crate::reply::Reply;
use factdeck_conversation::{ConversationData, FactCatalog, FactResponsePlanner};
use factdeck_core::Result;
use rand::Rng;
use rootcause::prelude::ResultExt;
use tracing::{debug, instrument};

/// Routes intents to the planner and renders the result.
#[derive(Debug, Clone)]
pub struct Dialog<'c> {
    planner: FactResponsePlanner<'c>,
    renderer: Renderer,
}

impl Dialog<'static> {
    /// Creates a dialog over the standard catalog.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self::with_catalog(FactCatalog::standard(), config)
    }
}

impl<'c> Dialog<'c> {
    /// Creates a dialog over a custom catalog.
    #[must_use]
    pub fn with_catalog(catalog: &'c FactCatalog, config: RenderConfig) -> Self {
        Self {
            planner: FactResponsePlanner::new(catalog),
            renderer: Renderer::new(config),
        }
    }

    /// Answers one turn, mutating the session's fact pools in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the session blob holds malformed fact pools.
    #[instrument(skip_all, fields(intent = intent.kind()))]
    pub fn handle<D, R>(&self, intent: &Intent, session: &mut D, rng: &mut R) -> Result<Reply, DialogError>
    where
        D: ConversationData + ?Sized,
        R: Rng,
    {
        let outcome = match intent {
            Intent::Fact { category } => self.planner.handle(session, *category, rng),
            Intent::CatFact => self.planner.handle_cats(session, rng),
            Intent::DeepLink { query } => {
                debug!(query = %query, "answering unrecognized deep link");
                return Ok(self.renderer.deep_link_fallback(query));
            }
        }
        .context(DialogError::Planning {
            intent: intent.kind().to_string(),
        })?;

        Ok(self.renderer.render(&outcome, rng))
    }
}
