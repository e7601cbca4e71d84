//! Rendering fact outcomes into replies.
//!
//! The tables below are fixed at build time and only read afterwards.

use crate::reply::{Card, ContextChange, Image, LinkButton, Prompt, Reply, SimpleResponse};
use factdeck_conversation::{FactId, FactOutcome, PrimaryCategory};
use rand::Rng;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Context that routes the next bare "sure" to the suggested category.
pub const FACT_FOLLOWUP_CONTEXT: &str = "choose_fact-followup";
/// Context that routes the next bare "sure" to another cat fact.
pub const CATS_FOLLOWUP_CONTEXT: &str = "choose_cats-followup";

const CONFIRMATION_SUGGESTIONS: [&str; 2] = ["Sure", "No thanks"];
const CATEGORY_SUGGESTIONS: [&str; 2] = ["History", "Headquarters"];
const CATS_SUGGESTION: &str = "Cats";

const LINK_OUT_TITLE: &str = "card_link_out_text";
const COMPANY_LINK_OUT_URL: &str = "card_link_out_url";
const CAT_LINK_OUT_URL: &str = "cat_url";

struct ImageKeys {
    url: &'static str,
    accessibility: &'static str,
}

impl ImageKeys {
    fn to_image(&self) -> Image {
        Image {
            url_key: self.url.to_string(),
            accessibility_key: self.accessibility.to_string(),
        }
    }
}

static COMPANY_IMAGES: [ImageKeys; 4] = [
    ImageKeys {
        url: "google_app_logo_url",
        accessibility: "google_app_logo_a11y",
    },
    ImageKeys {
        url: "stan_url",
        accessibility: "stan_a11y",
    },
    ImageKeys {
        url: "googleplex_url",
        accessibility: "googleplex_a11y",
    },
    ImageKeys {
        url: "googleplex_biking_url",
        accessibility: "googleplex_biking_a11y",
    },
];

static CAT_IMAGE: ImageKeys = ImageKeys {
    url: "cat_img_url",
    accessibility: "cat_img_a11y",
};

/// Rendering settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Number of turns the follow-up context of a redirect stays active.
    #[serde(default = "default_followup_lifespan")]
    pub followup_lifespan: u32,
}

fn default_followup_lifespan() -> u32 {
    5
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            followup_lifespan: default_followup_lifespan(),
        }
    }
}

/// Builds replies from outcomes.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Creates a renderer.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renders an outcome. `rng` picks the illustration of company facts.
    pub fn render<R: Rng>(&self, outcome: &FactOutcome, rng: &mut R) -> Reply {
        match outcome {
            FactOutcome::Delivered { fact_id, category } => {
                let image = &COMPANY_IMAGES[rng.gen_range(0..COMPANY_IMAGES.len())];
                Reply::new()
                    .say(Prompt::new(category.to_string()).with_key(fact_id.as_str()))
                    .say(Prompt::new("nextFact"))
                    .with_card(fact_card(fact_id, image, COMPANY_LINK_OUT_URL))
                    .suggest(&CONFIRMATION_SUGGESTIONS)
            }
            FactOutcome::RedirectToSibling {
                other_category,
                mention_cats,
            } => self.redirect(*other_category, *mention_cats),
            FactOutcome::Exhausted => Reply::new().say(Prompt::new("heardItAll")).end_conversation(),
            FactOutcome::CatsDelivered { fact_id } => Reply::new()
                .say(SimpleResponse {
                    speech: Prompt::new("cat_ssml")
                        .with_key("cat_prefix")
                        .with_key(fact_id.as_str()),
                    display: Some(Prompt::new("cat_prefix")),
                })
                .say(Prompt::new("nextFact"))
                .with_card(fact_card(fact_id, &CAT_IMAGE, CAT_LINK_OUT_URL))
                .suggest(&CONFIRMATION_SUGGESTIONS),
            FactOutcome::CatsExhausted => Reply::new()
                .say(Prompt::new("factTransitionFromCats"))
                .suggest(&CATEGORY_SUGGESTIONS)
                .with_context(ContextChange::Remove {
                    name: FACT_FOLLOWUP_CONTEXT.to_string(),
                })
                .with_context(ContextChange::Remove {
                    name: CATS_FOLLOWUP_CONTEXT.to_string(),
                }),
        }
    }

    /// Renders the answer to an unrecognized deep link.
    #[must_use]
    pub fn deep_link_fallback(&self, query: &str) -> Reply {
        Reply::new()
            .say(Prompt::new("deep_link_fallback").with_literal(query))
            .suggest(&CATEGORY_SUGGESTIONS)
    }

    fn redirect(&self, other: PrimaryCategory, mention_cats: bool) -> Reply {
        let exhausted = other.sibling();
        let mut speech = Prompt::new("factTransition")
            .with_literal(exhausted.to_string())
            .with_literal(other.to_string());
        let mut suggestions = vec![suggestion_label(other)];
        if mention_cats {
            speech = Prompt::new("factTransitionToCats").with_prompt(speech);
            suggestions.push(CATS_SUGGESTION);
        }

        let parameters = BTreeMap::from([("category".to_string(), other.to_string())]);
        Reply::new()
            .say(speech)
            .suggest(suggestions.as_slice())
            .with_context(ContextChange::Set {
                name: FACT_FOLLOWUP_CONTEXT.to_string(),
                lifespan: self.config.followup_lifespan,
                parameters,
            })
    }
}

fn suggestion_label(category: PrimaryCategory) -> &'static str {
    match category {
        PrimaryCategory::History => "History",
        PrimaryCategory::Headquarters => "Headquarters",
    }
}

fn fact_card(fact_id: &FactId, image: &ImageKeys, link_out_url: &str) -> Card {
    Card {
        title: Prompt::new(fact_id.as_str()),
        image: image.to_image(),
        buttons: vec![LinkButton {
            title_key: LINK_OUT_TITLE.to_string(),
            url_key: link_out_url.to_string(),
        }],
    }
}
