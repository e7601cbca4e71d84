//! Decoding dispatcher intents.
//!
//! The hosting platform resolves the user's words to an intent name and a
//! parameter map. This module maps those onto the flows the agent serves.

use crate::error::DialogError;
use factdeck_conversation::Category;
use serde_json::{Map, Value as JsonValue};

/// User picked a fact category.
pub const CHOOSE_FACT: &str = "choose_fact";
/// User asked for another fact.
pub const TELL_FACT: &str = "tell_fact";
/// User picked cats.
pub const CHOOSE_CATS: &str = "choose_cats";
/// User asked for another cat fact.
pub const TELL_CAT_FACT: &str = "tell_cat_fact";
/// The agent was invoked with a phrase it has no handler for.
pub const UNRECOGNIZED_DEEP_LINK: &str = "Unrecognized Deep Link";

const CATEGORY_PARAMETER: &str = "category";
const DEEP_LINK_PARAMETER: &str = "any";

/// A decoded intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A fact from a category.
    Fact { category: Category },
    /// A cat fact.
    CatFact,
    /// Fallback for an unrecognized deep link.
    DeepLink { query: String },
}

impl Intent {
    /// Decodes an intent name and its parameters.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown intent name, or when the fact intents
    /// lack a valid `category` parameter.
    pub fn decode(name: &str, parameters: &Map<String, JsonValue>) -> Result<Self, DialogError> {
        match name {
            CHOOSE_FACT | TELL_FACT => {
                let raw = parameters
                    .get(CATEGORY_PARAMETER)
                    .filter(|value| !value.is_null())
                    .ok_or_else(|| DialogError::MissingParameter {
                        intent: name.to_string(),
                        parameter: CATEGORY_PARAMETER.to_string(),
                    })?;
                let invalid = |reason: String| DialogError::InvalidParameter {
                    intent: name.to_string(),
                    parameter: CATEGORY_PARAMETER.to_string(),
                    reason,
                };
                let category = raw
                    .as_str()
                    .ok_or_else(|| invalid(format!("expected a string, got {raw}")))?
                    .parse::<Category>()
                    .map_err(|e| invalid(e.to_string()))?;
                Ok(Self::Fact { category })
            }
            CHOOSE_CATS | TELL_CAT_FACT => Ok(Self::CatFact),
            UNRECOGNIZED_DEEP_LINK => {
                let query = parameters
                    .get(DEEP_LINK_PARAMETER)
                    .and_then(JsonValue::as_str)
                    .unwrap_or_default()
                    .to_string();
                Ok(Self::DeepLink { query })
            }
            _ => Err(DialogError::UnknownIntent {
                name: name.to_string(),
            }),
        }
    }

    /// Returns a short label for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fact { .. } => "fact",
            Self::CatFact => "cat_fact",
            Self::DeepLink { .. } => "deep_link",
        }
    }
}
