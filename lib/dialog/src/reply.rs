//! Platform-neutral replies.
//!
//! A [`Reply`] describes what to say and show without committing to a
//! platform's card format or a locale. Text is given as string-resource keys
//! with arguments; the host looks them up and builds the final response.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An argument substituted into a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PromptArg {
    /// Another string-resource key, looked up before substitution.
    Key(String),
    /// Text used as is.
    Literal(String),
    /// A prompt rendered before substitution.
    Prompt(Box<Prompt>),
}

/// A string-resource key plus the arguments for its placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// The resource key.
    pub key: String,
    /// Arguments in placeholder order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<PromptArg>,
}

impl Prompt {
    /// Creates a prompt with no arguments.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Appends a resource-key argument.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.args.push(PromptArg::Key(key.into()));
        self
    }

    /// Appends a literal argument.
    #[must_use]
    pub fn with_literal(mut self, text: impl Into<String>) -> Self {
        self.args.push(PromptArg::Literal(text.into()));
        self
    }

    /// Appends a nested prompt argument.
    #[must_use]
    pub fn with_prompt(mut self, prompt: Prompt) -> Self {
        self.args.push(PromptArg::Prompt(Box::new(prompt)));
        self
    }
}

/// One spoken response, optionally with different display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleResponse {
    /// What is spoken (and displayed, unless `display` is set).
    pub speech: Prompt,
    /// Display text when it differs from the speech.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Prompt>,
}

impl From<Prompt> for SimpleResponse {
    fn from(speech: Prompt) -> Self {
        Self {
            speech,
            display: None,
        }
    }
}

/// An image given by resource keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Resource key of the image URL.
    pub url_key: String,
    /// Resource key of the accessibility text.
    pub accessibility_key: String,
}

/// A button that opens a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkButton {
    /// Resource key of the button title.
    pub title_key: String,
    /// Resource key of the target URL.
    pub url_key: String,
}

/// A card shown next to the spoken response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: Prompt,
    pub image: Image,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<LinkButton>,
}

/// A change to the dispatcher's follow-up contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ContextChange {
    /// Activate a context for the next `lifespan` turns.
    Set {
        name: String,
        lifespan: u32,
        parameters: BTreeMap<String, String>,
    },
    /// Deactivate a context.
    Remove { name: String },
}

/// Everything the host needs to answer one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Responses in the order they are spoken.
    pub responses: Vec<SimpleResponse>,
    /// Optional card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Suggestion chips.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Context changes for the dispatcher.
    #[serde(default)]
    pub contexts: Vec<ContextChange>,
    /// Whether the conversation ends after this reply.
    #[serde(default)]
    pub end_conversation: bool,
}

impl Reply {
    /// Creates an empty reply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a spoken response.
    #[must_use]
    pub fn say(mut self, response: impl Into<SimpleResponse>) -> Self {
        self.responses.push(response.into());
        self
    }

    /// Sets the card.
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    /// Adds suggestion chips.
    #[must_use]
    pub fn suggest<S: AsRef<str>>(mut self, chips: &[S]) -> Self {
        self.suggestions
            .extend(chips.iter().map(|chip| chip.as_ref().to_string()));
        self
    }

    /// Records a context change.
    #[must_use]
    pub fn with_context(mut self, change: ContextChange) -> Self {
        self.contexts.push(change);
        self
    }

    /// Marks the reply as the last of the conversation.
    #[must_use]
    pub fn end_conversation(mut self) -> Self {
        self.end_conversation = true;
        self
    }

    /// Returns the resource keys of the top-level speech prompts.
    pub fn speech_keys(&self) -> impl Iterator<Item = &str> {
        self.responses
            .iter()
            .map(|response| response.speech.key.as_str())
    }
}
