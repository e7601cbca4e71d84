//! Strongly-typed ID types for conversations and turns.
//!
//! IDs use ULID format, so turns of one conversation sort by creation time.
//! The display form carries a short type prefix (`conv_…`, `turn_…`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to generate a strongly-typed ID wrapper around ULID.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Ulid);

        impl $name {
            /// Creates a new ID with a randomly generated ULID.
            #[must_use]
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// Returns the underlying ULID.
            #[must_use]
            pub const fn as_ulid(&self) -> Ulid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Accept both the display form and a bare ULID
                let ulid_str = s.strip_prefix(concat!($prefix, "_")).unwrap_or(s);

                Ulid::from_str(ulid_str)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        reason: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Unique identifier for a conversation (one fact-telling session).
    ConversationId,
    "conv"
);

define_id!(
    /// Unique identifier for a single turn within a conversation.
    TurnId,
    "turn"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_id_display_format() {
        let id = ConversationId::new();
        assert!(id.to_string().starts_with("conv_"));
    }

    #[test]
    fn turn_id_display_format() {
        let id = TurnId::new();
        assert!(id.to_string().starts_with("turn_"));
    }

    #[test]
    fn parse_with_prefix() {
        let id = ConversationId::new();
        let parsed: ConversationId = id.to_string().parse().expect("should parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_without_prefix() {
        let ulid = Ulid::new();
        let id: ConversationId = ulid.to_string().parse().expect("should parse");
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn parse_rejects_foreign_prefix() {
        let turn = TurnId::new();
        let result: Result<ConversationId, _> = turn.to_string().parse();
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "ConversationId");
    }

    #[test]
    fn parse_invalid_ulid() {
        let result: Result<ConversationId, _> = "not_a_ulid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn ids_are_distinct() {
        use std::collections::HashSet;

        let first = ConversationId::new();
        let second = ConversationId::new();

        let mut set = HashSet::new();
        set.insert(first);
        set.insert(second);
        set.insert(first);

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serializes_as_bare_ulid() {
        let id = ConversationId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.as_ulid()));
        let parsed: ConversationId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
