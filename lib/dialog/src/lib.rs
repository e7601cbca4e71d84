//! Intent dispatch and response rendering for factdeck.
//!
//! This crate sits between the hosting platform and the fact-pool state
//! machine in `factdeck-conversation`:
//!
//! - **Intents**: Decoding dispatcher intent names and parameters
//! - **Dialog**: Routing an intent to the planner for one turn
//! - **Rendering**: Turning a `FactOutcome` into a platform-neutral [`Reply`]

pub mod dialog;
pub mod error;
pub mod intent;
pub mod render;
pub mod reply;

pub use dialog::Dialog;
pub use error::DialogError;
pub use intent::Intent;
pub use render::{RenderConfig, Renderer};
pub use reply::{Card, ContextChange, Image, LinkButton, Prompt, PromptArg, Reply, SimpleResponse};
