//! Generation client abstraction: assembled prompt in, appreciation text out.
//!
//! One request per call; retries, caching, and streaming are out of scope.
//! Resubmission is the user's decision. Implementations:
//! `ChatCompletion` (real OpenAI-compatible API) and `MockGeneration`
//! (tests).

mod mock;
mod openai;

pub use mock::MockGeneration;
pub use openai::{ChatCompletion, DEFAULT_MODEL};

use async_trait::async_trait;

use crate::error::GenerateError;

/// Text-generation client: sends one prompt, returns the trimmed reply.
///
/// **Interaction**: the run loop builds the prompt with
/// [`crate::prompt::build_prompt`] and appends each successful reply to a
/// [`crate::session::SessionLog`].
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Sends the prompt, returns the response text with surrounding
    /// whitespace trimmed, or a classified failure. No retry is attempted.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}
