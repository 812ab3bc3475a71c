//! Plume: report-card appreciation generation.
//!
//! Core pipeline: an [`evaluation::Evaluation`] is checked by
//! [`validate::validate`], rendered to a French instruction string by
//! [`prompt::build_prompt`], sent through a [`llm::GenerationClient`], and
//! each successful reply is appended to a [`session::SessionLog`] for CSV
//! export.
//!
//! The log is an owned value passed around by the caller; independent
//! sessions never share state.

pub mod error;
pub mod evaluation;
pub mod llm;
pub mod prompt;
pub mod session;
pub mod validate;

pub use error::GenerateError;
pub use evaluation::{CommentLength, Evaluation, Gender, PerformanceLevel, Section, Tone};
pub use llm::{ChatCompletion, GenerationClient, MockGeneration, DEFAULT_MODEL};
pub use prompt::build_prompt;
pub use session::{SessionLog, SessionRecord, CSV_FILE_NAME};
pub use validate::{validate, Field, ValidationErrors};
