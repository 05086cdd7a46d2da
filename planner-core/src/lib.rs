//! Conversation-to-schedule pipeline.
//!
//! A plan request flows through [`facts`] (free-text extraction),
//! [`requester`] (one model call), [`sanitizer`] (fence stripping and JSON
//! parsing), [`raw`] (lenient coercion) and [`materializer`] (absolute
//! dates, fallback synthesis). [`chat`] is the independent clarifying-question
//! turn. [`PlannerService`] ties both to an injected model client.

pub mod chat;
pub mod error;
pub mod facts;
pub mod materializer;
pub mod prompts;
pub mod raw;
pub mod requester;
pub mod sanitizer;
pub mod service;

pub use error::{ErrorKind, FormatError, PlannerError};
pub use facts::ExtractedFacts;
pub use materializer::Anchor;
pub use raw::RawPlan;
pub use service::{PlannerService, PlannerSettings};
