use planner_llm_sdk::error::LlmError;
use thiserror::Error;

/// The model reply could not be read as a JSON object
#[derive(Error, Debug)]
pub enum FormatError {
    /// The reply does not start with `{`, usually prose instead of data
    #[error("Model returned a non-JSON reply: {text}")]
    NotJson { text: String },

    /// The reply starts like JSON but does not parse into an object
    #[error("Failed to parse model reply: {message}")]
    Malformed { message: String, text: String },
}

/// Errors that abort a chat turn or a plan generation
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Model credential missing; raised before any network call
    #[error("{message}")]
    Configuration { message: String },

    /// The model call failed (network, non-2xx, unreadable envelope)
    #[error("Model request failed: {source}")]
    Transport {
        #[from]
        source: LlmError,
    },

    /// The model call did not finish within its budget
    #[error("Model request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Coarse classification used by adapters to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Format,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Transport => "transport",
            Self::Format => "format",
        }
    }
}

impl PlannerError {
    pub fn missing_credential() -> Self {
        Self::Configuration {
            message: "GROQ_API_KEY not configured".to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Transport { .. } | Self::Timeout { .. } => ErrorKind::Transport,
            Self::Format(_) => ErrorKind::Format,
        }
    }
}
