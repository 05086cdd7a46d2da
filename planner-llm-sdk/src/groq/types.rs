use serde::{Deserialize, Serialize};

/// Groq chat completion request (OpenAI-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqChatCompletionRequest {
    /// The model to use for generation
    pub model: String,
    /// Input messages
    pub messages: Vec<GroqMessage>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature for randomness (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Top-p sampling parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Custom stop sequences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

/// A message in the Groq conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroqMessage {
    /// Role of the message sender
    pub role: GroqRole,
    /// Content of the message; null for some non-text completions
    #[serde(default)]
    pub content: Option<String>,
}

/// Role of a Groq message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroqRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// Groq chat completion response (OpenAI-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqChatCompletionResponse {
    /// Unique identifier for the response
    pub id: String,
    /// Object type (always "chat.completion")
    pub object: String,
    /// Unix timestamp of creation
    pub created: u64,
    /// Model used for generation
    pub model: String,
    /// Completion choices
    pub choices: Vec<GroqChoice>,
    /// Token usage information
    #[serde(default)]
    pub usage: Option<GroqUsage>,
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqChoice {
    /// Index of the choice
    pub index: u32,
    /// The message content
    pub message: GroqMessage,
    /// Reason why generation stopped
    pub finish_reason: Option<String>,
}

/// Token usage information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Groq API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqErrorResponse {
    /// Error details
    pub error: GroqError,
}

/// Groq API error details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqError {
    /// Error message
    pub message: String,
    /// Error type
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Error code
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<String>,
}

impl GroqMessage {
    /// Create a new text message
    pub fn new<S: Into<String>>(role: GroqRole, content: S) -> Self {
        Self {
            role,
            content: Some(content.into()),
        }
    }

    /// Create a system message
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self::new(GroqRole::System, content)
    }

    /// Create a user message
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::new(GroqRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::new(GroqRole::Assistant, content)
    }
}

impl GroqChatCompletionResponse {
    /// Text of the first choice, empty when the model returned no content
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_deref().unwrap_or(""))
    }
}
