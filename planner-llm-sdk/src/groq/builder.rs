use crate::{
    error::LlmError,
    groq::{
        client::GroqClient,
        types::{GroqChatCompletionRequest, GroqChatCompletionResponse, GroqMessage, GroqRole},
    },
};

/// Builder for creating Groq chat completion requests
pub struct GroqMessageBuilder<'a> {
    client: &'a GroqClient,
    model: Option<String>,
    max_tokens: Option<u32>,
    messages: Vec<GroqMessage>,
    temperature: Option<f32>,
    top_p: Option<f32>,
    stop: Option<Vec<String>>,
}

impl<'a> GroqMessageBuilder<'a> {
    /// Create a new message builder
    pub fn new(client: &'a GroqClient) -> Self {
        Self {
            client,
            model: None,
            max_tokens: None,
            messages: Vec::new(),
            temperature: None,
            top_p: None,
            stop: None,
        }
    }

    /// Set the model to use
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Add a message to the conversation
    ///
    /// Valid roles: "system", "user", "assistant".
    /// Anything else is sent as "user".
    pub fn message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        let role_str = role.into();
        let role = match role_str.as_str() {
            "system" => GroqRole::System,
            "user" => GroqRole::User,
            "assistant" => GroqRole::Assistant,
            _ => {
                tracing::warn!("Invalid role '{}', defaulting to 'user'", role_str);
                GroqRole::User
            }
        };

        self.messages.push(GroqMessage::new(role, content));
        self
    }

    /// Add a system message
    pub fn system_message(self, content: impl Into<String>) -> Self {
        self.message("system", content)
    }

    /// Add a user message
    pub fn user_message(self, content: impl Into<String>) -> Self {
        self.message("user", content)
    }

    /// Add an assistant message
    pub fn assistant_message(self, content: impl Into<String>) -> Self {
        self.message("assistant", content)
    }

    /// Set the temperature for randomness
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the top-p sampling parameter
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set custom stop sequences
    pub fn stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.stop = Some(stop_sequences);
        self
    }

    /// Assemble the request without sending it
    pub fn build(self) -> Result<GroqChatCompletionRequest, LlmError> {
        Ok(GroqChatCompletionRequest {
            model: self
                .model
                .ok_or_else(|| LlmError::invalid_request("Model must be specified"))?,
            messages: self.messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            stop: self.stop,
        })
    }

    /// Send the request and get the response
    pub async fn send(self) -> Result<GroqChatCompletionResponse, LlmError> {
        let client = self.client;
        let request = self.build()?;
        client.create_chat_completion(request).await
    }
}
