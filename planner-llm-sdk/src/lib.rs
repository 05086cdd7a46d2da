//! # Planner LLM SDK
//!
//! A small provider-agnostic LLM layer used by the project planner, with a
//! Groq client for the OpenAI-compatible chat completions API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use planner_llm_sdk::groq::GroqClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GroqClient::new("your-groq-api-key")?;
//!     let response = client
//!         .message_builder()
//!         .model("llama-3.3-70b-versatile")
//!         .max_tokens(200)
//!         .user_message("Hello!")
//!         .send()
//!         .await?;
//!
//!     println!("Response: {}", response.first_text().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod groq;
pub mod models;
pub mod providers;
pub mod types;
