//! Model constants for supported LLM providers

/// Groq model constants
pub mod groq {
    /// Llama 3.3 70B Versatile - general purpose model used for planning and chat
    pub const LLAMA_3_3_70B_VERSATILE_ID: &str = "llama-3.3-70b-versatile";

    pub const DEFAULT_MODEL: &str = LLAMA_3_3_70B_VERSATILE_ID;
}
