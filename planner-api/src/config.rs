use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use planner_core::PlannerSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub api_keys: ApiKeysConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LlmConfig {
    pub model: String,
    pub base_url: String,
    pub chat_temperature: f32,
    pub chat_max_tokens: u32,
    pub chat_timeout_secs: u64,
    pub plan_temperature: f32,
    pub plan_max_tokens: u32,
    pub plan_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ApiKeysConfig {
    pub groq_api_key: Option<String>,
}

impl ApiConfig {
    /// Defaults, then `planner.toml` in the working directory, then
    /// `~/.config/project-planner/api.toml`, then `PLANNER__*` variables
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if let Ok(current_dir) = std::env::current_dir() {
            builder = builder.add_source(File::from(current_dir.join("planner.toml")).required(false));
        }
        if let Some(config_path) = get_user_config_path() {
            builder = builder.add_source(File::from(config_path).required(false));
        }

        builder.add_source(env_source()).build()?.try_deserialize()
    }

    /// Defaults overlaid with one required file, then `PLANNER__*` variables
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path.to_path_buf()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let settings = PlannerSettings::default();
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("cors.allowed_origins", vec!["*"])?
            .set_default("llm.model", settings.model)?
            .set_default("llm.base_url", "https://api.groq.com")?
            .set_default("llm.chat_temperature", f64::from(settings.chat_temperature))?
            .set_default("llm.chat_max_tokens", i64::from(settings.chat_max_tokens))?
            .set_default("llm.chat_timeout_secs", settings.chat_timeout.as_secs() as i64)?
            .set_default("llm.plan_temperature", f64::from(settings.plan_temperature))?
            .set_default("llm.plan_max_tokens", i64::from(settings.plan_max_tokens))?
            .set_default("llm.plan_timeout_secs", settings.plan_timeout.as_secs() as i64)?
            .set_default("logging.level", "info")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Configured key, else the `GROQ_API_KEY` environment variable
    pub fn groq_api_key(&self) -> Option<String> {
        resolve_api_key(
            self.api_keys.groq_api_key.as_deref(),
            std::env::var(API_KEY_ENV).ok(),
        )
    }

    pub fn planner_settings(&self) -> PlannerSettings {
        PlannerSettings {
            model: self.llm.model.clone(),
            chat_temperature: self.llm.chat_temperature,
            chat_max_tokens: self.llm.chat_max_tokens,
            chat_timeout: Duration::from_secs(self.llm.chat_timeout_secs),
            plan_temperature: self.llm.plan_temperature,
            plan_max_tokens: self.llm.plan_max_tokens,
            plan_timeout: Duration::from_secs(self.llm.plan_timeout_secs),
        }
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("PLANNER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Blank values count as absent
pub fn resolve_api_key(configured: Option<&str>, from_env: Option<String>) -> Option<String> {
    configured
        .map(str::to_string)
        .filter(|key| !key.trim().is_empty())
        .or_else(|| from_env.filter(|key| !key.trim().is_empty()))
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("project-planner/api.toml"))
}
