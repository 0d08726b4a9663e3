use crate::error::AppError;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let raw = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(&raw)
    }

    pub fn new(api_base_url: &str) -> Result<Self, AppError> {
        let trimmed = api_base_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::Config("API_BASE_URL is empty".into()));
        }

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API_BASE_URL must start with http:// or https:// (got '{}')",
                trimmed
            )));
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }
}
