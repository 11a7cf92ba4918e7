use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000/api/v1".to_string(),
            backend_url_production: "https://loan-tracker-blond.vercel.app/api/v1".to_string(),
            environment: "production".to_string(),
            enable_logging: true,
            toast_duration_ms: 4000,
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    /// (promoted from .env by build.rs), falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .unwrap_or("4000")
                .parse()
                .unwrap_or(4000),
        }
    }

    /// Backend base URL for the current environment.
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "development" => &self.backend_url_development,
            _ => &self.backend_url_production,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
