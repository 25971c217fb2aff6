//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// SMTP and business notification configuration
    pub email: EmailSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

/// Email dispatch configuration.
///
/// Every field is required: a missing sender or business address is a startup
/// failure, not a per-request error.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// Username for SMTP authentication
    pub username: String,

    /// Password for SMTP authentication
    pub password: String,

    /// Display name on outgoing mail
    pub sender_name: String,

    /// Sender address on outgoing mail
    pub sender_email: String,

    /// Address receiving the business copy of every notification
    pub business_address: String,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed frontend origins
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed, or
    /// if any of the required email settings is missing or blank.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("email.smtp_port", 587)?
            .set_default(
                "cors.allowed_origins",
                vec!["http://localhost:5173", "http://localhost:3000"],
            )?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__EMAIL__SMTP_HOST=smtp.example.com -> email.smtp_host
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("email.smtp_host", std::env::var("SMTP_HOST").ok())?
            .set_override_option("email.username", std::env::var("SMTP_USERNAME").ok())?
            .set_override_option("email.password", std::env::var("SMTP_PASSWORD").ok())?
            .set_override_option("email.sender_email", std::env::var("SENDER_EMAIL").ok())?
            .set_override_option(
                "email.business_address",
                std::env::var("BUSINESS_EMAIL").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.email.validate()?;
                Ok(settings)
            })
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl EmailSettings {
    /// Reject blank addresses that would otherwise only fail at send time.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.sender_email.trim().is_empty() {
            return Err(ConfigError::Message(
                "email.sender_email must not be empty".into(),
            ));
        }
        if self.business_address.trim().is_empty() {
            return Err(ConfigError::Message(
                "email.business_address must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl DatabaseSettings {
    /// Get the connection URL.
    pub fn connection_url(&self) -> &str {
        &self.url
    }
}
