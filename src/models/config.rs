use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Minimum key length accepted by `actix_web::cookie::Key`.
pub const MIN_SECRET_KEY_LEN: usize = 64;

/// Configuration options for the blog server.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Master key signing the session and flash-message cookies.
    pub secret_key: String,
    /// Glob pattern Tera loads templates from.
    pub templates_dir: String,
    /// Directory served under `/assets`.
    pub static_dir: String,
}

impl ServerConfig {
    /// Load settings from `config/default.yaml`, the optional
    /// `config/{APP_ENV}.yaml` overlay and `APP_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        let settings: ServerConfig = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.len() < MIN_SECRET_KEY_LEN {
            return Err(ConfigError::Message(format!(
                "secret_key must be at least {MIN_SECRET_KEY_LEN} bytes long"
            )));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.address.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(secret_key: &str) -> ServerConfig {
        ServerConfig {
            database_url: "app.db".into(),
            address: "127.0.0.1".into(),
            port: 3000,
            secret_key: secret_key.into(),
            templates_dir: "templates/**/*".into(),
            static_dir: "./assets".into(),
        }
    }

    #[test]
    fn short_secret_is_rejected() {
        assert!(sample_config("too-short").validate().is_err());
    }

    #[test]
    fn long_secret_is_accepted() {
        assert!(sample_config(&"k".repeat(MIN_SECRET_KEY_LEN)).validate().is_ok());
    }
}
