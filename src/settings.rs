use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub debug: bool,
    pub enable_swagger: bool,
    pub cors_permissive: bool,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .set_default("database_url", "sqlite://proffy.db")?
            .set_default("max_connections", 5)?
            .set_default("debug", false)?
            .set_default("enable_swagger", true)?
            .set_default("cors_permissive", true)?
            .set_default("port", 3333)?
            .add_source(File::with_name("settings").required(false))
            // APP_DATABASE_URL, APP_PORT, ... override everything else
            .add_source(Environment::with_prefix("APP").prefix_separator("_"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_defaults() {
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.max_connections, 5);
        assert!(settings.enable_swagger);
    }

    #[test]
    #[serial]
    fn test_env_override() {
        unsafe {
            std::env::set_var("APP_PORT", "4000");
            std::env::set_var("APP_DATABASE_URL", "sqlite::memory:");
        }
        let settings = Settings::from_env();
        unsafe {
            std::env::remove_var("APP_PORT");
            std::env::remove_var("APP_DATABASE_URL");
        }

        let settings = settings.unwrap();
        assert_eq!(settings.port, 4000);
        assert_eq!(settings.database_url, "sqlite::memory:");
    }
}
