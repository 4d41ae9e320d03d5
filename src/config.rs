use std::env;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::{ContactInfo, Limits, SocialLinks};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Delay of the simulated transport.
    #[serde(default = "default_submit_latency_ms")]
    pub submit_latency_ms: u64,
    #[serde(default)]
    pub limits: Limits,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: default_submit_latency_ms(),
            limits: Limits::default(),
        }
    }
}

fn default_submit_latency_ms() -> u64 {
    folio_contact::DEFAULT_SUBMIT_LATENCY.as_millis() as u64
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub social: SocialLinks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            role: default_role(),
            email: default_email(),
            phone: default_phone(),
            location: default_location(),
            social: SocialLinks::default(),
        }
    }
}

impl SiteConfig {
    pub fn contact_info(&self) -> ContactInfo {
        ContactInfo {
            email: self.email.to_owned(),
            phone: self.phone.to_owned(),
            location: self.location.to_owned(),
            social: self.social.clone(),
        }
    }
}

fn default_owner() -> String {
    "John Rod Legarto".to_string()
}

fn default_role() -> String {
    "IT Student & Web Developer".to_string()
}

fn default_email() -> String {
    "johnrod.legarto@example.com".to_string()
}

fn default_phone() -> String {
    "+63 XXX XXX XXXX".to_string()
}

fn default_location() -> String {
    "Valenzuela City, Metro Manila, Philippines".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__DATABASE__URL, DATABASE_URL)
    /// 2. Config file given by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:folio.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        let limits = &self.contact.limits;
        if limits.name_min > limits.name_max || limits.message_min > limits.message_max {
            return Err("Contact limits must have min lower than max".to_string());
        }

        if !folio_contact::validate_email(&self.site.email).is_valid {
            return Err(format!("Site email '{}' is not valid", self.site.email));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            contact: ContactConfig::default(),
            site: SiteConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_inverted_limits() {
        let mut config = config();
        config.contact.limits.message_min = 3000;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_site_email() {
        let mut config = config();
        config.site.email = "nobody".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_reads_toml_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("folio.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[contact]
submit_latency_ms = 10

[contact.limits]
message_min = 20

[site]
owner = "Ada Lovelace"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.display().to_string())).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.contact.submit_latency_ms, 10);
        assert_eq!(config.contact.limits.message_min, 20);
        assert_eq!(config.contact.limits.message_max, 2000);
        assert_eq!(config.site.owner, "Ada Lovelace");
        assert_eq!(config.site.email, "johnrod.legarto@example.com");
        assert!(config.validate().is_ok());
    }
}
