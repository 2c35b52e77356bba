use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use foodgram_shopping::{ExportFormat, RowTerminator};
use serde::Deserialize;
use std::{env, str::FromStr};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub export: ExportConfig,
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
pub struct JwtConfig {
    pub secret: String,
    pub expiration_days: u64,
    pub issuer: String,
    pub audience: String,
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

/// Layout of the downloadable shopping list.
///
/// `field_delimiter` is a single character; `row_terminator` is one of
/// `newline`, `crlf` or `semicolon`.
#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_field_delimiter")]
    pub field_delimiter: String,
    #[serde(default = "default_row_terminator")]
    pub row_terminator: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            field_delimiter: default_field_delimiter(),
            row_terminator: default_row_terminator(),
        }
    }
}

fn default_field_delimiter() -> String {
    ",".to_string()
}

fn default_row_terminator() -> String {
    RowTerminator::Newline.to_string()
}

impl ExportConfig {
    pub fn format(&self) -> Result<ExportFormat, String> {
        let mut chars = self.field_delimiter.chars();
        let field_delimiter = match (chars.next(), chars.next()) {
            (Some(c), None) if !matches!(c, '"' | '\r' | '\n') => c,
            _ => {
                return Err(format!(
                    "Export field delimiter {:?} must be a single character other than a quote or line break",
                    self.field_delimiter
                ));
            }
        };

        let row_terminator = RowTerminator::from_str(&self.row_terminator).map_err(|_| {
            format!(
                "Unknown export row terminator '{}' (expected newline, crlf or semicolon)",
                self.row_terminator
            )
        })?;

        if row_terminator == RowTerminator::Semicolon && field_delimiter == ';' {
            return Err("Export field delimiter and row terminator must differ".to_string());
        }

        Ok(ExportFormat {
            field_delimiter,
            row_terminator,
        })
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOODGRAM__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "sqlite:foodgram.db")?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.secret", "")?
            .set_default("jwt.expiration_days", 7)?
            .set_default("jwt.issuer", "foodgram")?
            .set_default("jwt.audience", "foodgram-api")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOODGRAM")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy variables without prefix
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(jwt_secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("jwt.secret", jwt_secret)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.jwt.secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        self.export.format()?;

        Ok(())
    }
}
