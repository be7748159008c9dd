use anyhow::Context;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

const DEFAULT_CONFIG_FILE: &str = "config/app";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub scale: ScaleSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScaleSettings {
    /// Offset of the reference timezone, used when rendering a date as local midnight
    pub utc_offset_hours: i32,
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            scale: ScaleSettings {
                // Asia/Jakarta
                utc_offset_hours: 7,
                seed_sample_data: true,
            },
        }
    }
}

impl AppConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .with_context(|| format!("Invalid server address {}", addr))
    }

    pub fn reference_offset(&self) -> anyhow::Result<FixedOffset> {
        let hours = self.scale.utc_offset_hours;
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .with_context(|| format!("UTC offset of {} hours is out of range", hours))
    }
}

/// Defaults, then `config/app.toml` (or the file named by `SCALE_CONFIG`), then
/// `SCALE__SECTION__KEY` environment variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let file = config_file(std::env::var("SCALE_CONFIG").ok());
    load_from(&file, scale_environment())
}

fn config_file(override_path: Option<String>) -> String {
    override_path.unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string())
}

fn scale_environment() -> config::Environment {
    config::Environment::with_prefix("SCALE").separator("__")
}

fn load_from(file: &str, environment: config::Environment) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::Config::try_from(&AppConfig::default())?)
        .add_source(config::File::with_name(file).required(false))
        .add_source(environment)
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.reference_offset()?;
    Ok(app_config)
}
