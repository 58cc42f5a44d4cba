use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_LOGIN_URL: &str = "/login";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: SocketAddr,
    /// Page unauthenticated users are redirected to, receives the original path as `next`
    pub login_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address,
            login_url: optional_var("LOGIN_URL").unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string()),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and empty variables are both treated as absent
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
