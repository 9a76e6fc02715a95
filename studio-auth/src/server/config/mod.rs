use crate::common::Principal;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Configuration {
    #[serde(default)]
    pub server: ServerConfiguration,
    #[serde(default)]
    pub account: AccountConfiguration,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfiguration {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Delay added to login and password reset responses.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

/// The single account the mock service accepts.
#[derive(Debug, Deserialize, Clone)]
pub struct AccountConfiguration {
    #[serde(default = "default_id")]
    pub id: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_password")]
    pub password: String,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_role")]
    pub role: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_id() -> String {
    "1".to_string()
}

fn default_email() -> String {
    "admin@s51studios.com".to_string()
}

fn default_password() -> String {
    "admin123".to_string()
}

fn default_name() -> String {
    "Admin User".to_string()
}

fn default_role() -> String {
    "Admin".to_string()
}

impl Default for ServerConfiguration {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            latency_ms: default_latency_ms(),
        }
    }
}

impl Default for AccountConfiguration {
    fn default() -> Self {
        Self {
            id: default_id(),
            email: default_email(),
            password: default_password(),
            name: default_name(),
            role: default_role(),
        }
    }
}

impl AccountConfiguration {
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

impl Configuration {
    pub fn new() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if std::path::Path::new("studio-auth.toml").exists() {
            builder = builder.add_source(config::File::with_name("studio-auth"));
        }

        builder =
            builder.add_source(config::Environment::with_prefix("STUDIO_AUTH").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// Defaults with no simulated latency.
    pub fn instant() -> Self {
        let mut configuration = Self::default();
        configuration.server.latency_ms = 0;
        configuration
    }
}
