use std::path::Path;

use getset::Getters;
use infrastructure_api_client::ApiConfig;
use serde::*;

use super::telemetry::TelemetryConfig;

#[derive(Default, Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct ConsoleConfig {
    #[serde(default)]
    api: ApiConfig,
    #[serde(default)]
    auth: AuthConfig,
    #[serde(default)]
    telemetry: TelemetryConfig,
    #[serde(default)]
    output: OutputFormat,
}

/// Credentials used to sign in. A stored token is tried first.
#[derive(Default, Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct AuthConfig {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl AuthConfig {
    pub fn credentials(&self) -> Option<(String, String)> {
        Some((self.email.clone()?, self.password.clone()?))
    }
}

#[derive(Default, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration layers: `config.yaml` of the working directory, the yaml
/// file named on the command line, then `GEARGUARD__*` environment variables.
pub fn build_config(file: Option<&Path>) -> anyhow::Result<config::Config> {
    let mut config = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    if let Some(file) = file {
        config = config.add_source(config::File::from(file).format(config::FileFormat::Yaml));
    }
    config = config.add_source(
        config::Environment::with_prefix("GEARGUARD")
            .separator("__")
            .try_parsing(true),
    );
    Ok(config.build()?)
}
