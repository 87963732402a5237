//! # Configuration
//!
//! Settings are read from an optional TOML file and then from `DIDWEB_`
//! prefixed environment variables, using `__` to address nested keys (e.g.
//! `DIDWEB_COMMON_VERIFICATION_METHOD__ENABLED=true`).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::Deserialize;

/// Environment variable naming the settings file.
pub const CONFIG_FILE_VAR: &str = "DIDWEB_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "didweb.toml";
const ENV_PREFIX: &str = "DIDWEB";

/// Service settings.
#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    /// Domain the service is hosted on, optionally with a port
    /// (`example.com`, `localhost:8443`).
    pub did_web_domain: String,

    /// Socket address to listen on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Federation-wide common verification method.
    #[serde(default)]
    pub common_verification_method: CommonVerificationMethodSettings,
}

/// Settings of the common verification method added to every participant's
/// DID document.
#[derive(Clone, Debug, Deserialize)]
pub struct CommonVerificationMethodSettings {
    /// Whether the common verification method is enabled.
    #[serde(default)]
    pub enabled: bool,

    /// Verification method id (DID URL fragment). Reserved: participants
    /// cannot register a certificate under this id.
    #[serde(default = "default_common_vm_id")]
    pub id: String,

    /// Path of the common certificate. The bundled certificate is used when
    /// unset.
    #[serde(default)]
    pub cert_path: Option<PathBuf>,
}

impl Default for CommonVerificationMethodSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            id: default_common_vm_id(),
            cert_path: None,
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_common_vm_id() -> String {
    "JWK2020-Common".to_string()
}

impl Settings {
    /// Load settings from the file named by `DIDWEB_CONFIG` (default
    /// `didweb.toml`, optional) overlaid with environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the settings are
    /// incomplete.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var(CONFIG_FILE_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let builder = Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"),
            );
        Self::build(builder)
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or the settings are incomplete.
    pub fn from_toml(toml: &str) -> Result<Self> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Self = builder
            .build()
            .context("issue reading settings")?
            .try_deserialize()
            .context("issue deserializing settings")?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.did_web_domain.trim().is_empty() {
            bail!("did_web_domain must not be empty");
        }
        if self.common_verification_method.enabled
            && self.common_verification_method.id.trim().is_empty()
        {
            bail!("common_verification_method.id must not be empty when enabled");
        }
        Ok(())
    }
}
