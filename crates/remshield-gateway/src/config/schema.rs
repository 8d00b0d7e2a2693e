use remshield_core::engine::Toggles;
use remshield_core::error::{RemShieldError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub platform: PlatformSection,

    #[serde(default)]
    pub toggles: Toggles,

    #[serde(default)]
    pub secrets: SecretsSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RemShieldError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.platform.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

/// Platform route facts and response charset.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformSection {
    /// Resolved base path of the API surface.
    #[serde(default = "default_api_base_path")]
    pub api_base_path: String,

    /// API URL prefix text (substring catch-all input).
    #[serde(default = "default_api_url_prefix")]
    pub api_url_prefix: String,

    /// Path of the legacy RPC endpoint.
    #[serde(default = "default_rpc_endpoint")]
    pub rpc_endpoint: String,

    /// Charset advertised in denial content types and XML prologs.
    #[serde(default = "default_charset")]
    pub charset: String,
}

impl Default for PlatformSection {
    fn default() -> Self {
        Self {
            api_base_path: default_api_base_path(),
            api_url_prefix: default_api_url_prefix(),
            rpc_endpoint: default_rpc_endpoint(),
            charset: default_charset(),
        }
    }
}

impl PlatformSection {
    pub fn validate(&self) -> Result<()> {
        if !self.api_base_path.starts_with('/') {
            return Err(RemShieldError::BadRequest(
                "platform.api_base_path must be absolute (start with '/')".into(),
            ));
        }
        if self.api_url_prefix.is_empty() {
            return Err(RemShieldError::BadRequest(
                "platform.api_url_prefix must not be empty".into(),
            ));
        }
        if !self.rpc_endpoint.starts_with('/') {
            return Err(RemShieldError::BadRequest(
                "platform.rpc_endpoint must be absolute (start with '/')".into(),
            ));
        }
        Ok(())
    }
}

/// Platform-wide default secret material for the vault.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsSection {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub salt: String,
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_api_base_path() -> String {
    "/wp-json/".into()
}
fn default_api_url_prefix() -> String {
    "wp-json".into()
}
fn default_rpc_endpoint() -> String {
    "/xmlrpc".into()
}
fn default_charset() -> String {
    "UTF-8".into()
}
