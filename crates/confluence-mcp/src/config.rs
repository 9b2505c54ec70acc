//! Confluence adapter configuration.
//!
//! `CONFLUENCE_BASE` points at the REST root (it already includes
//! `/rest/api`) and falls back to [`DEFAULT_BASE_URL`]. `CONFLUENCE_PAT` is
//! required.

use atlassian_client::config::{Required, validate_base_url};
use atlassian_client::{ConfigError, Credential, Vendor, VendorClient};
use clap::Parser;

/// REST root used when `CONFLUENCE_BASE` is unset.
pub const DEFAULT_BASE_URL: &str = "https://spaces.telenav.com:8443/rest/api";

const BASE_URL_VAR: &str = "CONFLUENCE_BASE";
const TOKEN_VAR: &str = "CONFLUENCE_PAT";

/// Confluence MCP server - search, read and create wiki pages over stdio
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "confluence-mcp", version, about, long_about = None)]
pub struct Cli {
    /// Confluence REST root, including /rest/api
    #[arg(long, env = "CONFLUENCE_BASE")]
    pub base_url: Option<String>,

    /// Personal access token sent as a Bearer token
    #[arg(long, env = "CONFLUENCE_PAT", hide_env_values = true)]
    pub token: Option<String>,
}

impl Cli {
    /// Validate the parsed options into a [`ConfluenceConfig`].
    pub fn into_config(self) -> Result<ConfluenceConfig, ConfigError> {
        let mut required = Required::new();
        let token = required.take(TOKEN_VAR, self.token);
        required.finish()?;

        let base_url = self
            .base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(BASE_URL_VAR, &base_url)?;

        Ok(ConfluenceConfig { base_url, token })
    }
}

/// Validated Confluence configuration, fixed for the process lifetime.
#[derive(Clone)]
pub struct ConfluenceConfig {
    /// REST root
    pub base_url: String,
    token: String,
}

impl ConfluenceConfig {
    /// Bearer credential for every request.
    pub fn credential(&self) -> Credential {
        Credential::bearer(&self.token)
    }

    /// Build the process-wide Confluence client.
    pub fn client(&self) -> atlassian_client::Result<VendorClient> {
        VendorClient::new(Vendor::Confluence, &self.base_url, self.credential())
    }
}

impl std::fmt::Debug for ConfluenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfluenceConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
