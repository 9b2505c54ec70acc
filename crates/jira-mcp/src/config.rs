//! Jira adapter configuration.
//!
//! Values come from flags or, more commonly, from the environment
//! (`JIRA_INSTANCE_URL`, `JIRA_USER_EMAIL`, `JIRA_API_KEY`). All three are
//! required; [`Cli::into_config`] fails listing every missing one.

use atlassian_client::config::{Required, validate_base_url};
use atlassian_client::{ConfigError, Credential, Vendor, VendorClient};
use clap::Parser;

const INSTANCE_URL_VAR: &str = "JIRA_INSTANCE_URL";
const USER_EMAIL_VAR: &str = "JIRA_USER_EMAIL";
const API_KEY_VAR: &str = "JIRA_API_KEY";

/// Jira MCP server - search issues, read issues and log work over stdio
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "jira-mcp", version, about, long_about = None)]
pub struct Cli {
    /// Jira instance base URL, e.g. https://your-org.atlassian.net
    #[arg(long, env = "JIRA_INSTANCE_URL")]
    pub instance_url: Option<String>,

    /// Account e-mail used for Basic auth
    #[arg(long, env = "JIRA_USER_EMAIL")]
    pub user_email: Option<String>,

    /// API token used for Basic auth
    #[arg(long, env = "JIRA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl Cli {
    /// Validate the parsed options into a [`JiraConfig`].
    pub fn into_config(self) -> Result<JiraConfig, ConfigError> {
        let mut required = Required::new();
        let instance_url = required.take(INSTANCE_URL_VAR, self.instance_url);
        let user_email = required.take(USER_EMAIL_VAR, self.user_email);
        let api_key = required.take(API_KEY_VAR, self.api_key);
        required.finish()?;

        validate_base_url(INSTANCE_URL_VAR, &instance_url)?;

        Ok(JiraConfig {
            instance_url,
            user_email,
            api_key,
        })
    }
}

/// Validated Jira configuration, fixed for the process lifetime.
#[derive(Clone)]
pub struct JiraConfig {
    /// Instance base URL
    pub instance_url: String,
    /// Basic auth user
    pub user_email: String,
    api_key: String,
}

impl JiraConfig {
    /// Basic credential for every request.
    pub fn credential(&self) -> Credential {
        Credential::basic(&self.user_email, &self.api_key)
    }

    /// Build the process-wide Jira client.
    pub fn client(&self) -> atlassian_client::Result<VendorClient> {
        VendorClient::new(Vendor::Jira, &self.instance_url, self.credential())
    }
}

impl std::fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraConfig")
            .field("instance_url", &self.instance_url)
            .field("user_email", &self.user_email)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
