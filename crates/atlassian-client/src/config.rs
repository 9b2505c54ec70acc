//! Startup configuration checks.
//!
//! Adapters read their base URL and credentials once, before the transport
//! is attached. Any missing value is fatal: [`Required`] collects every
//! missing variable so the diagnostic names all of them at once.

use reqwest::Url;
use thiserror::Error;

/// Invalid or incomplete startup configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// One or more required variables are unset or empty.
    #[error("{} must be set in the environment", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// A base URL that is not an absolute http(s) URL.
    #[error("{var} is not a valid http(s) URL: {value}")]
    InvalidUrl {
        /// Variable that held the URL
        var: &'static str,
        /// Offending value
        value: String,
    },
}

/// Collects required values, remembering which ones are missing.
///
/// Empty strings count as missing.
///
/// ```rust
/// use atlassian_client::config::{ConfigError, Required};
///
/// let mut required = Required::new();
/// let url = required.take("JIRA_INSTANCE_URL", Some("https://x.atlassian.net".into()));
/// let key = required.take("JIRA_API_KEY", None);
/// assert_eq!(url, "https://x.atlassian.net");
/// assert!(key.is_empty());
/// assert_eq!(required.finish(), Err(ConfigError::Missing(vec!["JIRA_API_KEY"])));
/// ```
#[derive(Debug, Default)]
pub struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    /// Start an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a value, recording `var` as missing when it is absent or empty.
    ///
    /// Returns an empty string for missing values; call [`Required::finish`]
    /// before using any of them.
    pub fn take(&mut self, var: &'static str, value: Option<String>) -> String {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => {
                self.missing.push(var);
                String::new()
            }
        }
    }

    /// Fail if anything was missing.
    pub fn finish(self) -> Result<(), ConfigError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(self.missing))
        }
    }
}

/// Check that `value` parses as an absolute http(s) URL.
pub fn validate_base_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        var,
        value: value.to_string(),
    };
    let url = Url::parse(value).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(invalid()),
    }
}
