//! Vendor REST client.
//!
//! [`VendorClient`] wraps a `reqwest::Client` together with the base URL and
//! credential of one vendor instance. Handlers issue exactly one request per
//! tool invocation through [`VendorClient::get`] or [`VendorClient::post`];
//! the decoded JSON body comes back on success, and any non-2xx status is
//! turned into [`Error::Api`].
//!
//! Paths are given as segments. Each segment is percent-encoded on its own,
//! so caller-supplied keys cannot add segments, climb with `..` or start a
//! query string.

use std::fmt;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;

use crate::credential::Credential;
use crate::error::{Error, Result};

/// Query-string pairs for a single request.
///
/// Builders push only the keys whose value is present, so an absent option
/// never shows up as `key=` on the wire.
pub type QueryParams = Vec<(&'static str, String)>;

/// The vendor API a client is bound to; labels error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vendor {
    /// Jira issue tracker
    Jira,
    /// Confluence wiki
    Confluence,
}

impl Vendor {
    /// Display name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Jira => "Jira",
            Vendor::Confluence => "Confluence",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-configured HTTP client for one vendor instance.
///
/// Read-only after construction; share it behind an `Arc`.
#[derive(Debug)]
pub struct VendorClient {
    http: Client,
    root: Url,
    base_url: String,
    credential: Credential,
    vendor: Vendor,
}

impl VendorClient {
    /// Create a client for `vendor` rooted at `base_url`.
    ///
    /// A trailing `/` on the base URL is dropped so paths can be joined
    /// with a single separator. Fails when the base URL cannot carry a path.
    pub fn new(vendor: Vendor, base_url: impl Into<String>, credential: Credential) -> Result<Self> {
        let http = Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let root = Url::parse(&base_url).map_err(|e| Error::BaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if root.cannot_be_a_base() {
            return Err(Error::BaseUrl {
                url: base_url,
                reason: "URL cannot have path segments".to_string(),
            });
        }

        tracing::debug!(%vendor, base_url = %base_url, scheme = credential.scheme(), "vendor client created");

        Ok(Self {
            http,
            root,
            base_url,
            credential,
            vendor,
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Vendor this client talks to.
    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// Absolute URL for an API path given as segments.
    ///
    /// `/`, `?`, `#` and `%` inside a segment are percent-encoded. Empty,
    /// `.` and `..` segments are rejected.
    pub fn url(&self, path: &[&str]) -> Result<Url> {
        if let Some(segment) = path
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(Error::PathSegment(segment.to_string()));
        }

        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|()| Error::BaseUrl {
                url: self.base_url.clone(),
                reason: "URL cannot have path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    /// `GET` a path and decode the JSON response.
    pub async fn get(&self, path: &[&str], query: &[(&str, String)]) -> Result<Value> {
        self.send(self.request(Method::GET, path, query)?).await
    }

    /// `POST` a JSON body to a path and decode the JSON response.
    pub async fn post<B>(&self, path: &[&str], query: &[(&str, String)], body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path, query)?.json(body))
            .await
    }

    fn request(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, String)],
    ) -> Result<RequestBuilder> {
        let mut builder = self
            .http
            .request(method, self.url(path)?)
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            builder = builder.query(query);
        }
        Ok(self.credential.apply(builder))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(vendor = %self.vendor, status = status.as_u16(), "vendor request failed");
            return Err(Error::Api {
                vendor: self.vendor,
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(Error::Decode)
    }
}

// ============================================================================
// Tests
// ============================================================================
