//! Static vendor credentials.
//!
//! A [`Credential`] is built once at startup from validated configuration
//! and handed to [`VendorClient::new`](crate::VendorClient::new). It never
//! changes for the lifetime of the process.

use std::fmt;

use reqwest::RequestBuilder;

/// Authorization scheme and secret used for every vendor request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// HTTP Basic auth: `Authorization: Basic base64(username:token)`.
    Basic {
        /// Account name or e-mail address
        username: String,
        /// API token used as the password
        token: String,
    },
    /// Bearer auth: `Authorization: Bearer <token>`.
    Bearer {
        /// Personal access token
        token: String,
    },
}

impl Credential {
    /// Basic credential from a username and API token.
    pub fn basic(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Bearer credential from a personal access token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Name of the authorization scheme ("Basic" or "Bearer").
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "Basic",
            Self::Bearer { .. } => "Bearer",
        }
    }

    /// Attach the `Authorization` header to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, token } => builder.basic_auth(username, Some(token)),
            Self::Bearer { token } => builder.bearer_auth(token),
        }
    }
}

// Secrets never reach logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("token", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}
