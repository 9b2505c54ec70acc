//! # atlassian-client
//!
//! Thin REST client shared by the Jira and Confluence MCP adapters.
//!
//! This crate provides:
//! - [`VendorClient`] — one pre-configured client per process, bound to a
//!   base URL and a static credential
//! - [`Credential`] — Basic (tracker) or Bearer (wiki) authorization
//! - [`Error`] — non-2xx responses, transport failures, undecodable bodies
//! - [`config`] — fail-fast checks for startup configuration
//!
//! Every request carries `Content-Type: application/json` and the
//! credential's `Authorization` header. There is no retry, no timeout
//! override and no caching: one call, one request.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod credential;
pub mod error;

pub use client::{QueryParams, Vendor, VendorClient};
pub use config::ConfigError;
pub use credential::Credential;
pub use error::{Error, Result};
