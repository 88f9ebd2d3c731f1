//! Asynchronous JSON HTTP client and [OAuth 2.0][rfc6749] message types.
//!
//! This crate is meant to be embedded in a host application that calls a
//! remote API and authenticates through OAuth 2.0:
//!
//! - [`Client`] sends requests built from a path, per-call headers and an
//!   optional body, and decodes JSON responses into any
//!   [`DeserializeOwned`](serde::de::DeserializeOwned) type.
//! - [`oauth2`] provides the Authorization Code and token endpoint messages
//!   to send and receive through it.
//!
//! # Modules
//!
//! - [`client`] — the HTTP client and its error type.
//! - [`options`] — client configuration.
//! - [`oauth2`] — OAuth 2.0 request and response types.
//! - [`transport`] — transport abstraction and content type encoding.
//! - [`util`] — URI query string utilities.
//! - [`host`] — host application collaborators.
//!
//! # Example
//!
//! ```no_run
//! use mintaka::{Client, ClientOptions, http::HeaderMap, oauth2::{TokenRequest, TokenResponse}};
//!
//! # async fn run() -> Result<(), mintaka::ClientError> {
//! let client = Client::new(ClientOptions::with_base_url("https://auth.example.com"));
//!
//! let _token: TokenResponse = client
//! 	.post_form("/oauth2/token", &TokenRequest::password("user", "pass"), &HeaderMap::new())
//! 	.await?;
//! # Ok(())
//! # }
//! ```
//!
//! [rfc6749]: https://datatracker.ietf.org/doc/html/rfc6749
#[cfg(feature = "reqwest")]
pub use reqwest;

pub use http;

pub mod client;
pub mod host;
pub mod oauth2;
pub mod options;
pub mod transport;
pub mod util;

pub use client::{Client, ClientError, ErrorKind};
pub use options::ClientOptions;
