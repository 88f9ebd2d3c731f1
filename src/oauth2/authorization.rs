use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use iref::{Uri, UriBuf, uri::Query};
use rand::{RngExt, rng};
use serde::{Deserialize, Serialize};

use crate::{client::ClientError, util::extend_uri_query};

use super::ServerResult;

/// Authorization response type.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-3.1.1>
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
	/// Authorization Code grant.
	#[default]
	Code,
}

/// Authorization request, sent as the query of the authorization endpoint
/// URI the user-agent is redirected to.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.1>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorizeRequest {
	pub response_type: ResponseType,
	pub client_id: String,
	pub scope: String,
	pub redirect_uri: String,

	/// Opaque value used by the client to maintain state between the request
	/// and callback.
	///
	/// The authorization server includes this value when redirecting the
	/// user-agent back to the client. The parameter *should* be used for
	/// preventing cross-site request forgery.
	///
	/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-10.12>
	pub state: String,
}

impl AuthorizeRequest {
	pub fn new(
		response_type: ResponseType,
		client_id: impl Into<String>,
		scope: impl Into<String>,
		redirect_uri: impl Into<String>,
		state: impl Into<String>,
	) -> Self {
		Self {
			response_type,
			client_id: client_id.into(),
			scope: scope.into(),
			redirect_uri: redirect_uri.into(),
			state: state.into(),
		}
	}

	/// Authorization Code request with a freshly generated random `state`.
	pub fn code(
		client_id: impl Into<String>,
		scope: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self::new(
			ResponseType::Code,
			client_id,
			scope,
			redirect_uri,
			new_random_state(),
		)
	}

	/// Builds the URI to redirect the user-agent to.
	///
	/// The request parameters are percent-encoded and appended to the query of
	/// `endpoint`, which is otherwise kept as is.
	pub fn authorization_uri(&self, endpoint: &Uri) -> Result<UriBuf, ClientError> {
		let mut uri = endpoint.to_owned();
		extend_uri_query(&mut uri, self)?;
		Ok(uri)
	}
}

/// Generates a new random, base64url-encoded 128-bit CSRF token.
pub fn new_random_state() -> String {
	new_random_state_len(16)
}

/// Generates a new random, base64url-encoded CSRF token from `len` random
/// bytes.
pub fn new_random_state_len(len: u32) -> String {
	let random_bytes: Vec<u8> = (0..len).map(|_| rng().random::<u8>()).collect();
	BASE64_URL_SAFE_NO_PAD.encode(random_bytes)
}

/// Authorization response, received as the query of the redirect URI.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.2>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeResponse {
	pub code: String,
	pub state: String,
}

impl CodeResponse {
	pub fn new(code: impl Into<String>, state: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			state: state.into(),
		}
	}

	/// Parses a redirect query string, either a successful response or an
	/// OAuth 2.0 error.
	pub fn from_query(query: &str) -> Result<ServerResult<Self>, ClientError> {
		serde_html_form::from_str(query).map_err(ClientError::decode)
	}

	/// Parses the query of the URI the authorization server redirected to.
	pub fn from_redirect_uri(uri: &Uri) -> Result<ServerResult<Self>, ClientError> {
		Self::from_query(uri.query().map(Query::as_str).unwrap_or_default())
	}

	/// Checks the returned `state` against the one sent in the
	/// [`AuthorizeRequest`].
	pub fn matches_state(&self, request: &AuthorizeRequest) -> bool {
		self.state == request.state
	}
}
