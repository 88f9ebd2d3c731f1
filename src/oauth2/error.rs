use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// An OAuth 2.0 error response.
///
/// This is the standard error format returned by the authorization server
/// when a request fails, both in the authorization redirect and in the token
/// endpoint response body.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-5.2>
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorResponse<T = String> {
	/// A single error code string.
	pub error: T,

	/// Human-readable text providing additional information about the error.
	pub error_description: Option<String>,

	/// A URI identifying a human-readable web page with information about
	/// the error.
	pub error_uri: Option<String>,

	/// Echo of the `state` sent in the authorization request, when the error
	/// comes from the authorization redirect.
	pub state: Option<String>,
}

impl<T> ErrorResponse<T> {
	pub fn new(error: T, error_description: Option<String>, error_uri: Option<String>) -> Self {
		Self {
			error,
			error_description,
			error_uri,
			state: None,
		}
	}
}

/// Result type that deserializes as either a success payload or an
/// [`ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerResult<T, E = String> {
	Ok(T),
	Err(ErrorResponse<E>),
}

impl<T, E> ServerResult<T, E> {
	pub fn into_result(self) -> Result<T, ErrorResponse<E>> {
		match self {
			Self::Ok(value) => Ok(value),
			Self::Err(e) => Err(e),
		}
	}
}

/// Error codes an authorization server may return.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.2.1> and
/// <https://datatracker.ietf.org/doc/html/rfc6749#section-5.2>
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
	InvalidRequest,
	InvalidClient,
	InvalidGrant,
	UnauthorizedClient,
	UnsupportedGrantType,
	InvalidScope,
	AccessDenied,
	UnsupportedResponseType,
	ServerError,
	TemporarilyUnavailable,

	/// Device authorization pending (RFC 8628).
	AuthorizationPending,
	SlowDown,
	ExpiredToken,
}
