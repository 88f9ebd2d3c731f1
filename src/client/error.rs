use crate::oauth2::ErrorResponse;

/// Broad category of a [`ClientError`].
///
/// Lets callers tell "the server could not be reached" apart from "the server
/// answered with something unexpected".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The request could not be sent, the response could not be received, or
	/// the server answered with a non-success status.
	Transport,

	/// The response body is not valid JSON or does not match the requested
	/// shape.
	Decode,

	/// The request body, form, header or query could not be encoded.
	Encoding,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	#[error("unable to encode request: {0}")]
	Encode(String),

	#[error("unable to send request: {0}")]
	Request(String),

	#[error("unable to receive response: {0}")]
	Response(String),

	#[error("server responded with status code: {status}")]
	ServerError {
		status: http::StatusCode,
		body: Vec<u8>,
	},

	#[error("unable to decode response: {0}")]
	Decode(String),
}

impl ClientError {
	pub fn encode(e: impl ToString) -> Self {
		Self::Encode(e.to_string())
	}

	pub fn request(e: impl ToString) -> Self {
		Self::Request(e.to_string())
	}

	pub fn response(e: impl ToString) -> Self {
		Self::Response(e.to_string())
	}

	pub fn server(status: http::StatusCode, body: Vec<u8>) -> Self {
		Self::ServerError { status, body }
	}

	pub fn decode(e: impl ToString) -> Self {
		Self::Decode(e.to_string())
	}

	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Encode(_) => ErrorKind::Encoding,
			Self::Request(_) | Self::Response(_) | Self::ServerError { .. } => ErrorKind::Transport,
			Self::Decode(_) => ErrorKind::Decode,
		}
	}

	pub fn is_transport(&self) -> bool {
		self.kind() == ErrorKind::Transport
	}

	pub fn is_decode(&self) -> bool {
		self.kind() == ErrorKind::Decode
	}

	/// Status code of a non-success response, if that is what this error is.
	pub fn status(&self) -> Option<http::StatusCode> {
		match self {
			Self::ServerError { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Decodes the body of a non-success response as an OAuth 2.0
	/// [`ErrorResponse`].
	///
	/// Returns `None` for any other error, or when the body is not an OAuth 2.0
	/// error object.
	pub fn error_response(&self) -> Option<ErrorResponse> {
		match self {
			Self::ServerError { body, .. } => serde_json::from_slice(body).ok(),
			_ => None,
		}
	}
}
