//! HTTP transport layer, content type encoding, and client abstraction.
use http::HeaderValue;
use serde::Serialize;

use crate::client::ClientError;

mod client;

pub use client::*;

/// `Content-Type: application/json` header value.
pub const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// `Content-Type: application/x-www-form-urlencoded` header value.
pub const APPLICATION_X_WWW_FORM_URLENCODED: HeaderValue =
	HeaderValue::from_static("application/x-www-form-urlencoded");

/// Trait for encoding request bodies with a specific content type.
pub trait ContentType {
	/// The `Content-Type` header value, or `None` for requests with no body.
	const VALUE: Option<HeaderValue>;

	/// Serializes the given value into a byte vector using this content type's
	/// encoding.
	fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ClientError>;
}

/// No request body. Used for requests that don't carry a payload.
pub struct NoContent;

impl ContentType for NoContent {
	const VALUE: Option<HeaderValue> = None;

	fn encode<T: Serialize + ?Sized>(_value: &T) -> Result<Vec<u8>, ClientError> {
		Ok(Vec::new())
	}
}

/// JSON (`application/json`) content type encoding.
pub struct Json;

impl ContentType for Json {
	const VALUE: Option<HeaderValue> = Some(APPLICATION_JSON);

	fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ClientError> {
		serde_json::to_vec(value).map_err(ClientError::encode)
	}
}

/// URL-encoded form (`application/x-www-form-urlencoded`) content type
/// encoding.
///
/// Keys and values are percent-encoded.
pub struct WwwFormUrlEncoded;

impl ContentType for WwwFormUrlEncoded {
	const VALUE: Option<HeaderValue> = Some(APPLICATION_X_WWW_FORM_URLENCODED);

	fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ClientError> {
		serde_html_form::to_string(value)
			.map(String::into_bytes)
			.map_err(ClientError::encode)
	}
}

/// Joins form pairs as `key1=value1&key2=value2`, in iteration order.
///
/// Keys and values are written verbatim, without percent-encoding: a `&` or
/// `=` inside a value corrupts the payload. Use [`WwwFormUrlEncoded`] when the
/// data is not known to be safe.
pub fn encode_form_pairs<I, K, V>(pairs: I) -> String
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let mut body = String::new();

	for (key, value) in pairs {
		if !body.is_empty() {
			body.push('&');
		}

		body.push_str(key.as_ref());
		body.push('=');
		body.push_str(value.as_ref());
	}

	body
}
