//! Client configuration.
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::client::ClientError;

/// Default log target used by [`ClientOptions`].
pub const DEFAULT_LOG_TARGET: &str = "HttpClient";

/// Options for creating a [`Client`](crate::Client).
///
/// Options are fixed once the client is built. No validation is performed: a
/// missing base URL is legal, in which case every request path must be an
/// absolute URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
	base_url: Option<String>,
	headers: HeaderMap,
	log_enabled: bool,
	log_target: String,
}

impl ClientOptions {
	pub fn new(
		base_url: Option<String>,
		headers: HeaderMap,
		log_enabled: bool,
		log_target: impl Into<String>,
	) -> Self {
		Self {
			base_url,
			headers,
			log_enabled,
			log_target: log_target.into(),
		}
	}

	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		Self {
			base_url: Some(base_url.into()),
			..Self::default()
		}
	}

	/// Adds a default header sent with every request.
	///
	/// Fails with an encoding error if the name or value is not a valid HTTP
	/// header.
	pub fn header(mut self, name: &str, value: &str) -> Result<Self, ClientError> {
		let name = HeaderName::try_from(name).map_err(ClientError::encode)?;
		let value = HeaderValue::try_from(value).map_err(ClientError::encode)?;
		self.headers.append(name, value);
		Ok(self)
	}

	pub fn base_url(&self) -> Option<&str> {
		self.base_url.as_deref()
	}

	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	pub fn log_enabled(&self) -> bool {
		self.log_enabled
	}

	pub fn log_target(&self) -> &str {
		&self.log_target
	}

	/// Final request URL: the base URL followed by `path`, verbatim.
	pub fn url_for(&self, path: &str) -> String {
		let mut url = self.base_url.clone().unwrap_or_default();
		url.push_str(path);
		url
	}

	/// Default headers overlaid with `headers`.
	///
	/// A name present in `headers` replaces every default value for that name.
	pub fn merge_headers(&self, headers: &HeaderMap) -> HeaderMap {
		let mut merged = self.headers.clone();

		for name in headers.keys() {
			merged.remove(name);
		}

		for (name, value) in headers {
			merged.append(name.clone(), value.clone());
		}

		merged
	}
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self::new(None, HeaderMap::new(), false, DEFAULT_LOG_TARGET)
	}
}
