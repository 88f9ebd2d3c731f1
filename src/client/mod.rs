//! Asynchronous JSON HTTP client.
use http::{HeaderMap, HeaderValue, Method, header};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
	options::ClientOptions,
	transport::{
		APPLICATION_X_WWW_FORM_URLENCODED, ContentType, HttpClient, Json, NoContent,
		WwwFormUrlEncoded, encode_form_pairs,
	},
};

mod error;

pub use error::*;

/// Helper to make HTTP requests against a single API.
///
/// Every call merges the per-call headers on top of the
/// [default headers](ClientOptions::headers), resolves the path against the
/// base URL, sends the request through the transport handle and decodes the
/// response.
///
/// Non-success status codes are reported as [`ClientError::ServerError`].
#[derive(Debug, Clone)]
pub struct Client<H> {
	http: H,
	options: ClientOptions,
}

#[cfg(feature = "reqwest")]
impl Client<reqwest::Client> {
	/// Creates a client backed by a fresh [`reqwest::Client`].
	pub fn new(options: ClientOptions) -> Self {
		Self::with_http_client(reqwest::Client::new(), options)
	}
}

#[cfg(feature = "reqwest")]
impl Default for Client<reqwest::Client> {
	fn default() -> Self {
		Self::new(ClientOptions::default())
	}
}

impl<H> Client<H> {
	pub fn with_http_client(http: H, options: ClientOptions) -> Self {
		Self { http, options }
	}

	pub fn options(&self) -> &ClientOptions {
		&self.options
	}

	pub fn http_client(&self) -> &H {
		&self.http
	}
}

impl<H: HttpClient> Client<H> {
	/// Makes a GET request and deserializes the response JSON.
	pub async fn get<T>(&self, path: &str, headers: &HeaderMap) -> Result<T, ClientError>
	where
		T: DeserializeOwned,
	{
		let response = self
			.dispatch::<NoContent, _>(Method::GET, path, headers, &())
			.await?;
		self.decode_json(&response)
	}

	/// Makes a GET request and deserializes the response JSON array.
	///
	/// The whole body is received before decoding starts.
	pub async fn get_array<T>(&self, path: &str, headers: &HeaderMap) -> Result<Vec<T>, ClientError>
	where
		T: DeserializeOwned,
	{
		let response = self
			.dispatch::<NoContent, _>(Method::GET, path, headers, &())
			.await?;
		self.decode_json(&response)
	}

	/// Makes a POST request with a JSON body and deserializes the response
	/// JSON.
	pub async fn post<S, T>(&self, path: &str, body: &S, headers: &HeaderMap) -> Result<T, ClientError>
	where
		S: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let response = self
			.dispatch::<Json, _>(Method::POST, path, headers, body)
			.await?;
		self.decode_json(&response)
	}

	/// Makes a POST request with form data and deserializes the response JSON.
	///
	/// The body is built by [`encode_form_pairs`]: pairs are joined in
	/// iteration order and are **not** percent-encoded. See
	/// [`post_form`](Self::post_form) for the escaping variant.
	pub async fn post_form_url_encoded<T, I, K, V>(
		&self,
		path: &str,
		form_data: I,
		headers: &HeaderMap,
	) -> Result<T, ClientError>
	where
		T: DeserializeOwned,
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let body = encode_form_pairs(form_data).into_bytes();
		let response = self
			.send_raw(
				Method::POST,
				path,
				headers,
				Some(APPLICATION_X_WWW_FORM_URLENCODED),
				body,
			)
			.await?;
		self.decode_json(&response)
	}

	/// Makes a POST request with a percent-encoded form body and deserializes
	/// the response JSON.
	pub async fn post_form<S, T>(
		&self,
		path: &str,
		body: &S,
		headers: &HeaderMap,
	) -> Result<T, ClientError>
	where
		S: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let response = self
			.dispatch::<WwwFormUrlEncoded, _>(Method::POST, path, headers, body)
			.await?;
		self.decode_json(&response)
	}

	/// Makes a PUT request with a JSON body and deserializes the response JSON.
	pub async fn put<S, T>(&self, path: &str, body: &S, headers: &HeaderMap) -> Result<T, ClientError>
	where
		S: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let response = self
			.dispatch::<Json, _>(Method::PUT, path, headers, body)
			.await?;
		self.decode_json(&response)
	}

	/// Makes a DELETE request and returns the response body as text.
	///
	/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
	pub async fn delete(&self, path: &str, headers: &HeaderMap) -> Result<String, ClientError> {
		let response = self
			.dispatch::<NoContent, _>(Method::DELETE, path, headers, &())
			.await?;
		Ok(String::from_utf8_lossy(response.body()).into_owned())
	}

	async fn dispatch<C, S>(
		&self,
		method: Method,
		path: &str,
		headers: &HeaderMap,
		body: &S,
	) -> Result<http::Response<Vec<u8>>, ClientError>
	where
		C: ContentType,
		S: Serialize + ?Sized,
	{
		let body = C::encode(body).inspect_err(|e| self.log_error(e))?;
		self.send_raw(method, path, headers, C::VALUE, body).await
	}

	async fn send_raw(
		&self,
		method: Method,
		path: &str,
		headers: &HeaderMap,
		content_type: Option<HeaderValue>,
		body: Vec<u8>,
	) -> Result<http::Response<Vec<u8>>, ClientError> {
		let request = self
			.build_request(method, path, headers, content_type, body)
			.inspect_err(|e| self.log_error(e))?;

		if self.options.log_enabled() {
			log::debug!(target: self.options.log_target(), "{} {}", request.method(), request.uri());
			log::trace!(target: self.options.log_target(), "HTTP request: {request:?}");
		}

		let response = self
			.http
			.send(request)
			.await
			.inspect_err(|e| self.log_error(e))?;

		if self.options.log_enabled() {
			log::debug!(target: self.options.log_target(), "HTTP response status: {}", response.status());
			log::trace!(target: self.options.log_target(), "HTTP response: {response:?}");
		}

		if !response.status().is_success() {
			let status = response.status();
			let error = ClientError::server(status, response.into_body());
			self.log_error(&error);
			return Err(error);
		}

		Ok(response)
	}

	fn build_request(
		&self,
		method: Method,
		path: &str,
		headers: &HeaderMap,
		content_type: Option<HeaderValue>,
		body: Vec<u8>,
	) -> Result<http::Request<Vec<u8>>, ClientError> {
		let mut merged = self.options.merge_headers(headers);

		if let Some(content_type) = content_type {
			merged.entry(header::CONTENT_TYPE).or_insert(content_type);
		}

		let mut request = http::Request::builder()
			.method(method)
			.uri(self.options.url_for(path))
			.body(body)
			.map_err(ClientError::request)?;

		*request.headers_mut() = merged;

		Ok(request)
	}

	fn decode_json<T: DeserializeOwned>(
		&self,
		response: &http::Response<Vec<u8>>,
	) -> Result<T, ClientError> {
		serde_json::from_slice(response.body())
			.map_err(ClientError::decode)
			.inspect_err(|e| self.log_error(e))
	}

	fn log_error(&self, error: &ClientError) {
		if self.options.log_enabled() {
			log::error!(target: self.options.log_target(), "{error}");
		}
	}
}
