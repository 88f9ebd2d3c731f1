use std::{fmt, str::FromStr};

use http::HeaderValue;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::ClientError;

/// Credential exchange flow used at the token endpoint.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4>
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	AuthorizationCode,
	RefreshToken,
	Password,
	ClientCredentials,

	/// Device Authorization Grant.
	///
	/// See: <https://datatracker.ietf.org/doc/html/rfc8628#section-3.4>
	#[serde(rename = "urn:ietf:params:oauth:grant-type:device_code")]
	DeviceCode,
}

impl GrantType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::AuthorizationCode => "authorization_code",
			Self::RefreshToken => "refresh_token",
			Self::Password => "password",
			Self::ClientCredentials => "client_credentials",
			Self::DeviceCode => "urn:ietf:params:oauth:grant-type:device_code",
		}
	}
}

impl fmt::Display for GrantType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Token request sent to the token endpoint.
///
/// This is a superset of the parameters of every [`GrantType`]; which fields
/// are meaningful depends on the grant (`code` and `redirect_uri` for the
/// authorization code grant, `username` and `password` for the password
/// grant, ...). Absent fields are left out when serialized.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.3>
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRequest {
	pub grant_type: GrantType,
	pub code: Option<String>,
	pub refresh_token: Option<String>,
	pub username: Option<String>,
	pub password: Option<String>,
	pub client_id: Option<String>,
	pub client_secret: Option<String>,
	pub redirect_uri: Option<String>,
	pub device_code: Option<String>,
	pub scope: Option<String>,
}

impl TokenRequest {
	/// Creates a request for the given grant with every other field absent.
	pub fn new(grant_type: GrantType) -> Self {
		Self {
			grant_type,
			code: None,
			refresh_token: None,
			username: None,
			password: None,
			client_id: None,
			client_secret: None,
			redirect_uri: None,
			device_code: None,
			scope: None,
		}
	}

	/// Exchanges an authorization code.
	///
	/// `redirect_uri` must be identical to the one sent in the
	/// [`AuthorizeRequest`](super::AuthorizeRequest).
	pub fn authorization_code(code: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
		Self {
			code: Some(code.into()),
			redirect_uri: Some(redirect_uri.into()),
			..Self::new(GrantType::AuthorizationCode)
		}
	}

	pub fn refresh_token(refresh_token: impl Into<String>) -> Self {
		Self {
			refresh_token: Some(refresh_token.into()),
			..Self::new(GrantType::RefreshToken)
		}
	}

	/// Resource Owner Password Credentials grant.
	pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: Some(username.into()),
			password: Some(password.into()),
			..Self::new(GrantType::Password)
		}
	}

	pub fn client_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self::new(GrantType::ClientCredentials).with_client(client_id, client_secret)
	}

	pub fn device_code(device_code: impl Into<String>) -> Self {
		Self {
			device_code: Some(device_code.into()),
			..Self::new(GrantType::DeviceCode)
		}
	}

	/// Authenticates the client in the request body.
	pub fn with_client(self, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: Some(client_id.into()),
			client_secret: Some(client_secret.into()),
			..self
		}
	}

	/// Identifies a public client, which has no secret.
	pub fn with_client_id(self, client_id: impl Into<String>) -> Self {
		Self {
			client_id: Some(client_id.into()),
			..self
		}
	}

	pub fn with_scope(self, scope: impl Into<String>) -> Self {
		Self {
			scope: Some(scope.into()),
			..self
		}
	}
}

/// Type of an issued access token.
///
/// Parsed case-insensitively, since servers commonly send `bearer`.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-7.1>
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenType {
	Bearer,
	Mac,
}

pub const TOKEN_TYPE_BEARER: &str = "Bearer";
pub const TOKEN_TYPE_MAC: &str = "MAC";

impl TokenType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Bearer => TOKEN_TYPE_BEARER,
			Self::Mac => TOKEN_TYPE_MAC,
		}
	}
}

impl fmt::Display for TokenType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, thiserror::Error)]
#[error("invalid token type")]
pub struct InvalidTokenType;

impl FromStr for TokenType {
	type Err = InvalidTokenType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case(TOKEN_TYPE_BEARER) {
			Ok(Self::Bearer)
		} else if s.eq_ignore_ascii_case(TOKEN_TYPE_MAC) {
			Ok(Self::Mac)
		} else {
			Err(InvalidTokenType)
		}
	}
}

impl Serialize for TokenType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		self.as_str().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for TokenType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		String::deserialize(deserializer)?
			.parse()
			.map_err(serde::de::Error::custom)
	}
}

/// Successful token endpoint response.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-5.1>
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenResponse {
	/// The type of the token issued.
	pub token_type: TokenType,

	/// Access token issued by the authorization server.
	pub access_token: String,

	/// Token used to obtain new access tokens with the
	/// [`GrantType::RefreshToken`] grant.
	pub refresh_token: Option<String>,

	/// Scope of the access token.
	///
	/// Optional if identical to the scope requested by the client.
	pub scope: Option<String>,

	/// Lifetime in seconds of the access token.
	///
	/// For example, the value "3600" denotes that the access token will expire
	/// in one hour from the time the response was generated.
	pub expires_in: Option<u64>,
}

impl TokenResponse {
	pub fn new(token_type: TokenType, access_token: impl Into<String>) -> Self {
		Self {
			token_type,
			access_token: access_token.into(),
			refresh_token: None,
			scope: None,
			expires_in: None,
		}
	}

	/// `Authorization` header value for requests made with this token, e.g.
	/// `Bearer <access_token>`.
	pub fn authorization_header(&self) -> Result<HeaderValue, ClientError> {
		HeaderValue::try_from(format!("{} {}", self.token_type, self.access_token))
			.map_err(ClientError::encode)
	}

	/// Builds the request that trades the refresh token for a new access
	/// token, if one was issued.
	pub fn refresh_request(&self) -> Option<TokenRequest> {
		self.refresh_token.as_deref().map(TokenRequest::refresh_token)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn password_request_omits_unused_fields() {
		let request = TokenRequest::password("u", "p");

		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"grant_type": "password",
				"username": "u",
				"password": "p",
			})
		);
	}

	#[test]
	fn client_credentials_request() {
		let request = TokenRequest::client_credentials("id", "secret").with_scope("servers:read");

		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"grant_type": "client_credentials",
				"client_id": "id",
				"client_secret": "secret",
				"scope": "servers:read",
			})
		);
	}

	#[test]
	fn public_client_sends_only_its_id() {
		let request = TokenRequest::refresh_token("r1").with_client_id("id");

		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"grant_type": "refresh_token",
				"refresh_token": "r1",
				"client_id": "id",
			})
		);
	}

	#[test]
	fn authorization_code_request_form() {
		let request = TokenRequest::authorization_code("abc", "https://app.example/cb")
			.with_client("client", "secret");

		assert_eq!(
			serde_html_form::to_string(&request).unwrap(),
			"grant_type=authorization_code&code=abc&client_id=client&client_secret=secret&redirect_uri=https%3A%2F%2Fapp.example%2Fcb"
		);
	}

	#[test]
	fn grant_type_wire_names() {
		for grant_type in [
			GrantType::AuthorizationCode,
			GrantType::RefreshToken,
			GrantType::Password,
			GrantType::ClientCredentials,
			GrantType::DeviceCode,
		] {
			assert_eq!(
				serde_json::to_value(grant_type).unwrap(),
				json!(grant_type.as_str())
			);
		}

		assert_eq!(
			TokenRequest::device_code("d").grant_type.to_string(),
			"urn:ietf:params:oauth:grant-type:device_code"
		);
	}

	#[test]
	fn token_type_is_case_insensitive() {
		assert_eq!("bearer".parse::<TokenType>().unwrap(), TokenType::Bearer);
		assert_eq!("BEARER".parse::<TokenType>().unwrap(), TokenType::Bearer);
		assert_eq!("mac".parse::<TokenType>().unwrap(), TokenType::Mac);
		assert!("basic".parse::<TokenType>().is_err());
		assert_eq!(serde_json::to_value(TokenType::Bearer).unwrap(), json!("Bearer"));
	}

	#[test]
	fn decode_token_response() {
		let response: TokenResponse = serde_json::from_value(json!({
			"access_token": "2YotnFZFEjr1zCsicMWpAA",
			"token_type": "bearer",
			"expires_in": 3600,
			"refresh_token": "tGzv3JOkF0XG5Qx2TlKWIA",
			"example_parameter": "example_value",
		}))
		.unwrap();

		assert_eq!(response.token_type, TokenType::Bearer);
		assert_eq!(response.expires_in, Some(3600));
		assert_eq!(response.scope, None);
		assert_eq!(
			response.authorization_header().unwrap(),
			"Bearer 2YotnFZFEjr1zCsicMWpAA"
		);
		assert_eq!(
			response.refresh_request(),
			Some(TokenRequest::refresh_token("tGzv3JOkF0XG5Qx2TlKWIA"))
		);
	}

	#[test]
	fn error_body_is_not_a_token_response() {
		let result = serde_json::from_value::<TokenResponse>(json!({ "error": "invalid_grant" }));
		assert!(result.is_err());
	}

	#[test]
	fn equality_is_structural() {
		let a = TokenResponse::new(TokenType::Bearer, "t");
		let b = TokenResponse::new(TokenType::Bearer, "t");
		assert_eq!(a, b);
		assert_ne!(a, TokenResponse::new(TokenType::Mac, "t"));
	}
}
