use crate::client::ClientError;

#[cfg(feature = "reqwest")]
mod reqwest;

/// Transport handle performing the actual network I/O.
///
/// A single handle is created with the [`Client`](crate::Client) and shared
/// by every call made through it.
pub trait HttpClient {
	#[allow(async_fn_in_trait)]
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, ClientError>;
}

/// Lets several [`Client`](crate::Client)s borrow one transport handle.
impl<H: HttpClient> HttpClient for &H {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, ClientError> {
		H::send(self, request).await
	}
}
