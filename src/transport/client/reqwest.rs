use crate::{client::ClientError, transport::HttpClient};

impl HttpClient for reqwest::Client {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, ClientError> {
		let request: reqwest::Request = request.try_into().map_err(ClientError::request)?;

		let response = self.execute(request).await.map_err(ClientError::request)?;

		let mut builder = http::Response::builder().status(response.status());

		#[cfg(not(target_arch = "wasm32"))]
		{
			builder = builder.version(response.version());
		}

		for (name, value) in response.headers().iter() {
			builder = builder.header(name, value);
		}

		builder
			.body(
				response
					.bytes()
					.await
					.map_err(ClientError::response)?
					.to_vec(),
			)
			.map_err(ClientError::response)
	}
}
