use axum::{
	Json, Router,
	body::Bytes,
	http::{HeaderMap, StatusCode, header},
	response::IntoResponse,
	routing::{get, post},
};
use mintaka::{
	Client, ClientOptions, ErrorKind,
	oauth2::{ErrorCode, ErrorResponse, TokenRequest, TokenResponse, TokenType},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Server {
	name: String,
	max_players: u32,
	whitelist: Vec<String>,
}

async fn echo(body: Bytes) -> impl IntoResponse {
	([(header::CONTENT_TYPE, "application/json")], body)
}

async fn servers() -> Json<Value> {
	Json(json!([
		{ "name": "lobby", "max_players": 20, "whitelist": [] },
		{ "name": "survival", "max_players": 50, "whitelist": ["steve"] },
	]))
}

async fn inspect(headers: HeaderMap, body: String) -> Json<Value> {
	let value_of = |name: &str| {
		headers
			.get(name)
			.and_then(|value| value.to_str().ok())
			.map(ToOwned::to_owned)
	};

	Json(json!({
		"body": body,
		"content_type": value_of(header::CONTENT_TYPE.as_str()),
		"api_key": value_of("x-api-key"),
	}))
}

async fn token(body: String) -> impl IntoResponse {
	if body.contains("password=hunter2") {
		(
			StatusCode::OK,
			Json(json!({ "token_type": "bearer", "access_token": "at", "expires_in": 60 })),
		)
	} else {
		(
			StatusCode::BAD_REQUEST,
			Json(json!({ "error": "invalid_grant" })),
		)
	}
}

async fn delete_server() -> &'static str {
	"deleted"
}

async fn serve() -> String {
	let app = Router::new()
		.route("/echo", post(echo).put(echo))
		.route("/servers", get(servers).delete(delete_server))
		.route("/empty", get(|| async { Json(json!([])) }))
		.route("/inspect", post(inspect))
		.route("/token", post(token));

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

	format!("http://{addr}")
}

fn client(base_url: String) -> Client<mintaka::reqwest::Client> {
	let options = ClientOptions::with_base_url(base_url)
		.header("x-api-key", "plugin")
		.unwrap();
	Client::new(options)
}

#[tokio::test]
async fn post_and_put_round_trip() {
	let client = client(serve().await);
	let server = Server {
		name: "lobby".to_owned(),
		max_players: 20,
		whitelist: vec!["alex".to_owned(), "steve".to_owned()],
	};

	let echoed: Server = client.post("/echo", &server, &HeaderMap::new()).await.unwrap();
	assert_eq!(echoed, server);

	let echoed: Server = client.put("/echo", &server, &HeaderMap::new()).await.unwrap();
	assert_eq!(echoed, server);
}

#[tokio::test]
async fn get_array_of_servers() {
	let client = client(serve().await);

	let servers: Vec<Server> = client.get_array("/servers", &HeaderMap::new()).await.unwrap();
	assert_eq!(servers.len(), 2);
	assert_eq!(servers[1].whitelist, ["steve"]);

	let servers: Vec<Server> = client.get_array("/empty", &HeaderMap::new()).await.unwrap();
	assert!(servers.is_empty());
}

#[tokio::test]
async fn delete_returns_text() {
	let client = client(serve().await);
	assert_eq!(
		client.delete("/servers", &HeaderMap::new()).await.unwrap(),
		"deleted"
	);
}

#[tokio::test]
async fn raw_form_and_default_headers_reach_the_server() {
	let client = client(serve().await);

	let seen: Value = client
		.post_form_url_encoded("/inspect", [("a", "1"), ("b", "2")], &HeaderMap::new())
		.await
		.unwrap();

	assert_eq!(seen["body"], "a=1&b=2");
	assert_eq!(seen["content_type"], "application/x-www-form-urlencoded");
	assert_eq!(seen["api_key"], "plugin");
}

#[tokio::test]
async fn token_exchange() {
	let client = client(serve().await);

	let token: TokenResponse = client
		.post_form(
			"/token",
			&TokenRequest::password("steve", "hunter2"),
			&HeaderMap::new(),
		)
		.await
		.unwrap();
	assert_eq!(token.token_type, TokenType::Bearer);
	assert_eq!(token.authorization_header().unwrap(), "Bearer at");

	let e = client
		.post_form::<_, TokenResponse>(
			"/token",
			&TokenRequest::password("steve", "wrong"),
			&HeaderMap::new(),
		)
		.await
		.unwrap_err();
	assert_eq!(e.kind(), ErrorKind::Transport);
	assert_eq!(e.status(), Some(StatusCode::BAD_REQUEST));
	assert_eq!(
		e.error_response(),
		Some(ErrorResponse::new(
			"invalid_grant".to_owned(),
			None,
			None
		))
	);
	assert_eq!(
		serde_json::from_value::<ErrorCode>(json!(e.error_response().unwrap().error)).unwrap(),
		ErrorCode::InvalidGrant
	);
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);

	let client = Client::new(ClientOptions::default());
	let e = client
		.get::<Value>(&format!("http://{addr}/servers"), &HeaderMap::new())
		.await
		.unwrap_err();
	assert_eq!(e.kind(), ErrorKind::Transport);

	let e = client
		.delete(&format!("http://{addr}/servers"), &HeaderMap::new())
		.await
		.unwrap_err();
	assert_eq!(e.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn relative_path_without_base_url_fails_to_send() {
	let client = Client::new(ClientOptions::default());
	let e = client
		.get::<Value>("/servers", &HeaderMap::new())
		.await
		.unwrap_err();
	assert_eq!(e.kind(), ErrorKind::Transport);
}
