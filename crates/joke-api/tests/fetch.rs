use comedy_joke_api::{JokeApiConfig, JokeApiError, JokeClient, JokeSource};
use mockito::Server;
use pretty_assertions::assert_eq;
use std::time::Duration;

const FALLBACK: &str = "Why did the programmer quit his job? He didn't get arrays.";

fn client_for(server: &Server) -> JokeClient {
    let config = JokeApiConfig::default()
        .with_url(format!("{}/joke/Programming", server.url()))
        .with_timeout(Duration::from_secs(5));
    JokeClient::new(config).expect("client")
}

#[tokio::test]
async fn fetches_single_joke() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/joke/Programming")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "error": false,
                "category": "Programming",
                "type": "single",
                "joke": "Why do programmers prefer dark mode? Light attracts bugs.",
                "safe": true,
                "id": 42,
                "lang": "en"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let joke = client_for(&server).fetch_joke().await.expect("joke");
    assert_eq!(joke, "Why do programmers prefer dark mode? Light attracts bugs.");
    mock.assert_async().await;
}

#[tokio::test]
async fn joins_two_part_joke() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/joke/Programming")
        .with_status(200)
        .with_body(
            r#"{"error":false,"type":"twopart","setup":"How many programmers does it take to change a light bulb?","delivery":"None, that's a hardware problem."}"#,
        )
        .create_async()
        .await;

    let joke = client_for(&server).fetch_joke().await.expect("joke");
    assert_eq!(
        joke,
        "How many programmers does it take to change a light bulb? None, that's a hardware problem."
    );
}

#[tokio::test]
async fn server_error_is_status_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/joke/Programming")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let err = client_for(&server).fetch_joke().await.unwrap_err();
    assert!(matches!(err, JokeApiError::Status(500)), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/joke/Programming")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client_for(&server).fetch_joke().await.unwrap_err();
    assert!(matches!(err, JokeApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn api_error_flag_is_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/joke/Programming")
        .with_status(200)
        .with_body(r#"{"error":true,"internalError":false,"code":106,"message":"No matching joke found"}"#)
        .create_async()
        .await;

    let err = client_for(&server).fetch_joke().await.unwrap_err();
    assert!(matches!(err, JokeApiError::Api(_)), "got {err:?}");
}

#[tokio::test]
async fn every_failure_degrades_to_fallback() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/joke/Programming")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let joke = client_for(&server).fetch_joke_or(FALLBACK).await;
    assert_eq!(joke, FALLBACK);
    // One attempt, no retries.
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let config = JokeApiConfig::default()
        .with_url("http://127.0.0.1:1/joke")
        .with_timeout(Duration::from_secs(2));
    let client = JokeClient::new(config).expect("client");

    let err = client.fetch_joke().await.unwrap_err();
    assert!(matches!(err, JokeApiError::Transport(_)), "got {err:?}");
    assert_eq!(client.fetch_joke_or(FALLBACK).await, FALLBACK);
}

#[tokio::test]
async fn silent_server_times_out_and_degrades_to_fallback() {
    // Accepts connections but never writes a response.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let accept_loop = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = JokeApiConfig::default()
        .with_url(format!("http://{addr}/joke"))
        .with_timeout(Duration::from_millis(300));
    let client = JokeClient::new(config).expect("client");

    let err = client.fetch_joke().await.unwrap_err();
    assert!(matches!(err, JokeApiError::Transport(_)), "got {err:?}");
    assert!(err.is_timeout(), "expected timeout, got {err}");

    assert_eq!(client.fetch_joke_or(FALLBACK).await, FALLBACK);

    accept_loop.abort();
}
