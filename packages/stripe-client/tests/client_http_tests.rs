//! Tests for the client's HTTP requests and responses, run against a local one-shot server.

use stripe_client::{CreatePrice, CreateProduct, StripeClient, StripeError, API_VERSION};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accept one connection, answer it with `status_line` and `body`, and hand
/// back the raw request text.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        request
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

#[tokio::test]
async fn create_product_sends_credentials_version_and_form() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"id":"prod_1","object":"product","name":"Kyoto in Autumn","active":true}"#,
    )
    .await;
    let client = StripeClient::new("sk_test_local").with_base_url(base_url);

    let product = client
        .create_product(&CreateProduct::new("Kyoto in Autumn"))
        .await
        .unwrap();

    assert_eq!(product.id, "prod_1");
    assert!(product.active);

    let request = server.await.unwrap();
    let lowered = request.to_lowercase();
    assert!(request.starts_with("POST /v1/products HTTP/1.1"));
    assert!(lowered.contains("authorization: bearer sk_test_local"));
    assert!(lowered.contains(&format!("stripe-version: {}", API_VERSION)));
    assert!(lowered.contains("content-type: application/x-www-form-urlencoded"));
    assert!(request.ends_with("name=Kyoto+in+Autumn"));
}

#[tokio::test]
async fn error_status_is_decoded_from_the_envelope() {
    let (base_url, server) = serve_once(
        "400 Bad Request",
        r#"{"error":{"type":"invalid_request_error","code":"parameter_missing","message":"Missing required param: currency."}}"#,
    )
    .await;
    let client = StripeClient::new("sk_test_local").with_base_url(base_url);

    let err = client
        .create_price(&CreatePrice {
            product: "prod_1".into(),
            unit_amount: 1999,
            currency: String::new(),
        })
        .await
        .unwrap_err();

    match err {
        StripeError::Api {
            status,
            error_type,
            code,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(error_type.as_deref(), Some("invalid_request_error"));
            assert_eq!(code.as_deref(), Some("parameter_missing"));
            assert_eq!(message, "Missing required param: currency.");
        }
        other => panic!("expected API error, got {:?}", other),
    }

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /v1/prices HTTP/1.1"));
}

#[tokio::test]
async fn unreadable_success_body_is_a_parse_error() {
    let (base_url, server) = serve_once("200 OK", "<html>gateway</html>").await;
    let client = StripeClient::new("sk_test_local").with_base_url(base_url);

    let err = client
        .create_product(&CreateProduct::new("Kyoto in Autumn"))
        .await
        .unwrap_err();

    match err {
        StripeError::Parse(message) => assert!(message.contains("path: products")),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(!server.await.unwrap().is_empty());
}
