//! Tests for HTTP request/response types.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn webhook_url() -> url::Url {
    url::Url::parse("https://example.webhook.office.com/webhookb2/abc").unwrap()
}

fn response(status: http::StatusCode, body: &[u8]) -> HttpResponse {
    HttpResponse::new(status, http::HeaderMap::new(), body.to_vec())
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::PUT, webhook_url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, webhook_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_creates_post_request() {
        let req = HttpRequest::post(webhook_url());

        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn with_header_replaces_previous_value() {
        let req = HttpRequest::post(webhook_url())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(
            req.headers
                .get_all(http::header::CONTENT_TYPE)
                .iter()
                .count(),
            1
        );
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn body_text_reads_utf8_body() {
        let req = HttpRequest::post(webhook_url()).with_body(br#"{"a":1}"#.to_vec());

        assert_eq!(req.body_text(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn body_text_is_none_without_body() {
        let req = HttpRequest::post(webhook_url());

        assert!(req.body_text().is_none());
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_only_for_2xx() {
        assert!(response(http::StatusCode::OK, b"").is_success());
        assert!(response(http::StatusCode::NO_CONTENT, b"").is_success());
        assert!(!response(http::StatusCode::FOUND, b"").is_success());
        assert!(!response(http::StatusCode::UNAUTHORIZED, b"").is_success());
        assert!(!response(http::StatusCode::BAD_GATEWAY, b"").is_success());
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = response(http::StatusCode::OK, &[0xFF, 0xFE]);

        assert!(resp.body_text().is_none());
    }

    #[test]
    fn text_replaces_invalid_utf8() {
        let resp = response(http::StatusCode::OK, &[b'o', b'k', 0xFF]);

        assert_eq!(resp.text(), "ok\u{FFFD}");
    }

    #[test]
    fn json_parses_object_body() {
        let resp = response(http::StatusCode::OK, br#"{"x":1}"#);

        assert_eq!(resp.json().unwrap(), serde_json::json!({"x": 1}));
    }

    #[test]
    fn json_of_empty_body_is_null() {
        let resp = response(http::StatusCode::NO_CONTENT, b"  \n");

        assert_eq!(resp.json().unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn json_rejects_html_body() {
        let resp = response(http::StatusCode::OK, b"<html>oops</html>");

        assert!(resp.json().is_err());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let source = std::io::Error::other("network unavailable");
        let error = HttpError::Connection(Box::new(source));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("network unavailable")
        );
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn invalid_url_displays_reason() {
        let error = HttpError::InvalidUrl("missing scheme".to_string());

        assert!(error.to_string().contains("missing scheme"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        calls: AtomicUsize,
    }

    impl HttpClient for CountingClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(response(http::StatusCode::ACCEPTED, b"1"))
        }
    }

    #[tokio::test]
    async fn mock_client_returns_configured_response() {
        let client = CountingClient {
            calls: AtomicUsize::new(0),
        };

        let result = client
            .request(HttpRequest::post(webhook_url()))
            .await
            .unwrap();

        assert_eq!(result.status, http::StatusCode::ACCEPTED);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }
}
