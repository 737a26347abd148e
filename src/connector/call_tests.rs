//! Tests for `ApiConnector` and status classification.

use super::{
    ApiConnector, ApiError, ApiResponse, CallOptions, DEFAULT_USER_AGENT, ErrorBody, Query, classify,
};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
use std::sync::Mutex;

const API: &str = "https://api.example.com/v1/invoices";

/// Mock HTTP client returning one fixed result and recording the request.
#[derive(Debug)]
struct MockClient {
    result: Mutex<Option<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(result: Result<HttpResponse, HttpError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn status(status: u16, body: &str) -> Self {
        Self::new(Ok(response(status, body)))
    }

    fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.result
            .lock()
            .unwrap()
            .take()
            .expect("mock client called more than once")
    }
}

fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}

mod request_building {
    use super::*;

    #[tokio::test]
    async fn sets_json_content_type_and_user_agent() {
        let api = ApiConnector::new(MockClient::status(200, "{}"));

        api.get(API, None).await.unwrap();

        let request = api.client().last_request();
        assert_eq!(request.method, http::Method::GET);
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            request.headers.get(http::header::USER_AGENT).unwrap(),
            DEFAULT_USER_AGENT
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn appends_query_string() {
        let api = ApiConnector::new(MockClient::status(200, "[]"));
        let query = Query::new().with("customer_id", 28390).with("status", "open");

        api.get(API, Some(&query)).await.unwrap();

        assert_eq!(
            api.client().last_request().url.as_str(),
            "https://api.example.com/v1/invoices?customer_id=28390&status=open"
        );
    }

    #[tokio::test]
    async fn empty_query_adds_no_question_mark() {
        let api = ApiConnector::new(MockClient::status(200, "[]"));

        api.get(API, Some(&Query::new())).await.unwrap();

        assert_eq!(api.client().last_request().url.as_str(), API);
    }

    #[tokio::test]
    async fn payload_is_json_encoded() {
        let api = ApiConnector::new(MockClient::status(201, r#"{"id":9}"#));

        api.post(API, &serde_json::json!({"amount": 107.8}))
            .await
            .unwrap();

        let request = api.client().last_request();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.body_text(), Some(r#"{"amount":107.8}"#));
    }

    #[tokio::test]
    async fn option_headers_are_sent_but_cannot_override_content_type() {
        let api = ApiConnector::new(MockClient::status(200, "{}"));
        let options = CallOptions::new()
            .with_header(
                http::header::AUTHORIZATION,
                http::HeaderValue::from_static("Bearer abc"),
            )
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("text/plain"),
            );

        api.call(http::Method::GET, API, None, None, Some(&options))
            .await
            .unwrap();

        let request = api.client().last_request();
        assert_eq!(
            request.headers.get(http::header::AUTHORIZATION).unwrap(),
            "Bearer abc"
        );
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn custom_user_agent_is_used() {
        let api = ApiConnector::new(MockClient::status(200, "{}"))
            .with_user_agent(http::HeaderValue::from_static("billing-sync/2.0"));

        api.delete(API, None).await.unwrap();

        let request = api.client().last_request();
        assert_eq!(request.method, http::Method::DELETE);
        assert_eq!(
            request.headers.get(http::header::USER_AGENT).unwrap(),
            "billing-sync/2.0"
        );
    }

    #[tokio::test]
    async fn invalid_url_is_a_transport_error_without_request() {
        let api = ApiConnector::new(MockClient::status(200, "{}"));

        let err = api.get("not a url", None).await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(HttpError::InvalidUrl(_))));
        assert_eq!(api.client().calls(), 0);
    }
}

mod outcomes {
    use super::*;

    #[tokio::test]
    async fn success_returns_parsed_body() {
        let api = ApiConnector::new(MockClient::status(200, r#"{"x":1}"#));

        let result = api.get(API, None).await.unwrap();

        assert_eq!(result, ApiResponse::Success(serde_json::json!({"x": 1})));
    }

    #[tokio::test]
    async fn unauthorized_raises_auth_error_with_body() {
        let api = ApiConnector::new(MockClient::status(401, r#"{"error":"bad token"}"#));

        let err = api.get(API, None).await.unwrap_err();

        assert!(err.is_auth());
        assert!(err.to_string().contains(r#"{"error":"bad token"}"#));
        assert_eq!(err.status(), Some(http::StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn forbidden_raises_auth_error() {
        let api = ApiConnector::new(MockClient::status(403, r#"{"error":"scope"}"#));

        let err = api.put(API, &serde_json::json!({})).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Auth {
                status: http::StatusCode::FORBIDDEN,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn not_found_is_a_soft_result() {
        let api = ApiConnector::new(MockClient::status(404, r#"{"error":"missing"}"#));

        let result = api.get(API, None).await.unwrap();

        assert_eq!(
            result,
            ApiResponse::Failure {
                status: http::StatusCode::NOT_FOUND,
                body: ErrorBody::Json(serde_json::json!({"error": "missing"})),
            }
        );
    }

    #[tokio::test]
    async fn server_error_is_a_soft_result() {
        let api = ApiConnector::new(MockClient::status(503, r#"{"retry":true}"#));

        let result = api.get(API, None).await.unwrap();

        assert!(!result.is_success());
        assert_eq!(result.json(), Some(&serde_json::json!({"retry": true})));
    }

    #[tokio::test]
    async fn html_error_page_falls_back_to_text() {
        let api = ApiConnector::new(MockClient::status(502, "<html>Bad Gateway</html>"));

        let result = api.get(API, None).await.unwrap();

        assert_eq!(
            result,
            ApiResponse::Failure {
                status: http::StatusCode::BAD_GATEWAY,
                body: ErrorBody::Text("<html>Bad Gateway</html>".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let api = ApiConnector::new(MockClient::new(Err(HttpError::Timeout)));

        let err = api.get(API, None).await.unwrap_err();

        assert!(err.is_transport());
        assert!(matches!(err, ApiError::Transport(HttpError::Timeout)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn non_json_success_body_is_a_decode_error() {
        let api = ApiConnector::new(MockClient::status(200, "OK"));

        let err = api.get(API, None).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.is_transport());
    }
}

mod classification {
    use super::*;

    #[test]
    fn no_content_is_null() {
        let result = classify(&response(204, "")).unwrap();

        assert_eq!(result, ApiResponse::Success(serde_json::Value::Null));
    }

    #[test]
    fn redirect_is_unclassified() {
        let err = classify(&response(302, "")).unwrap_err();

        assert!(matches!(
            err,
            ApiError::Unclassified {
                status: http::StatusCode::FOUND,
                ..
            }
        ));
    }

    #[test]
    fn informational_is_unclassified() {
        assert!(matches!(
            classify(&response(101, "")),
            Err(ApiError::Unclassified { .. })
        ));
    }

    #[test]
    fn bad_request_is_soft() {
        assert!(matches!(
            classify(&response(400, r#"{"field":"amount"}"#)),
            Ok(ApiResponse::Failure { .. })
        ));
    }

    #[test]
    fn into_result_folds_soft_failure() {
        let soft = classify(&response(422, r#"{"e":1}"#)).unwrap();

        let err = soft.into_result().unwrap_err();

        assert!(matches!(err, ApiError::Status { .. }));
        assert!(err.to_string().contains(r#"{"e":1}"#));
    }

    #[test]
    fn into_result_passes_success_through() {
        let ok = classify(&response(200, "[1,2]")).unwrap();

        assert_eq!(ok.into_result().unwrap(), serde_json::json!([1, 2]));
    }

    #[test]
    fn empty_error_body_is_empty_text() {
        let body = ErrorBody::from_response(&response(500, ""));

        assert_eq!(body, ErrorBody::Text(String::new()));
        assert!(body.as_json().is_none());
    }
}

#[test]
fn connector_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConnector<crate::transport::ReqwestClient>>();
    assert_send_sync::<ApiError>();
}
