//! HTTP client with authentication, per-attempt timeout and retry with backoff.

use log::{debug, warn};
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::retry::{AttemptOutcome, backoff, classify_response};
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError, DEFAULT_NETWORK_MESSAGE, ProofError, Result};
use crate::runtime::Runtime;

/// Query parameters; pairs with a `None` value are left out of the URL.
pub type Query = Vec<(String, Option<String>)>;

/// Optional parts of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub body: Option<Value>,
    pub query: Query,
}

/// Flattens a serializable parameter struct into query pairs.
///
/// `None` fields become absent pairs; strings are sent verbatim, other
/// scalars in their JSON form.
pub fn query_pairs<Q: Serialize + ?Sized>(params: &Q) -> Result<Query> {
    let value = serde_json::to_value(params)
        .map_err(|e| ProofError::decode(0, format!("Failed to encode query parameters: {}", e)))?;

    let Value::Object(map) = value else {
        return Ok(Vec::new());
    };

    Ok(map
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            };
            (key, value)
        })
        .collect())
}

/// Authenticated JSON client for the API.
///
/// Cloning is cheap; clones share the transport and runtime.
#[derive(Clone)]
pub struct HttpClient {
    base_url: Url,
    headers: HeaderMap,
    timeout: Duration,
    max_retries: u32,
    transport: Arc<dyn Transport>,
    runtime: Arc<dyn Runtime>,
}

impl HttpClient {
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        runtime: Arc<dyn Runtime>,
    ) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            base_url: config.parsed_base_url()?,
            headers: config.default_headers()?,
            timeout: config.timeout,
            max_retries: config.max_retries,
            transport,
            runtime,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn runtime(&self) -> &dyn Runtime {
        self.runtime.as_ref()
    }

    /// Joins the base URL and `path`, appending every query pair that has a value.
    pub fn build_url(&self, path: &str, query: &[(String, Option<String>)]) -> Url {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}{}", base_path, path));

        let mut defined = query
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v)))
            .peekable();
        if defined.peek().is_some() {
            url.query_pairs_mut().extend_pairs(defined);
        }

        url
    }

    /// Performs one logical request, retrying transient failures.
    #[tracing::instrument(skip(self, options))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let url = self.build_url(path, &options.query);
        let body = options
            .body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| ProofError::decode(0, format!("Failed to encode request body: {}", e)))?;

        let mut last_error: Option<anyhow::Error> = None;

        for attempt in 0..=self.max_retries {
            debug!(
                "{} {} (attempt {}/{})",
                method,
                url,
                attempt + 1,
                self.max_retries + 1
            );

            let request = HttpRequest {
                method: method.clone(),
                url: url.clone(),
                headers: self.headers.clone(),
                body: body.clone(),
            };

            match tokio::time::timeout(self.timeout, self.transport.send(request)).await {
                Ok(Ok(response)) => match classify_response(&response, attempt, self.max_retries) {
                    AttemptOutcome::Retry(delay) => {
                        warn!(
                            "{} {}: attempt {}/{} got status {}, retrying in {}ms...",
                            method,
                            path,
                            attempt + 1,
                            self.max_retries + 1,
                            response.status,
                            delay.as_millis()
                        );
                        self.runtime.sleep(delay).await;
                    }
                    AttemptOutcome::Complete => return complete(response),
                },
                Ok(Err(e)) => {
                    if attempt < self.max_retries {
                        let delay = backoff(attempt);
                        warn!(
                            "{} {}: attempt {}/{} failed ({:#}), retrying in {}ms...",
                            method,
                            path,
                            attempt + 1,
                            self.max_retries + 1,
                            e,
                            delay.as_millis()
                        );
                        self.runtime.sleep(delay).await;
                    } else {
                        debug!("{} {}: giving up after {:#}", method, path, e);
                    }
                    last_error = Some(e);
                }
                Err(_) => {
                    if attempt < self.max_retries {
                        let delay = backoff(attempt);
                        warn!(
                            "{} {}: attempt {}/{} timed out after {}ms, retrying in {}ms...",
                            method,
                            path,
                            attempt + 1,
                            self.max_retries + 1,
                            self.timeout.as_millis(),
                            delay.as_millis()
                        );
                        self.runtime.sleep(delay).await;
                    } else {
                        return Err(ProofError::timeout(format!(
                            "Request to {} {} timed out after {}ms",
                            method,
                            path,
                            self.timeout.as_millis()
                        )));
                    }
                }
            }
        }

        Err(ProofError::network(
            last_error
                .map(|e| format!("{:#}", e))
                .unwrap_or_else(|| DEFAULT_NETWORK_MESSAGE.to_string()),
        ))
    }

    /// GET without query parameters.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, RequestOptions::default())
            .await
    }

    /// GET with query parameters taken from a serializable struct.
    pub async fn get_with_query<T, Q>(&self, path: &str, params: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let options = RequestOptions {
            query: query_pairs(params)?,
            ..Default::default()
        };
        self.request(Method::GET, path, options).await
    }

    /// POST with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)
            .map_err(|e| ProofError::decode(0, format!("Failed to encode request body: {}", e)))?;
        let options = RequestOptions {
            body: Some(body),
            ..Default::default()
        };
        self.request(Method::POST, path, options).await
    }

    /// POST with no body at all.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::POST, path, RequestOptions::default())
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::DELETE, path, RequestOptions::default())
            .await
    }
}

/// Turns a final response into the typed result.
fn complete<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    let body: Value =
        serde_json::from_slice(&response.body).unwrap_or_else(|_| Value::Object(Map::new()));

    if !response.is_success() {
        return Err(ProofError::from_response(
            response.status,
            ApiError::from_body(&body),
        ));
    }

    serde_json::from_value(body).map_err(|e| {
        ProofError::decode(
            response.status,
            format!("Failed to parse JSON response from API: {}", e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::transport::MockTransport;
    use crate::runtime::{MockRuntime, TokioRuntime};
    use mockall::Sequence;
    use mockall::predicate::eq;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, RETRY_AFTER, USER_AGENT};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    const BASE_URL: &str = "https://api.example.test";

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Item {
        id: String,
        status: String,
    }

    fn config(max_retries: u32) -> ClientConfig {
        ClientConfig::new("pk_test_0123456789")
            .with_base_url(BASE_URL)
            .with_max_retries(max_retries)
    }

    fn client(transport: MockTransport, runtime: MockRuntime, max_retries: u32) -> HttpClient {
        HttpClient::new(&config(max_retries), Arc::new(transport), Arc::new(runtime)).unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse::new(status, body.as_bytes().to_vec())
    }

    fn rate_limited(retry_after: &'static str) -> HttpResponse {
        let mut response = response(429, "");
        response
            .headers
            .insert(RETRY_AFTER, HeaderValue::from_static(retry_after));
        response
    }

    /// Runtime whose sleeps return immediately.
    fn instant_runtime() -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime.expect_sleep().returning(|_| ());
        runtime.expect_now().returning(Instant::now);
        runtime
    }

    #[tokio::test]
    async fn test_request_success() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(response(200, r#"{"id":"ver_1","status":"pending"}"#)));

        let http = client(transport, MockRuntime::new(), 2);
        let item: Item = http.get("/api/v1/verifications/ver_1").await.unwrap();

        assert_eq!(
            item,
            Item {
                id: "ver_1".to_string(),
                status: "pending".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_request_sends_auth_and_client_headers() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req: &HttpRequest| {
                req.method == Method::GET
                    && req.url.as_str() == "https://api.example.test/api/v1/sessions/s1"
                    && req.headers.get(AUTHORIZATION).unwrap() == "Bearer pk_test_0123456789"
                    && req.headers.get(CONTENT_TYPE).unwrap() == "application/json"
                    && req
                        .headers
                        .get(USER_AGENT)
                        .unwrap()
                        .to_str()
                        .unwrap()
                        .starts_with("proof-sdk-rust/")
                    && req.body.is_none()
            })
            .times(1)
            .returning(|_| Ok(response(200, r#"{"id":"s1","status":"pending"}"#)));

        let http = client(transport, MockRuntime::new(), 0);
        let _: Item = http.get("/api/v1/sessions/s1").await.unwrap();
    }

    #[tokio::test]
    async fn test_post_serializes_body() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req: &HttpRequest| {
                let body: Value = serde_json::from_slice(req.body.as_ref().unwrap()).unwrap();
                req.method == Method::POST && body == json!({"code": "123456"})
            })
            .times(1)
            .returning(|_| Ok(response(200, r#"{"id":"ver_1","status":"verified"}"#)));

        let http = client(transport, MockRuntime::new(), 0);
        let item: Item = http
            .post("/api/v1/verifications/ver_1/submit", &json!({"code": "123456"}))
            .await
            .unwrap();
        assert_eq!(item.status, "verified");
    }

    #[tokio::test]
    async fn test_post_empty_and_delete_send_no_body() {
        let mut transport = MockTransport::new();
        let mut seq = Sequence::new();
        transport
            .expect_send()
            .withf(|req: &HttpRequest| req.method == Method::POST && req.body.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(200, r#"{"id":"a","status":"pending"}"#)));
        transport
            .expect_send()
            .withf(|req: &HttpRequest| req.method == Method::DELETE && req.body.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(200, r#"{"id":"a","status":"cancelled"}"#)));

        let http = client(transport, MockRuntime::new(), 0);
        let _: Item = http.post_empty("/api/v1/verifications/a/verify").await.unwrap();
        let item: Item = http.delete("/api/v1/verification-requests/a").await.unwrap();
        assert_eq!(item.status, "cancelled");
    }

    #[tokio::test]
    async fn test_retries_server_error_then_succeeds() {
        let mut transport = MockTransport::new();
        let mut seq = Sequence::new();
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(500, r#"{"error":{"code":"internal"}}"#)));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(200, r#"{"id":"ver_1","status":"verified"}"#)));

        let mut runtime = MockRuntime::new();
        runtime
            .expect_sleep()
            .with(eq(Duration::from_millis(1000)))
            .times(1)
            .returning(|_| ());

        let http = client(transport, runtime, 1);
        let item: Item = http.get("/api/v1/verifications/ver_1").await.unwrap();
        assert_eq!(item.status, "verified");
    }

    #[tokio::test]
    async fn test_rate_limit_honours_retry_after() {
        let mut transport = MockTransport::new();
        let mut seq = Sequence::new();
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(rate_limited("0")));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(200, r#"{"id":"ver_1","status":"pending"}"#)));

        let mut runtime = MockRuntime::new();
        runtime
            .expect_sleep()
            .with(eq(Duration::ZERO))
            .times(1)
            .returning(|_| ());

        let http = client(transport, runtime, 1);
        let item: Item = http.get("/api/v1/verifications/ver_1").await.unwrap();
        assert_eq!(item.id, "ver_1");
    }

    #[tokio::test]
    async fn test_rate_limit_exhausts_retries() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(2).returning(|_| {
            Ok(response(
                429,
                r#"{"error":{"code":"rate_limited","message":"Slow down","retryAfter":30}}"#,
            ))
        });

        let http = client(transport, instant_runtime(), 1);
        let err = http
            .get::<Item>("/api/v1/verifications")
            .await
            .unwrap_err();

        assert!(matches!(err, ProofError::RateLimit { .. }));
        assert_eq!(err.code(), "rate_limited");
        assert_eq!(err.message(), "Slow down");
        assert_eq!(err.retry_after(), Some(30));
    }

    #[test_log::test(tokio::test)]
    async fn test_server_errors_exhaust_retries_with_backoff() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(3)
            .returning(|_| Ok(response(503, "Service Unavailable")));

        let mut runtime = MockRuntime::new();
        let mut seq = Sequence::new();
        runtime
            .expect_sleep()
            .with(eq(Duration::from_millis(1000)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| ());
        runtime
            .expect_sleep()
            .with(eq(Duration::from_millis(2000)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| ());

        let http = client(transport, runtime, 2);
        let err = http
            .get::<Item>("/api/v1/verifications/ver_1")
            .await
            .unwrap_err();

        assert!(matches!(err, ProofError::Server { status: 503, .. }));
        assert_eq!(err.code(), "http_503");
        assert_eq!(err.message(), "Request failed with status 503");
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(response(
                404,
                r#"{"error":{"code":"not_found","message":"Verification not found","request_id":"req_42"}}"#,
            ))
        });

        let http = client(transport, MockRuntime::new(), 3);
        let err = http
            .get::<Item>("/api/v1/verifications/missing")
            .await
            .unwrap_err();

        assert!(matches!(err, ProofError::NotFound(_)));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.request_id(), Some("req_42"));
    }

    #[tokio::test]
    async fn test_malformed_error_body_uses_defaults() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(response(422, "<html>Unprocessable</html>")));

        let http = client(transport, MockRuntime::new(), 2);
        let err = http.get::<Item>("/x").await.unwrap_err();

        assert!(matches!(err, ProofError::Api { status: 422, .. }));
        assert_eq!(err.code(), "http_422");
        assert_eq!(err.message(), "Request failed with status 422");
    }

    #[tokio::test]
    async fn test_success_body_with_wrong_shape_is_decode_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(response(200, r#"{"unexpected":true}"#)));

        let http = client(transport, MockRuntime::new(), 2);
        let err = http.get::<Item>("/x").await.unwrap_err();

        assert!(matches!(err, ProofError::Decode { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_unparsable_success_body_is_empty_object() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(response(204, "")));

        let http = client(transport, MockRuntime::new(), 0);
        let value: Value = http.delete("/x").await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn test_network_failure_without_retries() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection refused")));

        let http = client(transport, MockRuntime::new(), 0);
        let err = http.get::<Item>("/x").await.unwrap_err();

        assert!(matches!(err, ProofError::Network(_)));
        assert_eq!(err.status_code(), 0);
        assert_eq!(err.code(), "network_error");
        assert!(err.message().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_network_failure_is_retried() {
        let mut transport = MockTransport::new();
        let mut seq = Sequence::new();
        transport
            .expect_send()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(anyhow::anyhow!("connection reset")));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(response(200, r#"{"id":"ver_1","status":"pending"}"#)));

        let http = client(transport, instant_runtime(), 2);
        let item: Item = http.get("/x").await.unwrap();
        assert_eq!(item.id, "ver_1");
    }

    #[test_log::test(tokio::test)]
    async fn test_network_failure_reports_last_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        let mut transport = MockTransport::new();
        transport.expect_send().times(3).returning(move |_| {
            let n = calls_clone.fetch_add(1, Ordering::SeqCst);
            Err(anyhow::anyhow!("failure #{}", n))
        });

        let http = client(transport, instant_runtime(), 2);
        let err = http.get::<Item>("/x").await.unwrap_err();

        assert!(matches!(err, ProofError::Network(_)));
        assert_eq!(err.message(), "failure #2");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    /// Transport that never answers within the client's deadline.
    struct SlowTransport {
        calls: AtomicUsize,
        delay: Duration,
    }

    #[async_trait::async_trait]
    impl Transport for SlowTransport {
        async fn send(&self, _request: HttpRequest) -> anyhow::Result<HttpResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(response(200, r#"{"id":"late","status":"pending"}"#))
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_attempt_timeout_exhausts_retries() {
        let transport = Arc::new(SlowTransport {
            calls: AtomicUsize::new(0),
            delay: Duration::from_secs(5),
        });
        let config = config(1).with_timeout(Duration::from_millis(20));
        let http = HttpClient::new(
            &config,
            Arc::clone(&transport) as Arc<dyn Transport>,
            Arc::new(instant_runtime()),
        )
        .unwrap();

        let err = http
            .get::<Item>("/api/v1/sessions/s1")
            .await
            .unwrap_err();

        assert!(matches!(err, ProofError::Timeout(_)));
        assert_eq!(err.code(), "timeout");
        assert_eq!(
            err.message(),
            "Request to GET /api/v1/sessions/s1 timed out after 20ms"
        );
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_attempt_timeout_then_success() {
        let calls = Arc::new(AtomicUsize::new(0));

        struct FlakyTransport {
            calls: Arc<AtomicUsize>,
        }

        #[async_trait::async_trait]
        impl Transport for FlakyTransport {
            async fn send(&self, _request: HttpRequest) -> anyhow::Result<HttpResponse> {
                if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                }
                Ok(response(200, r#"{"id":"ver_1","status":"pending"}"#))
            }
        }

        let config = config(1).with_timeout(Duration::from_millis(20));
        let http = HttpClient::new(
            &config,
            Arc::new(FlakyTransport {
                calls: Arc::clone(&calls),
            }),
            Arc::new(instant_runtime()),
        )
        .unwrap();

        let item: Item = http.get("/x").await.unwrap();
        assert_eq!(item.id, "ver_1");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_build_url_omits_undefined_query_values() {
        let http = client(MockTransport::new(), MockRuntime::new(), 0);
        let query = vec![
            ("status".to_string(), Some("pending".to_string())),
            ("type".to_string(), None),
            ("limit".to_string(), Some("10".to_string())),
        ];

        let url = http.build_url("/api/v1/verifications", &query);
        assert_eq!(
            url.as_str(),
            "https://api.example.test/api/v1/verifications?status=pending&limit=10"
        );
    }

    #[test]
    fn test_build_url_without_defined_query_has_no_question_mark() {
        let http = client(MockTransport::new(), MockRuntime::new(), 0);
        let query = vec![("page".to_string(), None)];

        let url = http.build_url("/api/v1/verifications", &query);
        assert_eq!(url.as_str(), "https://api.example.test/api/v1/verifications");
    }

    #[test]
    fn test_build_url_keeps_base_path() {
        let config = ClientConfig::new("k").with_base_url("https://proxy.example.test/proof/");
        let http = HttpClient::new(
            &config,
            Arc::new(MockTransport::new()),
            Arc::new(MockRuntime::new()),
        )
        .unwrap();

        assert_eq!(http.base_url(), "https://proxy.example.test/proof");
        assert_eq!(
            http.build_url("/api/v1/proofs/revoked", &[]).as_str(),
            "https://proxy.example.test/proof/api/v1/proofs/revoked"
        );
    }

    #[test]
    fn test_query_pairs_from_struct() {
        #[derive(Serialize)]
        struct Params {
            status: Option<&'static str>,
            channel: Option<&'static str>,
            limit: Option<u32>,
            partial: bool,
        }

        let pairs = query_pairs(&Params {
            status: Some("verified"),
            channel: None,
            limit: Some(25),
            partial: true,
        })
        .unwrap();

        assert!(pairs.contains(&("status".to_string(), Some("verified".to_string()))));
        assert!(pairs.contains(&("channel".to_string(), None)));
        assert!(pairs.contains(&("limit".to_string(), Some("25".to_string()))));
        assert!(pairs.contains(&("partial".to_string(), Some("true".to_string()))));
    }

    #[test]
    fn test_query_pairs_from_unit_is_empty() {
        assert!(query_pairs(&()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_with_query_against_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/verifications?limit=5&status=pending")
            .match_header("authorization", "Bearer pk_test_0123456789")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"ver_1","status":"pending"}"#)
            .create_async()
            .await;

        let config = ClientConfig::new("pk_test_0123456789")
            .with_base_url(server.url())
            .with_max_retries(0);
        let http = HttpClient::new(
            &config,
            Arc::new(crate::http::ReqwestTransport::new(reqwest::Client::new())),
            Arc::new(TokioRuntime),
        )
        .unwrap();

        let item: Item = http
            .get_with_query(
                "/api/v1/verifications",
                &json!({"status": "pending", "type": null, "limit": 5}),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(item.id, "ver_1");
    }
}
