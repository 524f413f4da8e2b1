use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::ApiError,
    config,
    utils::{self, storage},
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Status and body of a finished request, read before any parsing.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path).await;
        self.client.request(method, url)
    }

    fn with_auth_header(builder: RequestBuilder) -> (RequestBuilder, bool) {
        match storage::load_token() {
            Some(token) => (builder.bearer_auth(token), true),
            None => (builder, false),
        }
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            storage::clear_session();
            Self::redirect_to_login_if_needed();
        }
    }

    fn redirect_to_login_if_needed() {
        if utils::current_path().as_deref() == Some("/login") {
            return;
        }
        utils::redirect_to("/login");
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        if let Some(mocked) = mock_response(&request) {
            return mocked;
        }
        log::debug!("{} {}", request.method(), request.url());
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok(RawResponse { status, body })
    }

    /// Sends a request without credentials (login, signup).
    pub(crate) async fn send_public<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let raw = self.execute(builder).await?;
        parse_response(raw)
    }

    /// Sends a request carrying the stored bearer token.
    ///
    /// A `401` from a request that carried a token ends the session.
    pub(crate) async fn send_authed<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let (builder, had_token) = Self::with_auth_header(builder);
        let raw = self.execute(builder).await?;
        if had_token {
            Self::handle_unauthorized_status(raw.status);
        }
        parse_response(raw)
    }
}

pub(crate) fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

pub(crate) fn parse_response<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ApiError> {
    if raw.status.is_success() {
        let body = if raw.body.trim().is_empty() {
            "null"
        } else {
            raw.body.as_str()
        };
        serde_json::from_str(body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(parse_error(&raw))
    }
}

fn parse_error(raw: &RawResponse) -> ApiError {
    match serde_json::from_str::<ApiError>(&raw.body) {
        Ok(mut error) if !error.error.trim().is_empty() => {
            if error.code.is_empty() {
                error.code = raw.status.as_u16().to_string();
            }
            error
        }
        _ => {
            let message = format!("Request failed with status {}", raw.status.as_u16());
            if raw.status == StatusCode::UNAUTHORIZED {
                ApiError::unauthorized(message)
            } else {
                ApiError::request_failed(message)
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_hook::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mock_response(request: &reqwest::Request) -> Option<Result<RawResponse, ApiError>> {
    mock_hook::respond(request)
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mock_response(_request: &reqwest::Request) -> Option<Result<RawResponse, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_hook {
    use super::RawResponse;
    use crate::api::types::ApiError;
    use reqwest::StatusCode;
    use serde_json::Value;
    use std::sync::{Arc, Mutex, OnceLock};

    #[derive(Debug, Clone)]
    pub struct MockResponse {
        pub status: u16,
        pub body: String,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self {
                status,
                body: body.to_string(),
            }
        }
    }

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(prefix: String, responder: Arc<dyn TestResponder>) {
        let mut routes = registry().lock().unwrap_or_else(|e| e.into_inner());
        routes.retain(|(existing, _)| existing != &prefix);
        routes.push((prefix, responder));
    }

    pub(super) fn respond(request: &reqwest::Request) -> Option<Result<RawResponse, ApiError>> {
        let url = request.url().as_str().to_string();
        let responder = {
            let routes = registry().lock().unwrap_or_else(|e| e.into_inner());
            routes
                .iter()
                .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
                .max_by_key(|(prefix, _)| prefix.len())
                .map(|(_, responder)| responder.clone())
        }?;
        Some(responder.respond(request).and_then(|response| {
            let status = StatusCode::from_u16(response.status)
                .map_err(|e| ApiError::unknown(format!("Invalid mock status: {}", e)))?;
            Ok(RawResponse {
                status,
                body: response.body,
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn parse_response_reads_success_body() {
        let value: Value = parse_response(raw(200, r#"{"message":"ok"}"#)).unwrap();
        assert_eq!(value["message"], "ok");
    }

    #[test]
    fn parse_response_treats_empty_success_body_as_null() {
        let value: Option<Value> = parse_response(raw(204, "")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn parse_error_prefers_backend_message() {
        let err = parse_response::<Value>(raw(400, r#"{"error":"Email already exists"}"#))
            .unwrap_err();
        assert_eq!(err.error, "Email already exists");
        assert_eq!(err.code, "400");
    }

    #[test]
    fn parse_error_falls_back_to_status() {
        let err = parse_response::<Value>(raw(502, "<html>bad gateway</html>")).unwrap_err();
        assert_eq!(err.error, "Request failed with status 502");
        assert_eq!(err.code, "REQUEST_FAILED");

        let err = parse_response::<Value>(raw(401, "")).unwrap_err();
        assert_eq!(err.code, "UNAUTHORIZED");
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(encode_path_segment("abc123"), "abc123");
        assert_eq!(encode_path_segment("a/b c"), "a%2Fb%20c");
    }
}
