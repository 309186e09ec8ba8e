//! HTTP API client wrapper - the portal's client-side edge.
//!
//! A thin wrapper around reqwest with a fixed base URL (normalized to
//! end in `/api`) and a token source consulted per request: when a
//! bearer token is present it is attached to the Authorization header
//! of every outgoing request. No retry, backoff or caching.

use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Persistent storage for the bearer token.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    fn load(&self) -> Option<String>;

    /// Persist a token
    fn store(&self, token: &str) -> AppResult<()>;

    /// Remove the stored token
    fn clear(&self) -> AppResult<()>;
}

/// File-backed token store under the user's config directory.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default token location: `<config dir>/student-hub/token`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("student-hub")
            .join("token")
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let token = std::fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn store(&self, token: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::internal(format!("Token store: {}", e)))?;
        }
        std::fs::write(&self.path, token)
            .map_err(|e| AppError::internal(format!("Token store: {}", e)))
    }

    fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::internal(format!("Token store: {}", e))),
        }
    }
}

/// Normalize a configured base URL so requests always target `/api`.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{}/api", trimmed)
    }
}

/// Login response shape from the auth endpoint.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Portal API client.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
            tokens,
        }
    }

    /// The normalized base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for a path under the base URL, attaching the
    /// bearer token iff one is present in storage at call time.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.tokens.load() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// POST a JSON body and parse the JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Log in and persist the returned bearer token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let response: LoginResponse = self
            .post_json(
                "/auth/login",
                &serde_json::json!({ "email": email, "password": password }),
            )
            .await?;

        self.tokens.store(&response.access_token)
    }

    /// Forget the stored token.
    pub fn logout(&self) -> AppResult<()> {
        self.tokens.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory token store for tests.
    struct MemoryTokenStore {
        token: Mutex<Option<String>>,
    }

    impl MemoryTokenStore {
        fn new(token: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                token: Mutex::new(token.map(String::from)),
            })
        }
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.token.lock().unwrap().clone()
        }

        fn store(&self, token: &str) -> AppResult<()> {
            *self.token.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        fn clear(&self) -> AppResult<()> {
            *self.token.lock().unwrap() = None;
            Ok(())
        }
    }

    #[test]
    fn test_base_url_gains_api_suffix() {
        assert_eq!(
            normalize_base_url("http://localhost:5000"),
            "http://localhost:5000/api"
        );
        assert_eq!(
            normalize_base_url("http://localhost:5000/"),
            "http://localhost:5000/api"
        );
    }

    #[test]
    fn test_base_url_keeps_existing_api_suffix() {
        assert_eq!(
            normalize_base_url("https://hub.example.com/api"),
            "https://hub.example.com/api"
        );
    }

    #[test]
    fn test_bearer_header_attached_when_token_present() {
        let client = ApiClient::new(
            "http://localhost:5000",
            MemoryTokenStore::new(Some("tok-123")),
        );

        let request = client.request(Method::GET, "/jobs").build().unwrap();
        let auth = request.headers().get(reqwest::header::AUTHORIZATION);
        assert_eq!(auth.unwrap().to_str().unwrap(), "Bearer tok-123");
    }

    #[test]
    fn test_no_bearer_header_without_token() {
        let client = ApiClient::new("http://localhost:5000", MemoryTokenStore::new(None));

        let request = client.request(Method::GET, "/jobs").build().unwrap();
        assert!(request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .is_none());
    }

    #[test]
    fn test_token_read_at_call_time() {
        let store = MemoryTokenStore::new(None);
        let client = ApiClient::new("http://localhost:5000", store.clone());

        let before = client.request(Method::GET, "/jobs").build().unwrap();
        assert!(before
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .is_none());

        store.store("fresh-token").unwrap();

        let after = client.request(Method::GET, "/jobs").build().unwrap();
        assert!(after.headers().get(reqwest::header::AUTHORIZATION).is_some());
    }

    #[test]
    fn test_request_paths_join_cleanly() {
        let client = ApiClient::new("http://localhost:5000", MemoryTokenStore::new(None));
        let request = client.request(Method::GET, "jobs").build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/jobs");

        let request = client.request(Method::GET, "/jobs").build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/jobs");
    }

    #[test]
    fn test_file_token_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));

        assert!(store.load().is_none());
        store.store("persisted").unwrap();
        assert_eq!(store.load().as_deref(), Some("persisted"));
        store.clear().unwrap();
        assert!(store.load().is_none());

        // Clearing twice must stay a no-op
        store.clear().unwrap();
    }
}
