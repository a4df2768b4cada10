//! HTTP transport shared by every service.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, warn};

use dormhub_auth::epoch::EpochCounter;
use dormhub_auth::session::{CredentialStorage, SessionStore};
use dormhub_core::config::ApiConfig;
use dormhub_core::error::{AppError, ErrorKind};
use dormhub_core::result::AppResult;
use dormhub_core::types::ApiErrorResponse;

use crate::routing::Route;

/// REST client for the DormHub backend.
///
/// Attaches the stored bearer token to every request. Any `401` response
/// advances [`ApiClient::epochs`], clears the stored credentials and the
/// session, then publishes a redirect to [`Route::Login`] on the redirect
/// channel.
#[derive(Debug)]
pub struct ApiClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Base URL including the API prefix, without trailing slash.
    root: String,
    /// Where the bearer token is read from.
    storage: Arc<dyn CredentialStorage>,
    /// Cleared on `401`.
    sessions: Arc<dyn SessionStore>,
    /// Advanced on `401` so in-flight session writes are dropped.
    epochs: Arc<EpochCounter>,
    /// Navigation requests raised by the transport.
    redirects: watch::Sender<Option<Route>>,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(
        config: &ApiConfig,
        storage: Arc<dyn CredentialStorage>,
        sessions: Arc<dyn SessionStore>,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        let (redirects, _) = watch::channel(None);

        Ok(Self {
            http,
            root: config.root(),
            storage,
            sessions,
            epochs: Arc::new(EpochCounter::new()),
            redirects,
        })
    }

    /// The API root every path is joined to.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Generation counter advanced on every `401`. Hand it to the
    /// authenticator so a forced logout also cancels its pending refreshes.
    pub fn epochs(&self) -> Arc<EpochCounter> {
        Arc::clone(&self.epochs)
    }

    /// Subscribe to redirects raised by the transport.
    pub fn redirects(&self) -> watch::Receiver<Option<Route>> {
        self.redirects.subscribe()
    }

    /// Full URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.root, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    /// GET with an explicit token instead of the stored one.
    pub async fn get_with_token<T: DeserializeOwned>(&self, path: &str, token: &str) -> AppResult<T> {
        let request = self.http.get(self.url(path)).bearer_auth(token);
        self.execute(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PUT, path).json(body)).await
    }

    /// PUT whose response body is ignored.
    pub async fn put_no_content<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<()> {
        self.dispatch(self.request(Method::PUT, path).json(body))
            .await
            .map(drop)
    }

    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.dispatch(self.request(Method::DELETE, path))
            .await
            .map(drop)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.url(path));
        match self.storage.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = self.dispatch(request).await?;
        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Failed to parse backend response: {e}"),
                e,
            )
        })
    }

    async fn dispatch(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Backend request failed");
            AppError::with_source(
                ErrorKind::ServiceUnavailable,
                format!("Failed to reach backend: {e}"),
                e,
            )
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Backend responded");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = ApiErrorResponse::parse(&body)
            .and_then(|b| b.text().map(str::to_string))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        if status == StatusCode::UNAUTHORIZED {
            self.on_unauthorized();
        }

        Err(AppError::from_response(status.as_u16(), message, Some(body)))
    }

    fn on_unauthorized(&self) {
        warn!("Backend rejected credentials; clearing session");
        self.epochs.advance();
        self.storage.clear();
        self.sessions.clear_session();
        self.redirects.send_replace(Some(Route::Login));
    }
}
