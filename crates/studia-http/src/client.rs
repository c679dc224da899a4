//! HTTP client that resolves every call to a response envelope.

use std::sync::Arc;
use std::time::Instant;

use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::HttpClientConfig;
use crate::credentials::CredentialStore;
use crate::envelope::{Envelope, FieldErrors, error_code};
use crate::error::Result;
use crate::storage::KeyValueStorage;

/// Tracing target for HTTP client operations.
pub const TRACING_TARGET: &str = "studia_http::client";

/// Fallback message for failed responses without a usable body.
const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Inner client that holds the HTTP client, configuration and credentials.
struct HttpClientInner {
    http: reqwest::Client,
    config: HttpClientConfig,
    credentials: CredentialStore,
}

impl std::fmt::Debug for HttpClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientInner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// HTTP client for the admin API.
///
/// Every request resolves to an [`Envelope`], whatever happens on the wire.
/// Transport failures, undecodable bodies and error status codes all surface
/// as failed envelopes rather than errors, so callers branch on
/// [`Envelope::status`] alone.
///
/// The client attaches the bearer token from its [`CredentialStore`] to each
/// request, reading it at dispatch time so token changes take effect
/// immediately.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
///
/// use studia_http::{Empty, HttpClient, HttpClientConfig, MemoryStorage};
///
/// let config = HttpClientConfig::new("https://api.studia.app")?;
/// let client = HttpClient::new(config, Arc::new(MemoryStorage::new()))?;
///
/// let response = client.get::<Empty>("/health").await;
/// assert!(response.is_success());
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: Arc<HttpClientInner>,
}

impl HttpClient {
    /// Creates a new client with the given configuration and token storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the underlying
    /// HTTP client cannot be created.
    pub fn new(config: HttpClientConfig, storage: Arc<dyn KeyValueStorage>) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET,
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis(),
            "Creating HTTP client"
        );

        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let credentials = CredentialStore::new(storage);
        let inner = HttpClientInner {
            http,
            config,
            credentials,
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.inner.config
    }

    /// Gets the credential store backing this client.
    pub fn credentials(&self) -> &CredentialStore {
        &self.inner.credentials
    }

    /// Sends a GET request.
    pub async fn get<T>(&self, path: &str) -> Envelope<T>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, path);
        self.dispatch(Method::GET, path, request).await
    }

    /// Sends a POST request with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path).json(body);
        self.dispatch(Method::POST, path, request).await
    }

    /// Sends a POST request without a body.
    pub async fn post_empty<T>(&self, path: &str) -> Envelope<T>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path);
        self.dispatch(Method::POST, path, request).await
    }

    /// Sends a POST request with a multipart form body.
    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> Envelope<T>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).multipart(form);
        self.dispatch(Method::POST, path, request).await
    }

    /// Sends a PUT request with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path).json(body);
        self.dispatch(Method::PUT, path, request).await
    }

    /// Sends a PATCH request with a JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PATCH, path).json(body);
        self.dispatch(Method::PATCH, path, request).await
    }

    /// Sends a DELETE request.
    pub async fn delete<T>(&self, path: &str) -> Envelope<T>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::DELETE, path);
        self.dispatch(Method::DELETE, path, request).await
    }

    /// Joins a request path onto the configured base URL.
    fn endpoint(&self, path: &str) -> String {
        let base_url = self.inner.config.base_url.as_str();
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }

    /// Builds a request with the standard headers and bearer token attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .inner
            .http
            .request(method, self.endpoint(path))
            .header(header::ACCEPT, "application/json");

        // The token is attached even when expired; the server is the
        // authority on rejecting it.
        if let Some(token) = self.inner.credentials.token() {
            request = request.bearer_auth(token);
        }

        request
    }

    /// Sends a prepared request and resolves it to an envelope.
    async fn dispatch<T>(&self, method: Method, path: &str, request: RequestBuilder) -> Envelope<T>
    where
        T: DeserializeOwned,
    {
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET,
            method = %method,
            path,
            "Dispatching request"
        );

        let result = request.send().await;
        let elapsed = started_at.elapsed();

        match result {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let envelope = decode(response).await;

                tracing::debug!(
                    target: TRACING_TARGET,
                    method = %method,
                    path,
                    status_code,
                    success = envelope.status,
                    elapsed_ms = elapsed.as_millis(),
                    "Request completed"
                );

                envelope
            }
            Err(error) => {
                let message = transport_message(&error);

                tracing::warn!(
                    target: TRACING_TARGET,
                    method = %method,
                    path,
                    error = %message,
                    elapsed_ms = elapsed.as_millis(),
                    "Request failed"
                );

                Envelope::failure_with_code(message, error_code::NETWORK_ERROR)
            }
        }
    }
}

/// Error fields the API includes on failed responses.
#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Option<FieldErrors>,
    #[serde(default)]
    error: Option<String>,
}

/// Resolves an HTTP response to an envelope.
async fn decode<T>(response: Response) -> Envelope<T>
where
    T: DeserializeOwned,
{
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();

        let message = if parsed.message.is_empty() {
            GENERIC_ERROR_MESSAGE.to_owned()
        } else {
            parsed.message
        };
        let code = parsed
            .error
            .unwrap_or_else(|| error_code::REQUEST_FAILED.to_owned());

        let envelope = Envelope::failure_with_code(message, code);
        return match parsed.errors {
            Some(errors) => envelope.with_errors(errors),
            None => envelope,
        };
    }

    if is_json(&response) {
        match response.json::<Envelope<T>>().await {
            Ok(envelope) => envelope,
            Err(error) => {
                Envelope::failure_with_code(transport_message(&error), error_code::NETWORK_ERROR)
            }
        }
    } else {
        // Some endpoints answer 2xx with a bare text body. Treat it as a
        // success message without a payload.
        let text = response.text().await.unwrap_or_default();
        Envelope {
            status: true,
            message: text,
            data: None,
            token: None,
            errors: None,
            error: None,
        }
    }
}

/// Returns whether the response declares a JSON body.
fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"))
}

/// Maps a transport error to a stable, human-readable message.
fn transport_message(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timed out".to_owned()
    } else if error.is_connect() {
        "Connection failed".to_owned()
    } else {
        error.to_string()
    }
}
