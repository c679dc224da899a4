//! Authentication endpoints.

use studia_http::{Empty, Envelope, HttpClient};

use crate::model::{LoginCredentials, LoginData};

/// Client for the authentication endpoints.
///
/// Issues the raw calls only; persisting credentials and tracking state is
/// the session store's job.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: HttpClient,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a bearer token and identity.
    ///
    /// On success the envelope carries the user in `data` and the token on
    /// the envelope itself.
    pub async fn login(&self, credentials: &LoginCredentials) -> Envelope<LoginData> {
        self.client.post("/auth/admin/login", credentials).await
    }

    /// Invalidates the current bearer token server-side.
    pub async fn logout(&self) -> Envelope<Empty> {
        self.client.post_empty("/auth/logout").await
    }
}
