//! Observable authentication state.
//!
//! [`SessionStore`] tracks who is signed in and exposes the three session
//! operations: [`login`](SessionStore::login),
//! [`logout`](SessionStore::logout) and
//! [`check_auth`](SessionStore::check_auth). State changes go out over a
//! watch channel so callers can await transitions instead of polling.
//!
//! The store is the only writer of session state and reaches persisted
//! credentials exclusively through the client's [`CredentialStore`]. Every
//! ambiguous situation resolves to anonymous: missing or expired
//! credentials, partial records and interrupted logins all end there.

use std::sync::Arc;

use strum::Display;
use tokio::sync::watch;

use studia_http::{CredentialStore, Empty, Envelope, HttpClient};

use crate::model::{LoginCredentials, LoginData, User};
use crate::service::AuthService;

/// Tracing target for session operations.
pub const TRACING_TARGET: &str = "studia_admin::session";

/// Error shown when a login response misses its token or user payload.
const GENERIC_LOGIN_ERROR: &str = "Login failed";

/// Authentication lifecycle phase.
///
/// `Authenticating` is the only transient phase; it always resolves to
/// exactly one of the other two.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    /// No user is signed in.
    #[default]
    Anonymous,
    /// A login call is in flight.
    Authenticating,
    /// A user is signed in with a live token.
    Authenticated,
}

/// Snapshot of the session at one point in time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionState {
    /// Current lifecycle phase.
    pub phase: SessionPhase,
    /// The signed-in user, present exactly in the authenticated phase.
    pub user: Option<User>,
    /// Message from the most recent failed login.
    pub error: Option<String>,
}

impl SessionState {
    /// State with a login in flight.
    fn authenticating() -> Self {
        Self {
            phase: SessionPhase::Authenticating,
            user: None,
            error: None,
        }
    }

    /// State with `user` signed in.
    fn authenticated(user: User) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            user: Some(user),
            error: None,
        }
    }

    /// Anonymous state carrying a login error.
    fn failed(error: impl Into<String>) -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            user: None,
            error: Some(error.into()),
        }
    }

    /// Returns whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// Returns whether a login call is in flight.
    pub fn is_authenticating(&self) -> bool {
        self.phase == SessionPhase::Authenticating
    }
}

struct SessionStoreInner {
    auth: AuthService,
    credentials: CredentialStore,
    state: watch::Sender<SessionState>,
}

impl SessionStoreInner {
    /// Publishes `next`, skipping the send when nothing changed so
    /// watchers never wake up for identical state.
    fn publish(&self, next: SessionState) {
        self.state.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            *state = next;
            true
        });
    }

    /// Purges persisted credentials and returns to the anonymous state.
    fn reset(&self) {
        self.credentials.remove();
        self.publish(SessionState::default());
    }
}

impl std::fmt::Debug for SessionStoreInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStoreInner")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

/// Purges credentials and resets state when dropped, so logout cleanup
/// runs on every exit path, including cancellation.
struct CleanupGuard<'a> {
    inner: &'a SessionStoreInner,
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        self.inner.reset();
    }
}

/// Returns an interrupted login to the anonymous state when dropped
/// before the login resolved.
struct LoginGuard<'a> {
    inner: &'a SessionStoreInner,
    armed: bool,
}

impl LoginGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoginGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.inner.state.send_if_modified(|state| {
            if state.phase != SessionPhase::Authenticating {
                return false;
            }
            *state = SessionState::default();
            true
        });
    }
}

/// Dependency-injected store for the authentication lifecycle.
///
/// Construct one per client; clones share state. Tests build isolated
/// instances over an in-memory storage backend.
///
/// # Examples
///
/// ```rust,ignore
/// use studia_admin::AdminClient;
/// use studia_http::{HttpClientConfig, MemoryStorage};
///
/// let client = AdminClient::new(config, Arc::new(MemoryStorage::new()))?;
/// let session = client.session();
///
/// let response = session.login("admin@studia.app", "secret").await;
/// if session.state().is_authenticated() {
///     println!("signed in: {}", response.message);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

impl SessionStore {
    /// Creates a session store over the given client.
    ///
    /// The initial state is hydrated from persisted credentials: a live
    /// token with a readable user snapshot starts authenticated, anything
    /// else starts anonymous. Hydration never writes to storage; the first
    /// [`check_auth`](Self::check_auth) purges whatever turns out stale.
    pub fn new(client: HttpClient) -> Self {
        let credentials = client.credentials().clone();
        let auth = AuthService::new(client);

        let initial = hydrate(&credentials);
        tracing::debug!(
            target: TRACING_TARGET,
            phase = %initial.phase,
            "Session store created"
        );

        let (state, _) = watch::channel(initial);
        Self {
            inner: Arc::new(SessionStoreInner {
                auth,
                credentials,
                state,
            }),
        }
    }

    /// Returns a snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Subscribes to session state changes.
    ///
    /// The receiver sees every published transition; identical states are
    /// never re-published.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Signs in with the given credentials.
    ///
    /// Moves through `authenticating` and settles in `authenticated` or
    /// `anonymous` with an error message. A login that succeeds without
    /// both a user payload and a token counts as failed. While a login is
    /// already in flight, further calls are rejected without a request.
    ///
    /// Returns the login response envelope for the caller to display.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Envelope<LoginData> {
        let entered = self.inner.state.send_if_modified(|state| {
            if state.phase == SessionPhase::Authenticating {
                return false;
            }
            *state = SessionState::authenticating();
            true
        });

        if !entered {
            tracing::debug!(
                target: TRACING_TARGET,
                "Rejecting login while another is in flight"
            );
            return Envelope::failure("Login already in progress");
        }

        let guard = LoginGuard {
            inner: &self.inner,
            armed: true,
        };

        let credentials = LoginCredentials::new(email, password);
        tracing::debug!(
            target: TRACING_TARGET,
            email = %credentials.email,
            "Logging in"
        );

        let response = self.inner.auth.login(&credentials).await;
        guard.disarm();

        match (&response.data, &response.token) {
            (Some(data), Some(token)) if response.status => {
                self.inner.credentials.set_token(token);
                self.inner.credentials.set_user(&data.user);
                self.inner
                    .publish(SessionState::authenticated(data.user.clone()));

                tracing::info!(
                    target: TRACING_TARGET,
                    user_id = data.user.id,
                    "Login succeeded"
                );
            }
            _ => {
                let message = if response.message.is_empty() {
                    GENERIC_LOGIN_ERROR.to_owned()
                } else {
                    response.message.clone()
                };

                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %message,
                    "Login failed"
                );
                self.inner.publish(SessionState::failed(message));
            }
        }

        response
    }

    /// Signs out.
    ///
    /// The server-side logout call is best-effort: persisted credentials
    /// are purged and the state returns to anonymous whatever the call's
    /// outcome. Safe to call when nobody is signed in.
    ///
    /// Returns the logout response envelope.
    pub async fn logout(&self) -> Envelope<Empty> {
        let _cleanup = CleanupGuard { inner: &self.inner };

        tracing::debug!(target: TRACING_TARGET, "Logging out");
        let response = self.inner.auth.logout().await;

        if !response.status {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %response.message,
                "Server-side logout failed; clearing local session anyway"
            );
        }

        response
    }

    /// Reconciles session state with persisted credentials.
    ///
    /// Runs locally without a network call, fail-closed: an absent or
    /// expired token, or a token without a readable user snapshot, purges
    /// the credentials and settles anonymous. Returns whether the session
    /// is authenticated afterwards. Calling it twice in a row publishes no
    /// second transition.
    pub fn check_auth(&self) -> bool {
        if self.inner.credentials.is_token_expired() {
            tracing::debug!(
                target: TRACING_TARGET,
                "Token missing or expired; clearing session"
            );
            self.inner.reset();
            return false;
        }

        match self.inner.credentials.user::<User>() {
            Some(user) => {
                self.inner.publish(SessionState::authenticated(user));
                true
            }
            None => {
                // A token without a user snapshot is a partial record.
                tracing::warn!(
                    target: TRACING_TARGET,
                    "Credential record is partial; clearing session"
                );
                self.inner.reset();
                false
            }
        }
    }

    /// Clears the error left by the most recent failed login.
    pub fn clear_error(&self) {
        self.inner.state.send_if_modified(|state| {
            if state.error.is_none() {
                return false;
            }
            state.error = None;
            true
        });
    }
}

/// Builds the initial state from persisted credentials, read-only.
fn hydrate(credentials: &CredentialStore) -> SessionState {
    if credentials.is_token_expired() {
        return SessionState::default();
    }

    match credentials.user::<User>() {
        Some(user) => SessionState::authenticated(user),
        None => SessionState::default(),
    }
}
