//! # Auth Store
//!
//! A mock authentication session. There is no backend: login accepts a
//! single demo credential pair and signup accepts anything.
//!
//! ## Session States
//! ```text
//!              login / signup                 success
//!  ┌───────────┐ ───────────► ┌────────────────┐ ───────► ┌───────────────┐
//!  │ Anonymous │              │ Authenticating │          │ Authenticated │
//!  └───────────┘ ◄─────────── └────────────────┘          └───────┬───────┘
//!        ▲         bad login                                      │
//!        └────────────────────────── logout ──────────────────────┘
//! ```
//!
//! The session user is saved under `bookstore_user` and restored at
//! startup. Saved data that doesn't parse is discarded and its key removed.

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use ts_rs::TS;

use haven_core::validation::{validate_email, validate_name};
use haven_core::{User, ValidationError, DEMO_EMAIL, DEMO_PASSWORD, SESSION_STORAGE_KEY};
use haven_db::LocalStorageRepository;

use crate::latency::{LatencyKind, SimulatedLatency};
use crate::notify::Notifier;

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("You must be signed in")]
    NotAuthenticated,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Where the session is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum AuthStatus {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated(User),
}

/// The session plus its persistence and notifications.
#[derive(Debug)]
pub struct AuthStore {
    status: AuthStatus,
    storage: LocalStorageRepository,
    notifier: Notifier,
    latency: SimulatedLatency,
}

impl AuthStore {
    /// Restores the saved session, if any.
    pub async fn load(
        storage: LocalStorageRepository,
        notifier: Notifier,
        latency: SimulatedLatency,
    ) -> Self {
        let status = match storage.get_item(SESSION_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id, "Session restored");
                    AuthStatus::Authenticated(user)
                }
                Err(e) => {
                    warn!(error = %e, "Discarding malformed saved session");
                    if let Err(e) = storage.remove_item(SESSION_STORAGE_KEY).await {
                        error!(error = %e, "Failed to remove malformed session");
                    }
                    AuthStatus::Anonymous
                }
            },
            Ok(None) => AuthStatus::Anonymous,
            Err(e) => {
                error!(error = %e, "Failed to read saved session");
                AuthStatus::Anonymous
            }
        };

        AuthStore {
            status,
            storage,
            notifier,
            latency,
        }
    }

    pub fn status(&self) -> &AuthStatus {
        &self.status
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match &self.status {
            AuthStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// True while a login or signup is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == AuthStatus::Authenticating
    }

    /// The signed-in user, or `NotAuthenticated`.
    pub fn require_user(&self) -> Result<&User, AuthError> {
        self.user().ok_or(AuthError::NotAuthenticated)
    }

    /// Signs in. Only the demo account is accepted.
    ///
    /// ## Errors
    /// `InvalidCredentials` for any other pair; the session is left as it
    /// was before the attempt.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        debug!(email, "login");
        let previous = std::mem::replace(&mut self.status, AuthStatus::Authenticating);
        self.latency.wait(LatencyKind::Auth).await;

        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            self.status = previous;
            self.notifier.error("Invalid email or password");
            return Err(AuthError::InvalidCredentials);
        }

        let user = User {
            id: "1".to_string(),
            email: DEMO_EMAIL.to_string(),
            name: "Demo User".to_string(),
        };
        self.start_session(user.clone()).await;
        self.notifier.success("Successfully signed in");

        Ok(user)
    }

    /// Creates an account and signs it in. Always succeeds.
    ///
    /// The user id is the current Unix time in milliseconds.
    pub async fn signup(&mut self, name: &str, email: &str, _password: &str) -> User {
        debug!(email, "signup");
        self.status = AuthStatus::Authenticating;
        self.latency.wait(LatencyKind::Auth).await;

        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            email: email.to_string(),
            name: name.to_string(),
        };
        self.start_session(user.clone()).await;
        self.notifier.success("Account created successfully");

        user
    }

    /// Ends the session immediately.
    pub async fn logout(&mut self) {
        debug!("logout");
        self.status = AuthStatus::Anonymous;

        if let Err(e) = self.storage.remove_item(SESSION_STORAGE_KEY).await {
            error!(error = %e, "Failed to remove saved session");
        }
        self.notifier.success("Signed out successfully");
    }

    /// Changes the signed-in user's name and email.
    pub async fn update_profile(&mut self, name: &str, email: &str) -> Result<User, AuthError> {
        let current = self.require_user()?;
        validate_name(name)?;
        validate_email(email)?;

        let user = User {
            id: current.id.clone(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        };
        self.start_session(user.clone()).await;
        self.notifier.success("Profile updated successfully");

        Ok(user)
    }

    async fn start_session(&mut self, user: User) {
        info!(user_id = %user.id, "Session started");
        self.persist(&user).await;
        self.status = AuthStatus::Authenticated(user);
    }

    async fn persist(&self, user: &User) {
        let json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize session");
                return;
            }
        };

        if let Err(e) = self.storage.set_item(SESSION_STORAGE_KEY, &json).await {
            error!(error = %e, "Failed to save session");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
