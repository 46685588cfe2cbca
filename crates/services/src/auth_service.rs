use std::sync::Arc;
use std::time::Duration;

use edumate_core::model::{Username, envelope};
use serde::Serialize;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiResponse};
use crate::error::AuthError;
use crate::session_store::SessionStore;

pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(800);
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

const LOGIN_FAILED: &str = "Login failed.";
const REGISTER_FAILED: &str = "Registration failed.";

/// Where the UI should go after a successful auth flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthRedirect {
    Home,
    Login,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub message: &'static str,
    pub redirect: AuthRedirect,
    pub delay: Duration,
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Clone)]
pub struct AuthService {
    api: Arc<ApiClient>,
    session: SessionStore,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Log in and persist the identity on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` without a request when a field is empty,
    /// `AuthError::Rejected` for a bad status or falsy success flag, and
    /// `AuthError::Transport` when the server cannot be reached.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthOutcome, AuthError> {
        let username = validate(username, password)?;
        let response = self
            .api
            .post(
                &["api", "auth", "login"],
                &Credentials {
                    username: username.as_str(),
                    password,
                },
            )
            .await?;
        accept(&response, LOGIN_FAILED)?;

        self.session.set(&username).await?;
        info!(user = %username, "logged in");
        Ok(AuthOutcome {
            message: "Login successful. Redirecting...",
            redirect: AuthRedirect::Home,
            delay: LOGIN_REDIRECT_DELAY,
        })
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AuthService::login`].
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthOutcome, AuthError> {
        let username = validate(username, password)?;
        let response = self
            .api
            .post(
                &["api", "auth", "register"],
                &Credentials {
                    username: username.as_str(),
                    password,
                },
            )
            .await?;
        accept(&response, REGISTER_FAILED)?;

        info!(user = %username, "registered");
        Ok(AuthOutcome {
            message: "Registration successful. Please log in.",
            redirect: AuthRedirect::Login,
            delay: REGISTER_REDIRECT_DELAY,
        })
    }

    /// Forget the session identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the identity cannot be cleared.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.session.clear().await?;
        info!("logged out");
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}

fn validate(username: &str, password: &str) -> Result<Username, AuthError> {
    if password.is_empty() {
        return Err(AuthError::Validation);
    }
    Username::new(username).map_err(|_| AuthError::Validation)
}

fn accept(response: &ApiResponse, fallback: &str) -> Result<(), AuthError> {
    let body = response.json_or_empty();
    if response.is_success() && envelope::success_flag(&body) {
        return Ok(());
    }
    warn!(status = response.status, "auth request rejected");
    Err(AuthError::Rejected {
        message: envelope::server_message(&body).unwrap_or_else(|| fallback.to_string()),
    })
}
