// ============================
// crates/gateway-lib/src/lib.rs
// ============================
//! Server library for the music submission gateway.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod router;

use std::sync::Arc;

use crate::auth::{CredentialPolicy, RequestValidator, SharedSecretPolicy};
use crate::config::Settings;
use crate::error::AppError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Request validator, parameterized by the credential policy
    pub validator: Arc<RequestValidator>,
    /// Settings manager
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state from loaded settings
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        if settings.auth.user.is_empty() {
            return Err(AppError::InvalidConfig("auth.user must not be empty".into()));
        }
        if settings.auth.secret.is_empty() {
            return Err(AppError::InvalidConfig("auth.secret must not be empty".into()));
        }

        let policy: Arc<dyn CredentialPolicy> = Arc::new(SharedSecretPolicy::new(
            settings.auth.user.clone(),
            settings.auth.secret.clone(),
        ));
        let validator = Arc::new(RequestValidator::new(
            policy,
            settings.auth.max_clock_skew_secs,
        ));

        Ok(Self {
            validator,
            settings: Arc::new(settings),
        })
    }
}
