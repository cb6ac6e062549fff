// ============================
// crates/gateway-lib/src/auth/validator.rs
// ============================
//! Request validation decision tree.

use std::sync::Arc;

use musicgw_common::token::{AuthToken, TokenMode};

use super::policy::{CredentialPolicy, DigestTrace};

/// Terminal outcome of validating one submission.
#[derive(Debug, Clone)]
pub enum ValidationResult {
    /// Credentials accepted; `session_requested` mirrors `open` mode.
    Ok { session_requested: bool },
    /// No auth field, or an empty one.
    MissingAuth,
    /// First token field was neither `pass` nor `open`.
    UnsupportedMode,
    /// Client clock outside the accepted window.
    InvalidTime,
    /// Unknown user or digest mismatch.
    InvalidCredentials { trace: DigestTrace },
}

/// Validates submissions against a credential policy and a clock window.
///
/// Stateless apart from its configuration; safe to share across requests.
pub struct RequestValidator {
    policy: Arc<dyn CredentialPolicy>,
    max_clock_skew_secs: u64,
}

impl RequestValidator {
    pub fn new(policy: Arc<dyn CredentialPolicy>, max_clock_skew_secs: u64) -> Self {
        Self {
            policy,
            max_clock_skew_secs,
        }
    }

    /// Run the linear decision tree over a raw auth field.
    ///
    /// `now` is Unix seconds. Order matters: the mode is checked before the
    /// clock and the clock before the credentials, so a stale request with a
    /// bad password reports the stale clock.
    pub fn validate(&self, raw_auth: Option<&str>, now: i64) -> ValidationResult {
        let raw = match raw_auth {
            Some(raw) if !raw.is_empty() => raw,
            _ => return ValidationResult::MissingAuth,
        };

        let token = AuthToken::parse(raw);
        if token.mode == TokenMode::Unsupported {
            return ValidationResult::UnsupportedMode;
        }

        // Malformed hex deliberately reads as 0 rather than failing, which
        // then trips the clock window check instead.
        let client_time = u64::from_str_radix(&token.timestamp, 16).unwrap_or(0);
        let skew = (client_time as i128 - i128::from(now)).unsigned_abs();
        if skew > u128::from(self.max_clock_skew_secs) {
            return ValidationResult::InvalidTime;
        }

        let check = self
            .policy
            .verify(&token.user, &token.timestamp, &token.digest);
        if !check.accepted {
            return ValidationResult::InvalidCredentials { trace: check.trace };
        }

        ValidationResult::Ok {
            session_requested: token.mode == TokenMode::Open,
        }
    }
}
