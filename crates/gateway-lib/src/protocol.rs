// ============================
// crates/gateway-lib/src/protocol.rs
// ============================
//! Composes validation outcomes into wire replies.

use musicgw_common::reply::{Reply, ReplyCode};

use crate::auth::ValidationResult;

/// Render a validation outcome plus the submitted song count into a reply.
///
/// Song identifiers are never inspected; only their count and order matter.
pub fn render(result: &ValidationResult, song_count: usize) -> Reply {
    match result {
        ValidationResult::Ok { session_requested } => {
            let mut reply = Reply::ok().with_song_acks(song_count);
            if *session_requested {
                reply = reply.with_session(0, 0);
            }
            reply
        }
        ValidationResult::MissingAuth => Reply::failure(
            ReplyCode::InvalidUser,
            "The request is missing authentication parameters.",
        ),
        ValidationResult::UnsupportedMode => Reply::failure(
            ReplyCode::BadSession,
            "This test server does not support sessions.",
        ),
        ValidationResult::InvalidTime => Reply::failure(
            ReplyCode::InvalidTime,
            "Your client has invalid time set.",
        ),
        ValidationResult::InvalidCredentials { trace } => Reply::rejection(
            ReplyCode::InvalidUser,
            "Invalid user name or password.",
        )
        .with_diagnostics(trace.lines()),
    }
}
