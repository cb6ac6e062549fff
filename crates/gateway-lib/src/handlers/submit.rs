// ============================
// crates/gateway-lib/src/handlers/submit.rs
// ============================
//! Submission endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use metrics::counter;
use tracing::debug;

use musicgw_common::reply::CONTENT_TYPE;

use crate::protocol;
use crate::AppState;

/// Static explanation served to anything that is not a protocol submission.
const NOTICE: &str = "This is a testing script for music protocol.  If you do not know what\n\
that means do not worry and just ignore this page.  You should not be\n\
here anyway. ;)";

/// Keys under which clients submit song identifiers. The reference client
/// posts PHP-style `song[]` keys; plain `song` is honored as well.
const SONG_KEYS: [&str; 2] = ["song", "song[]"];

/// `POST /` — validate the submission and answer in the wire format.
///
/// The body is decoded as form pairs without insisting on a content type;
/// a submission with no fields at all gets the plain notice instead of a
/// protocol reply.
pub async fn submit(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    counter!("submit.requests").increment(1);

    let fields: Vec<(String, String)> = url::form_urlencoded::parse(&body).into_owned().collect();

    if fields.is_empty() {
        return notice().await.into_response();
    }

    // Last occurrence wins for repeated auth keys, matching how the
    // reference transport collapses duplicates.
    let auth = fields
        .iter()
        .rev()
        .find(|(key, _)| key == "auth")
        .map(|(_, value)| value.as_str());
    let song_count = fields
        .iter()
        .filter(|(key, _)| SONG_KEYS.contains(&key.as_str()))
        .count();

    let now = Utc::now().timestamp();
    let result = state.validator.validate(auth, now);
    let reply = protocol::render(&result, song_count);

    debug!(
        code = reply.status().code(),
        songs = song_count,
        "submission handled"
    );
    counter!("submit.replies", "code" => reply.status().code().to_string()).increment(1);

    ([(header::CONTENT_TYPE, CONTENT_TYPE)], reply.to_string()).into_response()
}

/// `GET /` — browsers and probes get the plain notice.
pub async fn notice() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], NOTICE)
}
