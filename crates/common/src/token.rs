// ============================
// crates/common/src/token.rs
// ============================
//! Colon-delimited credential token format.

use std::fmt;

/// Submission mode carried in the first token field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    /// Plain submission.
    Pass,
    /// Submission that also asks for a session announcement.
    Open,
    /// Any other literal; the server refuses these.
    Unsupported,
}

impl TokenMode {
    fn parse(field: &str) -> Self {
        match field {
            "pass" => TokenMode::Pass,
            "open" => TokenMode::Open,
            _ => TokenMode::Unsupported,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenMode::Pass => "pass",
            TokenMode::Open => "open",
            TokenMode::Unsupported => "",
        }
    }
}

/// Parsed `mode:user:timestamp:digest` credential token.
///
/// Parsing is permissive: missing trailing fields come back as empty
/// strings and anything past the fourth field is ignored. The timestamp is
/// kept as the literal string sent on the wire because the digest is
/// derived from those exact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub mode: TokenMode,
    pub user: String,
    pub timestamp: String,
    pub digest: String,
}

impl AuthToken {
    pub fn parse(raw: &str) -> Self {
        let mut fields = raw.split(':');
        let mode = TokenMode::parse(fields.next().unwrap_or(""));
        let user = fields.next().unwrap_or("").to_string();
        let timestamp = fields.next().unwrap_or("").to_string();
        let digest = fields.next().unwrap_or("").to_string();
        AuthToken {
            mode,
            user,
            timestamp,
            digest,
        }
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.mode.as_str(),
            self.user,
            self.timestamp,
            self.digest
        )
    }
}
