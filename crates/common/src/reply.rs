// ============================
// crates/common/src/reply.rs
// ============================
//! Line-oriented reply lexicon and rendering.

use std::fmt;

/// Terminator line closing a complete reply.
pub const TERMINATOR: &str = "END";

/// Content type marking protocol replies.
pub const CONTENT_TYPE: &str = "text/x-music";

/// Protocol status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCode {
    Ok,
    InvalidUser,
    InvalidTime,
    BadSession,
}

impl ReplyCode {
    pub const fn code(self) -> u16 {
        match self {
            ReplyCode::Ok => 100,
            ReplyCode::InvalidUser => 201,
            ReplyCode::InvalidTime => 203,
            ReplyCode::BadSession => 301,
        }
    }

    pub const fn reason(self) -> &'static str {
        match self {
            ReplyCode::Ok => "OK",
            ReplyCode::InvalidUser => "Invalid User",
            ReplyCode::InvalidTime => "Invalid Time",
            ReplyCode::BadSession => "Bad Session",
        }
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MUSIC {} {}", self.code(), self.reason())
    }
}

/// A composed protocol reply.
///
/// Terminated replies close with an `END` line. Unterminated failure
/// replies stop right after the detail line, without a trailing newline.
/// Diagnostic lines, when present, are emitted between the body and the
/// terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    status: ReplyCode,
    detail: Option<String>,
    session: Option<(u64, u64)>,
    song_acks: usize,
    diagnostics: Vec<String>,
    terminated: bool,
}

impl Reply {
    /// Successful, terminated reply.
    pub fn ok() -> Self {
        Reply {
            status: ReplyCode::Ok,
            detail: None,
            session: None,
            song_acks: 0,
            diagnostics: Vec::new(),
            terminated: true,
        }
    }

    /// Failure reply without a terminator.
    pub fn failure(status: ReplyCode, detail: impl Into<String>) -> Self {
        Reply {
            status,
            detail: Some(detail.into()),
            session: None,
            song_acks: 0,
            diagnostics: Vec::new(),
            terminated: false,
        }
    }

    /// Failure reply that still closes with the terminator.
    pub fn rejection(status: ReplyCode, detail: impl Into<String>) -> Self {
        Reply {
            terminated: true,
            ..Reply::failure(status, detail)
        }
    }

    /// Announce a session with the given identifier pair.
    pub fn with_session(mut self, id: u64, key: u64) -> Self {
        self.session = Some((id, key));
        self
    }

    /// Acknowledge `count` submitted songs, in submission order.
    pub fn with_song_acks(mut self, count: usize) -> Self {
        self.song_acks = count;
        self
    }

    /// Append diagnostic lines, rendered just before the terminator.
    pub fn with_diagnostics<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.diagnostics.extend(lines);
        self
    }

    pub fn status(&self) -> ReplyCode {
        self.status
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n{detail}")?;
        }
        if !self.terminated {
            return Ok(());
        }
        writeln!(f)?;
        if let Some((id, key)) = self.session {
            writeln!(f, "SESSION {id} {key}")?;
        }
        for index in 0..self.song_acks {
            writeln!(f, "SONG {index} OK")?;
        }
        for line in &self.diagnostics {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{TERMINATOR}")
    }
}
