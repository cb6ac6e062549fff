// ================
// common/src/lib.rs
// ================
//! Wire-level types for the music submission protocol,
//! shared between the gateway server and protocol clients.
//! This module defines the credential token format, the challenge digest
//! derivation and the line-oriented reply lexicon.

pub mod digest;
pub mod reply;
pub mod token;

pub use digest::{digest_matches, expected_digest, inner_hash_hex, normalize_digest};
pub use reply::{Reply, ReplyCode, CONTENT_TYPE, TERMINATOR};
pub use token::{AuthToken, TokenMode};
