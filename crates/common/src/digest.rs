// ============================
// crates/common/src/digest.rs
// ============================
/** Challenge digest derivation.
The digest a client presents is derived from a shared secret and the
timestamp field of its token:
  `base64( SHA1( SHA1(secret) ++ timestamp ) )`
where the inner hash contributes its 20 raw bytes and the timestamp
contributes the literal ASCII bytes of the hex string as sent on the wire,
not the decoded integer. */
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha1::{Digest, Sha1};

/// Lowercase hex rendering of the inner secret hash (40 characters).
pub fn inner_hash_hex(secret: &str) -> String {
    hex::encode(Sha1::digest(secret.as_bytes()))
}

/// Digest a client must present for the given timestamp field.
pub fn expected_digest(secret: &str, timestamp: &str) -> String {
    let inner = Sha1::digest(secret.as_bytes());
    let mut outer = Sha1::new();
    outer.update(inner);
    outer.update(timestamp.as_bytes());
    STANDARD.encode(outer.finalize())
}

/// Map the transport-mangled spellings of `+` back to `+`.
///
/// Clients variously send ` `, `_` or `-` where the base64 alphabet has
/// `+`; all three decode to the same character.
pub fn normalize_digest(supplied: &str) -> String {
    supplied
        .chars()
        .map(|c| match c {
            ' ' | '_' | '-' => '+',
            other => other,
        })
        .collect()
}

/// Whether a normalized client digest matches the expected one.
///
/// A digest that is exactly one trailing `=` short is still accepted; some
/// clients trim a single padding character.
pub fn digest_matches(normalized: &str, expected: &str) -> bool {
    normalized == expected || format!("{normalized}=") == expected
}
