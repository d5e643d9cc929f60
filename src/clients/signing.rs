//! Request signing for the Weebly Cloud API.
//!
//! Every request carries an `X-Signed-Request-Hash` header computed from the
//! API secret and the canonical request message:
//!
//! ```text
//! METHOD + "\n" + path + "\n" + body
//! ```
//!
//! The HMAC-SHA256 digest of that message is hex-encoded, and the hex text
//! (not the raw digest) is then base64-encoded. The server recomputes the
//! same two-stage value, so the encoding must be reproduced exactly.
//!
//! # Example
//!
//! ```rust
//! use weebly_cloud::clients::signing::sign;
//!
//! let signature = sign("secret", "GET", "account", "").unwrap();
//! // base64 of 64 hex characters
//! assert_eq!(signature.len(), 88);
//! ```

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ConfigError;

type HmacSha256 = Hmac<Sha256>;

/// Builds the canonical message that is signed for a request.
#[must_use]
pub fn canonical_message(method: &str, path: &str, body: &str) -> String {
    format!("{method}\n{path}\n{body}")
}

/// Computes the lowercase hex HMAC-SHA256 of `message` keyed by `secret`.
///
/// # Errors
///
/// Returns [`ConfigError::SigningUnavailable`] if the keyed hash cannot be
/// initialised.
pub fn compute_hex_digest(message: &str, secret: &str) -> Result<String, ConfigError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| {
        ConfigError::SigningUnavailable {
            reason: e.to_string(),
        }
    })?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Computes the `X-Signed-Request-Hash` header value for a request.
///
/// `body` must be the exact text sent on the wire: the JSON body for
/// POST/PUT/PATCH and the empty string for GET/DELETE.
///
/// # Errors
///
/// Returns [`ConfigError::SigningUnavailable`] if the keyed hash cannot be
/// initialised.
pub fn sign(secret: &str, method: &str, path: &str, body: &str) -> Result<String, ConfigError> {
    let hex_digest = compute_hex_digest(&canonical_message(method, path, body), secret)?;
    Ok(BASE64_STANDARD.encode(hex_digest.as_bytes()))
}

mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_message_joins_with_newlines() {
        assert_eq!(
            canonical_message("POST", "user", r#"{"email":"a@b.c"}"#),
            "POST\nuser\n{\"email\":\"a@b.c\"}"
        );
        assert_eq!(canonical_message("GET", "account", ""), "GET\naccount\n");
    }

    #[test]
    fn test_hex_digest_matches_known_value() {
        // HMAC-SHA256("message", "key")
        assert_eq!(
            compute_hex_digest("message", "key").unwrap(),
            "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"
        );
    }

    #[test]
    fn test_signature_is_base64_of_hex_text() {
        let signature = sign("key", "GET", "account", "").unwrap();
        let decoded = BASE64_STANDARD.decode(&signature).unwrap();
        let hex_text = String::from_utf8(decoded).unwrap();

        assert_eq!(hex_text.len(), 64);
        assert!(hex_text
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(
            hex_text,
            compute_hex_digest("GET\naccount\n", "key").unwrap()
        );
    }

    #[test]
    fn test_signature_known_vector() {
        // base64("6e9ef29b...ed4a"), i.e. the hex text of HMAC-SHA256("message", "key")
        let hex_text = "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a";
        let expected = BASE64_STANDARD.encode(hex_text);
        assert_eq!(
            BASE64_STANDARD.encode(compute_hex_digest("message", "key").unwrap()),
            expected
        );
        assert!(expected.starts_with("NmU5ZWYy"));
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = sign("secret", "PATCH", "user/1", r#"{"name":"x"}"#).unwrap();
        let b = sign("secret", "PATCH", "user/1", r#"{"name":"x"}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_changes_with_any_input() {
        let base = sign("secret", "PATCH", "user/1", r#"{"name":"x"}"#).unwrap();
        assert_ne!(base, sign("secret", "PATCH", "user/1", r#"{"name":"y"}"#).unwrap());
        assert_ne!(base, sign("secret", "PATCH", "user/2", r#"{"name":"x"}"#).unwrap());
        assert_ne!(base, sign("secret", "PUT", "user/1", r#"{"name":"x"}"#).unwrap());
        assert_ne!(base, sign("other", "PATCH", "user/1", r#"{"name":"x"}"#).unwrap());
    }

    #[test]
    fn test_hex_encoding() {
        assert_eq!(hex::encode([0x00, 0xff, 0xab, 0xcd]), "00ffabcd");
        assert_eq!(hex::encode(b""), "");
    }
}
