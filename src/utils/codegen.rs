//! Short code derivation.
//!
//! Codes are derived deterministically from the long URL rather than drawn
//! from a random source: the URL-safe base64 encoding of the raw URL bytes,
//! truncated to a fixed length. Two different URLs sharing the same encoded
//! prefix therefore produce the same code and silently overwrite one
//! another's mapping. There is no collision detection; that behavior is the
//! contract, not an oversight.

use base64::Engine as _;

/// Length of a derived short code in characters.
pub const CODE_LENGTH: usize = 6;

/// Derives the short code for a long URL.
///
/// Deterministic: the same input always yields the same code.
///
/// # Examples
///
/// ```
/// use shortlinkr::utils::codegen::derive_code;
///
/// assert_eq!(derive_code("http://example.com"), "aHR0cD");
/// ```
pub fn derive_code(long_url: &str) -> String {
    let encoded = base64::engine::general_purpose::URL_SAFE.encode(long_url.as_bytes());
    encoded.chars().take(CODE_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_code_is_deterministic() {
        let a = derive_code("http://example.com/some/long/path?with=query");
        let b = derive_code("http://example.com/some/long/path?with=query");
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_code_shape() {
        let code = derive_code("https://www.rust-lang.org/learn");
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_known_prefix() {
        // base64("http://example.com") = "aHR0cDovL2V4YW1wbGUuY29t"
        assert_eq!(derive_code("http://example.com"), "aHR0cD");
    }

    #[test]
    fn test_shared_prefix_collides() {
        // Both URLs start with the same bytes, so their first six base64
        // characters coincide
        assert_eq!(
            derive_code("http://example.com"),
            derive_code("http://example.org")
        );
    }
}
