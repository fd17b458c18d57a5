//! URL-safe Base64 wrapping of the packed bytes.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::CodecError;

/// Encodes packed bytes as an unpadded, URL-safe Base64 token.
///
/// The output never contains `+`, `/`, or `=`, so it can ride in a query
/// parameter without percent-encoding.
pub(crate) fn encode_token(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes a token back into its packed bytes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidToken`] for characters outside the URL-safe
/// alphabet (including stray padding).
pub(crate) fn decode_token(token: &str) -> Result<Vec<u8>, CodecError> {
    Ok(URL_SAFE_NO_PAD.decode(token)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn token_round_trips() {
        let bytes = [0x07, 0xd0, 0x38, 0x80, 0x01];

        let token = encode_token(&bytes);
        let result = decode_token(&token).unwrap();

        assert_eq!(result, bytes);
    }

    #[test]
    fn token_avoids_url_hostile_characters() {
        // 0xfb 0xff forces '-' and '_' in the URL-safe alphabet
        let token = encode_token(&[0xfb, 0xff, 0xbf, 0xef, 0xbe]);

        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
    }

    #[test]
    fn decode_rejects_non_base64_characters() {
        assert!(decode_token("not base64!").is_err());
        assert!(decode_token("abc=").is_err());
    }
}
