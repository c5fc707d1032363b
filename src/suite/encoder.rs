//! Encodes a cipher-suite name string into its packed form.

use super::error::SuiteError;
use super::packed::PackedName;
use super::token::token_index;

/// Separator used by a name: `_` between the fragments of RFC/IANA names
/// (which start with "TLS"), `-` in legacy OpenSSL-style short names.
fn separator_for(name: &str) -> char {
    let bytes = name.as_bytes();
    if bytes.len() >= 3 && bytes[..3].eq_ignore_ascii_case(b"TLS") {
        '_'
    } else {
        '-'
    }
}

/// Encode a cipher-suite name (either naming convention, any ASCII case)
/// into its 6-byte packed form.
///
/// An empty fragment from a doubled or trailing separator maps to the
/// empty sentinel index rather than failing, matching how padded table
/// entries fill their unused slots.
pub fn encode_name(name: &str) -> Result<PackedName, SuiteError> {
    let separator = separator_for(name);

    let mut indices = [0u8; 8];
    let mut n = 0;
    for part in name.split(separator) {
        if n == 8 {
            return Err(SuiteError::TooManyParts);
        }
        if !part.is_empty() {
            indices[n] = token_index(part)
                .ok_or_else(|| SuiteError::UnknownToken(part.to_string()))?;
        }
        n += 1;
    }

    Ok(PackedName::from_indices(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_rfc_name() {
        // TLS_RSA_WITH_AES_128_CBC_SHA: indices 1,26,2,7,3,10,27,0
        let packed = encode_name("TLS_RSA_WITH_AES_128_CBC_SHA").unwrap();
        assert_eq!(packed.indices(), [1, 26, 2, 7, 3, 10, 27, 0]);
    }

    #[test]
    fn test_encode_legacy_name() {
        // AES128-SHA: indices 8,27 then padding
        let packed = encode_name("AES128-SHA").unwrap();
        assert_eq!(packed.indices(), [8, 27, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        assert_eq!(
            encode_name("aes128-sha").unwrap(),
            encode_name("AES128-SHA").unwrap()
        );
        assert_eq!(
            encode_name("tls_rsa_with_aes_128_cbc_sha").unwrap(),
            encode_name("TLS_RSA_WITH_AES_128_CBC_SHA").unwrap()
        );
    }

    #[test]
    fn test_separator_follows_tls_prefix() {
        // A "TLS" prefix selects '_', so hyphens are not separators and
        // the whole string fails to match a single dictionary token.
        assert_eq!(
            encode_name("TLS-AES-128"),
            Err(SuiteError::UnknownToken("TLS-AES-128".to_string()))
        );
    }

    #[test]
    fn test_empty_fragments_map_to_sentinel() {
        let padded = encode_name("AES128-SHA-").unwrap();
        assert_eq!(padded, encode_name("AES128-SHA").unwrap());

        // An interior empty fragment leaves a hole; it encodes, but can
        // never match a well-formed table entry.
        let holed = encode_name("AES128--SHA").unwrap();
        assert_eq!(holed.indices(), [8, 0, 27, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(
            encode_name("NOT-A-REAL-CIPHER"),
            Err(SuiteError::UnknownToken("NOT".to_string()))
        );
    }

    #[test]
    fn test_too_many_parts() {
        assert_eq!(
            encode_name("SHA-SHA-SHA-SHA-SHA-SHA-SHA-SHA-SHA"),
            Err(SuiteError::TooManyParts)
        );
    }
}
