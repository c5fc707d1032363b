//! Token dictionary for the compact cipher-suite name encoding.
//!
//! Cipher-suite names are built from a small set of recurring fragments.
//! Instead of storing full name strings, each fragment gets a 6-bit index
//! into this dictionary and names are stored as index sequences.

/// Dictionary of name fragments, addressed by 6-bit index.
///
/// Index 0 is the empty sentinel used to pad a name out to 8 slots. The
/// dictionary must stay at 64 entries or fewer so every index fits in
/// 6 bits.
pub static TOKENS: &[&str] = &[
    "",            // 0
    "TLS",         // 1
    "WITH",        // 2
    "128",         // 3
    "256",         // 4
    "3DES",        // 5
    "8",           // 6
    "AES",         // 7
    "AES128",      // 8
    "AES256",      // 9
    "CBC",         // 10
    "CBC3",        // 11
    "CCM",         // 12
    "CCM8",        // 13
    "CHACHA20",    // 14
    "DES",         // 15
    "DHE",         // 16
    "ECDH",        // 17
    "ECDHE",       // 18
    "ECDSA",       // 19
    "EDE",         // 20
    "GCM",         // 21
    "MD5",         // 22
    "NULL",        // 23
    "POLY1305",    // 24
    "PSK",         // 25
    "RSA",         // 26
    "SHA",         // 27
    "SHA256",      // 28
    "SHA384",      // 29
    "ARIA",        // 30
    "ARIA128",     // 31
    "ARIA256",     // 32
    "CAMELLIA",    // 33
    "CAMELLIA128", // 34
    "CAMELLIA256", // 35
];

/// Index of the "TLS" token, which decides the separator convention.
pub(crate) const IDX_TLS: u8 = 1;

/// Get the dictionary index for a name fragment (reverse lookup).
///
/// Comparison is ASCII case-insensitive; the stored form is canonical
/// uppercase. The empty sentinel at index 0 never matches.
pub fn token_index(part: &str) -> Option<u8> {
    TOKENS
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, token)| token.eq_ignore_ascii_case(part))
        .map(|(i, _)| i as u8)
}

/// Get the fragment string for a dictionary index.
///
/// Returns `None` for index 0 (the sentinel is not a displayable token)
/// and for indices past the end of the dictionary.
pub fn token_str(index: u8) -> Option<&'static str> {
    if index == 0 {
        return None;
    }
    TOKENS.get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup() {
        assert_eq!(token_str(1), Some("TLS"));
        assert_eq!(token_str(14), Some("CHACHA20"));
        assert_eq!(token_str(35), Some("CAMELLIA256"));
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(token_index("TLS"), Some(1));
        assert_eq!(token_index("ECDHE"), Some(18));
        assert_eq!(token_index("SHA384"), Some(29));
    }

    #[test]
    fn test_reverse_lookup_is_case_insensitive() {
        assert_eq!(token_index("tls"), Some(1));
        assert_eq!(token_index("ChaCha20"), Some(14));
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(token_index("SNAKEOIL"), None);
        assert_eq!(token_index("SHA51"), None);
    }

    #[test]
    fn test_sentinel_and_out_of_range() {
        assert_eq!(token_index(""), None);
        assert_eq!(token_str(0), None);
        assert_eq!(token_str(63), None);
    }

    #[test]
    fn test_dictionary_fits_six_bits() {
        assert!(TOKENS.len() <= 64);
    }

    #[test]
    fn test_tls_index_constant() {
        assert_eq!(TOKENS[IDX_TLS as usize], "TLS");
    }
}
