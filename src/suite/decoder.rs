//! Decodes a packed cipher-suite name back into a display string.

use super::error::SuiteError;
use super::packed::PackedName;
use super::token::{token_str, IDX_TLS};

/// Decode a packed name into its display form.
///
/// Fragments are read until the first sentinel index; padding is always
/// trailing in well-formed names. The separator is `_` when the name
/// starts with the "TLS" token, `-` otherwise.
pub fn decode_name(packed: &PackedName) -> Result<String, SuiteError> {
    let indices = packed.indices();
    let separator = if indices[0] == IDX_TLS { '_' } else { '-' };

    let mut name = String::new();
    for &index in indices.iter().take_while(|&&index| index != 0) {
        let part = token_str(index).ok_or(SuiteError::IndexOutOfRange(index))?;
        if !name.is_empty() {
            name.push(separator);
        }
        name.push_str(part);
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rfc_name() {
        let packed = PackedName::from_indices([1, 26, 2, 7, 3, 10, 27, 0]);
        assert_eq!(decode_name(&packed).unwrap(), "TLS_RSA_WITH_AES_128_CBC_SHA");
    }

    #[test]
    fn test_decode_legacy_name() {
        let packed = PackedName::from_indices([18, 26, 9, 27, 0, 0, 0, 0]);
        assert_eq!(decode_name(&packed).unwrap(), "ECDHE-RSA-AES256-SHA");
    }

    #[test]
    fn test_decode_stops_at_sentinel() {
        // Anything after the first zero index is ignored.
        let packed = PackedName::from_indices([8, 27, 0, 0, 0, 0, 0, 27]);
        assert_eq!(decode_name(&packed).unwrap(), "AES128-SHA");
    }

    #[test]
    fn test_decode_empty() {
        let packed = PackedName::from_indices([0; 8]);
        assert_eq!(decode_name(&packed).unwrap(), "");
    }

    #[test]
    fn test_decode_out_of_range_index() {
        let packed = PackedName::from_indices([8, 63, 0, 0, 0, 0, 0, 0]);
        assert_eq!(decode_name(&packed), Err(SuiteError::IndexOutOfRange(63)));
    }
}
