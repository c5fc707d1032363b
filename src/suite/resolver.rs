//! Public cipher-suite lookups built on the codec and reference table.

use log::debug;

use super::decoder::decode_name;
use super::encoder::encode_name;
use super::table::CIPHER_SUITES;
use super::token::IDX_TLS;

/// Resolve a cipher-suite name (either naming convention, any ASCII case)
/// to its IANA identifier.
///
/// Returns 0 when the name does not resolve; 0x0000 is not an assigned
/// suite in the table and serves as the not-found sentinel. An unresolved
/// name is a benign skip-this-entry condition for callers, so no error is
/// raised.
pub fn id_from_name(name: &str) -> u16 {
    if name.is_empty() {
        return 0;
    }
    let packed = match encode_name(name) {
        Ok(packed) => packed,
        Err(err) => {
            debug!("unrecognized cipher suite name {name:?}: {err}");
            return 0;
        }
    };
    CIPHER_SUITES
        .iter()
        .find(|entry| entry.name == packed)
        .map(|entry| entry.id)
        .unwrap_or(0)
}

/// Resolve an IANA identifier to a display name, or `None` if the table
/// has no entry for it.
///
/// `prefer_rfc` selects between the RFC/IANA form and the legacy short
/// form when the identifier has both; when only one style exists it is
/// returned regardless of the preference.
pub fn try_name_from_id(id: u16, prefer_rfc: bool) -> Option<String> {
    let mut other_style = None;
    for entry in CIPHER_SUITES {
        if entry.id != id {
            continue;
        }
        if (entry.name.first_index() == IDX_TLS) == prefer_rfc {
            return decode_name(&entry.name).ok();
        }
        if other_style.is_none() {
            other_style = Some(entry);
        }
    }
    other_style.and_then(|entry| decode_name(&entry.name).ok())
}

/// Resolve an IANA identifier to a display name, falling back to
/// `TLS_UNKNOWN_0x<id>` for identifiers the table does not carry.
pub fn name_from_id(id: u16, prefer_rfc: bool) -> String {
    try_name_from_id(id, prefer_rfc).unwrap_or_else(|| format!("TLS_UNKNOWN_0x{id:04x}"))
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | ':' | ',' | ';')
}

/// Iterator over a free-form cipher list, resolving each entry.
///
/// Produced by [`walk`].
#[derive(Debug, Clone)]
pub struct SuiteWalk<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SuiteWalk<'a> {
    /// The name substring and its resolved identifier (0 if unresolved).
    type Item = (&'a str, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.trim_start_matches(is_separator);
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }
        let end = rest.find(is_separator).unwrap_or(rest.len());
        let (name, rest) = rest.split_at(end);
        self.rest = rest;
        Some((name, id_from_name(name)))
    }
}

/// Walk a separator-delimited cipher list (separators: space, tab, `:`,
/// `,`, `;`), yielding each name substring with its resolved identifier.
///
/// Unresolvable entries yield id 0 rather than stopping the walk, so a
/// caller can skip suites its TLS backend does not know.
pub fn walk(list: &str) -> SuiteWalk<'_> {
    SuiteWalk { rest: list }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_name_both_conventions() {
        assert_eq!(id_from_name("TLS_RSA_WITH_AES_128_CBC_SHA"), 0x002F);
        assert_eq!(id_from_name("AES128-SHA"), 0x002F);
    }

    #[test]
    fn test_id_from_name_is_case_insensitive() {
        assert_eq!(id_from_name("aes128-sha"), 0x002F);
        assert_eq!(id_from_name("Tls_Rsa_With_Aes_128_Cbc_Sha"), 0x002F);
    }

    #[test]
    fn test_id_from_name_not_found() {
        assert_eq!(id_from_name("NOT-A-REAL-CIPHER"), 0);
        assert_eq!(id_from_name("ECDHE-RSA"), 0);
        assert_eq!(id_from_name(""), 0);
    }

    #[test]
    fn test_name_from_id_prefers_style() {
        assert_eq!(
            name_from_id(0x002F, true),
            "TLS_RSA_WITH_AES_128_CBC_SHA"
        );
        assert_eq!(name_from_id(0x002F, false), "AES128-SHA");
        assert_eq!(name_from_id(0xC014, false), "ECDHE-RSA-AES256-SHA");
    }

    #[test]
    fn test_name_from_id_single_style_fallback() {
        // TLS 1.3 suites only have the RFC form.
        assert_eq!(name_from_id(0x1301, true), "TLS_AES_128_GCM_SHA256");
        assert_eq!(name_from_id(0x1301, false), "TLS_AES_128_GCM_SHA256");
    }

    #[test]
    fn test_name_from_id_unknown() {
        assert_eq!(try_name_from_id(0xFFFF, true), None);
        assert_eq!(name_from_id(0xFFFF, true), "TLS_UNKNOWN_0xffff");
        assert_eq!(name_from_id(0x0000, false), "TLS_UNKNOWN_0x0000");
    }

    #[test]
    fn test_walk_list() {
        let mut walker = walk("AES128-SHA, ECDHE-RSA-AES256-SHA");
        assert_eq!(walker.next(), Some(("AES128-SHA", 0x002F)));
        assert_eq!(walker.next(), Some(("ECDHE-RSA-AES256-SHA", 0xC014)));
        assert_eq!(walker.next(), None);
    }

    #[test]
    fn test_walk_mixed_separators_and_unknown() {
        let resolved: Vec<_> = walk("\t nope:TLS_AES_256_GCM_SHA384;;aes256-sha ").collect();
        assert_eq!(
            resolved,
            vec![
                ("nope", 0),
                ("TLS_AES_256_GCM_SHA384", 0x1302),
                ("aes256-sha", 0x0035),
            ]
        );
    }

    #[test]
    fn test_walk_empty_input() {
        assert_eq!(walk("").next(), None);
        assert_eq!(walk(" ,;: ").next(), None);
    }
}
