//! Reference table of TLS cipher suites.
//!
//! Maps 16-bit IANA identifiers to packed names. An identifier appears
//! once per naming convention it has: the RFC/IANA form (first token
//! "TLS", underscore-separated) and, where one exists, the legacy
//! OpenSSL-style short form (hyphen-separated). The table is a curated
//! subset of the IANA registry, not a complete mirror.

use super::packed::PackedName;

/// One cipher suite: IANA identifier plus packed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsEntry {
    pub id: u16,
    pub name: PackedName,
}

/// Dictionary indices of the name fragments, in `TOKENS` order.
mod idx {
    pub const NONE: u8 = 0;
    pub const TLS: u8 = 1;
    pub const WITH: u8 = 2;
    pub const T_128: u8 = 3;
    pub const T_256: u8 = 4;
    #[allow(dead_code)]
    pub const T_3DES: u8 = 5;
    pub const T_8: u8 = 6;
    pub const AES: u8 = 7;
    pub const AES128: u8 = 8;
    pub const AES256: u8 = 9;
    pub const CBC: u8 = 10;
    #[allow(dead_code)]
    pub const CBC3: u8 = 11;
    pub const CCM: u8 = 12;
    pub const CCM8: u8 = 13;
    pub const CHACHA20: u8 = 14;
    #[allow(dead_code)]
    pub const DES: u8 = 15;
    pub const DHE: u8 = 16;
    pub const ECDH: u8 = 17;
    pub const ECDHE: u8 = 18;
    pub const ECDSA: u8 = 19;
    #[allow(dead_code)]
    pub const EDE: u8 = 20;
    pub const GCM: u8 = 21;
    pub const MD5: u8 = 22;
    pub const NULL: u8 = 23;
    pub const POLY1305: u8 = 24;
    pub const PSK: u8 = 25;
    pub const RSA: u8 = 26;
    pub const SHA: u8 = 27;
    pub const SHA256: u8 = 28;
    pub const SHA384: u8 = 29;
    pub const ARIA: u8 = 30;
    pub const ARIA128: u8 = 31;
    pub const ARIA256: u8 = 32;
    pub const CAMELLIA: u8 = 33;
    pub const CAMELLIA128: u8 = 34;
    pub const CAMELLIA256: u8 = 35;
}
use idx::*;

const fn e(id: u16, indices: [u8; 8]) -> CsEntry {
    CsEntry {
        id,
        name: PackedName::from_indices(indices),
    }
}

/// The cipher-suite table. Entries for the same identifier are adjacent,
/// RFC form first where both forms exist.
pub static CIPHER_SUITES: &[CsEntry] = &[
    e(0x002F, [TLS, RSA, WITH, AES, T_128, CBC, SHA, NONE]),
    e(0x002F, [AES128, SHA, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x0035, [TLS, RSA, WITH, AES, T_256, CBC, SHA, NONE]),
    e(0x0035, [AES256, SHA, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x003C, [TLS, RSA, WITH, AES, T_128, CBC, SHA256, NONE]),
    e(0x003C, [AES128, SHA256, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x003D, [TLS, RSA, WITH, AES, T_256, CBC, SHA256, NONE]),
    e(0x003D, [AES256, SHA256, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x009C, [TLS, RSA, WITH, AES, T_128, GCM, SHA256, NONE]),
    e(0x009C, [AES128, GCM, SHA256, NONE, NONE, NONE, NONE, NONE]),
    e(0x009D, [TLS, RSA, WITH, AES, T_256, GCM, SHA384, NONE]),
    e(0x009D, [AES256, GCM, SHA384, NONE, NONE, NONE, NONE, NONE]),
    e(0xC004, [TLS, ECDH, ECDSA, WITH, AES, T_128, CBC, SHA]),
    e(0xC004, [ECDH, ECDSA, AES128, SHA, NONE, NONE, NONE, NONE]),
    e(0xC005, [TLS, ECDH, ECDSA, WITH, AES, T_256, CBC, SHA]),
    e(0xC005, [ECDH, ECDSA, AES256, SHA, NONE, NONE, NONE, NONE]),
    e(0xC009, [TLS, ECDHE, ECDSA, WITH, AES, T_128, CBC, SHA]),
    e(0xC009, [ECDHE, ECDSA, AES128, SHA, NONE, NONE, NONE, NONE]),
    e(0xC00A, [TLS, ECDHE, ECDSA, WITH, AES, T_256, CBC, SHA]),
    e(0xC00A, [ECDHE, ECDSA, AES256, SHA, NONE, NONE, NONE, NONE]),
    e(0xC00E, [TLS, ECDH, RSA, WITH, AES, T_128, CBC, SHA]),
    e(0xC00E, [ECDH, RSA, AES128, SHA, NONE, NONE, NONE, NONE]),
    e(0xC00F, [TLS, ECDH, RSA, WITH, AES, T_256, CBC, SHA]),
    e(0xC00F, [ECDH, RSA, AES256, SHA, NONE, NONE, NONE, NONE]),
    e(0xC013, [TLS, ECDHE, RSA, WITH, AES, T_128, CBC, SHA]),
    e(0xC013, [ECDHE, RSA, AES128, SHA, NONE, NONE, NONE, NONE]),
    e(0xC014, [TLS, ECDHE, RSA, WITH, AES, T_256, CBC, SHA]),
    e(0xC014, [ECDHE, RSA, AES256, SHA, NONE, NONE, NONE, NONE]),
    e(0xC023, [TLS, ECDHE, ECDSA, WITH, AES, T_128, CBC, SHA256]),
    e(0xC023, [ECDHE, ECDSA, AES128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC024, [TLS, ECDHE, ECDSA, WITH, AES, T_256, CBC, SHA384]),
    e(0xC024, [ECDHE, ECDSA, AES256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC025, [TLS, ECDH, ECDSA, WITH, AES, T_128, CBC, SHA256]),
    e(0xC025, [ECDH, ECDSA, AES128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC026, [TLS, ECDH, ECDSA, WITH, AES, T_256, CBC, SHA384]),
    e(0xC026, [ECDH, ECDSA, AES256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC027, [TLS, ECDHE, RSA, WITH, AES, T_128, CBC, SHA256]),
    e(0xC027, [ECDHE, RSA, AES128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC028, [TLS, ECDHE, RSA, WITH, AES, T_256, CBC, SHA384]),
    e(0xC028, [ECDHE, RSA, AES256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC029, [TLS, ECDH, RSA, WITH, AES, T_128, CBC, SHA256]),
    e(0xC029, [ECDH, RSA, AES128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC02A, [TLS, ECDH, RSA, WITH, AES, T_256, CBC, SHA384]),
    e(0xC02A, [ECDH, RSA, AES256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC02B, [TLS, ECDHE, ECDSA, WITH, AES, T_128, GCM, SHA256]),
    e(0xC02B, [ECDHE, ECDSA, AES128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC02C, [TLS, ECDHE, ECDSA, WITH, AES, T_256, GCM, SHA384]),
    e(0xC02C, [ECDHE, ECDSA, AES256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC02D, [TLS, ECDH, ECDSA, WITH, AES, T_128, GCM, SHA256]),
    e(0xC02D, [ECDH, ECDSA, AES128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC02E, [TLS, ECDH, ECDSA, WITH, AES, T_256, GCM, SHA384]),
    e(0xC02E, [ECDH, ECDSA, AES256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC02F, [TLS, ECDHE, RSA, WITH, AES, T_128, GCM, SHA256]),
    e(0xC02F, [ECDHE, RSA, AES128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC030, [TLS, ECDHE, RSA, WITH, AES, T_256, GCM, SHA384]),
    e(0xC030, [ECDHE, RSA, AES256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC031, [TLS, ECDH, RSA, WITH, AES, T_128, GCM, SHA256]),
    e(0xC031, [ECDH, RSA, AES128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC032, [TLS, ECDH, RSA, WITH, AES, T_256, GCM, SHA384]),
    e(0xC032, [ECDH, RSA, AES256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xCCA8, [TLS, ECDHE, RSA, WITH, CHACHA20, POLY1305, SHA256, NONE]),
    e(0xCCA8, [ECDHE, RSA, CHACHA20, POLY1305, NONE, NONE, NONE, NONE]),
    e(0xCCA9, [TLS, ECDHE, ECDSA, WITH, CHACHA20, POLY1305, SHA256, NONE]),
    e(0xCCA9, [ECDHE, ECDSA, CHACHA20, POLY1305, NONE, NONE, NONE, NONE]),

    e(0x0001, [TLS, RSA, WITH, NULL, MD5, NONE, NONE, NONE]),
    e(0x0001, [NULL, MD5, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x0002, [TLS, RSA, WITH, NULL, SHA, NONE, NONE, NONE]),
    e(0x0002, [NULL, SHA, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x002C, [TLS, PSK, WITH, NULL, SHA, NONE, NONE, NONE]),
    e(0x002C, [PSK, NULL, SHA, NONE, NONE, NONE, NONE, NONE]),
    e(0x002D, [TLS, DHE, PSK, WITH, NULL, SHA, NONE, NONE]),
    e(0x002D, [DHE, PSK, NULL, SHA, NONE, NONE, NONE, NONE]),
    e(0x002E, [TLS, RSA, PSK, WITH, NULL, SHA, NONE, NONE]),
    e(0x002E, [RSA, PSK, NULL, SHA, NONE, NONE, NONE, NONE]),
    e(0x0033, [TLS, DHE, RSA, WITH, AES, T_128, CBC, SHA]),
    e(0x0033, [DHE, RSA, AES128, SHA, NONE, NONE, NONE, NONE]),
    e(0x0039, [TLS, DHE, RSA, WITH, AES, T_256, CBC, SHA]),
    e(0x0039, [DHE, RSA, AES256, SHA, NONE, NONE, NONE, NONE]),
    e(0x003B, [TLS, RSA, WITH, NULL, SHA256, NONE, NONE, NONE]),
    e(0x003B, [NULL, SHA256, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x0067, [TLS, DHE, RSA, WITH, AES, T_128, CBC, SHA256]),
    e(0x0067, [DHE, RSA, AES128, SHA256, NONE, NONE, NONE, NONE]),
    e(0x006B, [TLS, DHE, RSA, WITH, AES, T_256, CBC, SHA256]),
    e(0x006B, [DHE, RSA, AES256, SHA256, NONE, NONE, NONE, NONE]),
    e(0x008C, [TLS, PSK, WITH, AES, T_128, CBC, SHA, NONE]),
    e(0x008C, [PSK, AES128, CBC, SHA, NONE, NONE, NONE, NONE]),
    e(0x008D, [TLS, PSK, WITH, AES, T_256, CBC, SHA, NONE]),
    e(0x008D, [PSK, AES256, CBC, SHA, NONE, NONE, NONE, NONE]),
    e(0x0090, [TLS, DHE, PSK, WITH, AES, T_128, CBC, SHA]),
    e(0x0090, [DHE, PSK, AES128, CBC, SHA, NONE, NONE, NONE]),
    e(0x0091, [TLS, DHE, PSK, WITH, AES, T_256, CBC, SHA]),
    e(0x0091, [DHE, PSK, AES256, CBC, SHA, NONE, NONE, NONE]),
    e(0x0094, [TLS, RSA, PSK, WITH, AES, T_128, CBC, SHA]),
    e(0x0094, [RSA, PSK, AES128, CBC, SHA, NONE, NONE, NONE]),
    e(0x0095, [TLS, RSA, PSK, WITH, AES, T_256, CBC, SHA]),
    e(0x0095, [RSA, PSK, AES256, CBC, SHA, NONE, NONE, NONE]),
    e(0x009E, [TLS, DHE, RSA, WITH, AES, T_128, GCM, SHA256]),
    e(0x009E, [DHE, RSA, AES128, GCM, SHA256, NONE, NONE, NONE]),
    e(0x009F, [TLS, DHE, RSA, WITH, AES, T_256, GCM, SHA384]),
    e(0x009F, [DHE, RSA, AES256, GCM, SHA384, NONE, NONE, NONE]),
    e(0x00A8, [TLS, PSK, WITH, AES, T_128, GCM, SHA256, NONE]),
    e(0x00A8, [PSK, AES128, GCM, SHA256, NONE, NONE, NONE, NONE]),
    e(0x00A9, [TLS, PSK, WITH, AES, T_256, GCM, SHA384, NONE]),
    e(0x00A9, [PSK, AES256, GCM, SHA384, NONE, NONE, NONE, NONE]),
    e(0x00AA, [TLS, DHE, PSK, WITH, AES, T_128, GCM, SHA256]),
    e(0x00AA, [DHE, PSK, AES128, GCM, SHA256, NONE, NONE, NONE]),
    e(0x00AB, [TLS, DHE, PSK, WITH, AES, T_256, GCM, SHA384]),
    e(0x00AB, [DHE, PSK, AES256, GCM, SHA384, NONE, NONE, NONE]),
    e(0x00AC, [TLS, RSA, PSK, WITH, AES, T_128, GCM, SHA256]),
    e(0x00AC, [RSA, PSK, AES128, GCM, SHA256, NONE, NONE, NONE]),
    e(0x00AD, [TLS, RSA, PSK, WITH, AES, T_256, GCM, SHA384]),
    e(0x00AD, [RSA, PSK, AES256, GCM, SHA384, NONE, NONE, NONE]),
    e(0x00AE, [TLS, PSK, WITH, AES, T_128, CBC, SHA256, NONE]),
    e(0x00AE, [PSK, AES128, CBC, SHA256, NONE, NONE, NONE, NONE]),
    e(0x00AF, [TLS, PSK, WITH, AES, T_256, CBC, SHA384, NONE]),
    e(0x00AF, [PSK, AES256, CBC, SHA384, NONE, NONE, NONE, NONE]),
    e(0x00B0, [TLS, PSK, WITH, NULL, SHA256, NONE, NONE, NONE]),
    e(0x00B0, [PSK, NULL, SHA256, NONE, NONE, NONE, NONE, NONE]),
    e(0x00B1, [TLS, PSK, WITH, NULL, SHA384, NONE, NONE, NONE]),
    e(0x00B1, [PSK, NULL, SHA384, NONE, NONE, NONE, NONE, NONE]),
    e(0x00B2, [TLS, DHE, PSK, WITH, AES, T_128, CBC, SHA256]),
    e(0x00B2, [DHE, PSK, AES128, CBC, SHA256, NONE, NONE, NONE]),
    e(0x00B3, [TLS, DHE, PSK, WITH, AES, T_256, CBC, SHA384]),
    e(0x00B3, [DHE, PSK, AES256, CBC, SHA384, NONE, NONE, NONE]),
    e(0x00B4, [TLS, DHE, PSK, WITH, NULL, SHA256, NONE, NONE]),
    e(0x00B4, [DHE, PSK, NULL, SHA256, NONE, NONE, NONE, NONE]),
    e(0x00B5, [TLS, DHE, PSK, WITH, NULL, SHA384, NONE, NONE]),
    e(0x00B5, [DHE, PSK, NULL, SHA384, NONE, NONE, NONE, NONE]),
    e(0x00B6, [TLS, RSA, PSK, WITH, AES, T_128, CBC, SHA256]),
    e(0x00B6, [RSA, PSK, AES128, CBC, SHA256, NONE, NONE, NONE]),
    e(0x00B7, [TLS, RSA, PSK, WITH, AES, T_256, CBC, SHA384]),
    e(0x00B7, [RSA, PSK, AES256, CBC, SHA384, NONE, NONE, NONE]),
    e(0x00B8, [TLS, RSA, PSK, WITH, NULL, SHA256, NONE, NONE]),
    e(0x00B8, [RSA, PSK, NULL, SHA256, NONE, NONE, NONE, NONE]),
    e(0x00B9, [TLS, RSA, PSK, WITH, NULL, SHA384, NONE, NONE]),
    e(0x00B9, [RSA, PSK, NULL, SHA384, NONE, NONE, NONE, NONE]),
    e(0x1301, [TLS, AES, T_128, GCM, SHA256, NONE, NONE, NONE]),
    e(0x1302, [TLS, AES, T_256, GCM, SHA384, NONE, NONE, NONE]),
    e(0x1303, [TLS, CHACHA20, POLY1305, SHA256, NONE, NONE, NONE, NONE]),
    e(0x1304, [TLS, AES, T_128, CCM, SHA256, NONE, NONE, NONE]),
    e(0x1305, [TLS, AES, T_128, CCM, T_8, SHA256, NONE, NONE]),
    e(0xC001, [TLS, ECDH, ECDSA, WITH, NULL, SHA, NONE, NONE]),
    e(0xC001, [ECDH, ECDSA, NULL, SHA, NONE, NONE, NONE, NONE]),
    e(0xC006, [TLS, ECDHE, ECDSA, WITH, NULL, SHA, NONE, NONE]),
    e(0xC006, [ECDHE, ECDSA, NULL, SHA, NONE, NONE, NONE, NONE]),
    e(0xC00B, [TLS, ECDH, RSA, WITH, NULL, SHA, NONE, NONE]),
    e(0xC00B, [ECDH, RSA, NULL, SHA, NONE, NONE, NONE, NONE]),
    e(0xC010, [TLS, ECDHE, RSA, WITH, NULL, SHA, NONE, NONE]),
    e(0xC010, [ECDHE, RSA, NULL, SHA, NONE, NONE, NONE, NONE]),
    e(0xC035, [TLS, ECDHE, PSK, WITH, AES, T_128, CBC, SHA]),
    e(0xC035, [ECDHE, PSK, AES128, CBC, SHA, NONE, NONE, NONE]),
    e(0xC036, [TLS, ECDHE, PSK, WITH, AES, T_256, CBC, SHA]),
    e(0xC036, [ECDHE, PSK, AES256, CBC, SHA, NONE, NONE, NONE]),
    e(0xCCAB, [TLS, PSK, WITH, CHACHA20, POLY1305, SHA256, NONE, NONE]),
    e(0xCCAB, [PSK, CHACHA20, POLY1305, NONE, NONE, NONE, NONE, NONE]),

    e(0xC09C, [TLS, RSA, WITH, AES, T_128, CCM, NONE, NONE]),
    e(0xC09C, [AES128, CCM, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0xC09D, [TLS, RSA, WITH, AES, T_256, CCM, NONE, NONE]),
    e(0xC09D, [AES256, CCM, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0xC0A0, [TLS, RSA, WITH, AES, T_128, CCM, T_8, NONE]),
    e(0xC0A0, [AES128, CCM8, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0xC0A1, [TLS, RSA, WITH, AES, T_256, CCM, T_8, NONE]),
    e(0xC0A1, [AES256, CCM8, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0xC0AC, [TLS, ECDHE, ECDSA, WITH, AES, T_128, CCM, NONE]),
    e(0xC0AC, [ECDHE, ECDSA, AES128, CCM, NONE, NONE, NONE, NONE]),
    e(0xC0AD, [TLS, ECDHE, ECDSA, WITH, AES, T_256, CCM, NONE]),
    e(0xC0AD, [ECDHE, ECDSA, AES256, CCM, NONE, NONE, NONE, NONE]),
    e(0xC0AE, [TLS, ECDHE, ECDSA, WITH, AES, T_128, CCM, T_8]),
    e(0xC0AE, [ECDHE, ECDSA, AES128, CCM8, NONE, NONE, NONE, NONE]),
    e(0xC0AF, [TLS, ECDHE, ECDSA, WITH, AES, T_256, CCM, T_8]),
    e(0xC0AF, [ECDHE, ECDSA, AES256, CCM8, NONE, NONE, NONE, NONE]),

    e(0x0041, [TLS, RSA, WITH, CAMELLIA, T_128, CBC, SHA, NONE]),
    e(0x0041, [CAMELLIA128, SHA, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x0045, [TLS, DHE, RSA, WITH, CAMELLIA, T_128, CBC, SHA]),
    e(0x0045, [DHE, RSA, CAMELLIA128, SHA, NONE, NONE, NONE, NONE]),
    e(0x0084, [TLS, RSA, WITH, CAMELLIA, T_256, CBC, SHA, NONE]),
    e(0x0084, [CAMELLIA256, SHA, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x0088, [TLS, DHE, RSA, WITH, CAMELLIA, T_256, CBC, SHA]),
    e(0x0088, [DHE, RSA, CAMELLIA256, SHA, NONE, NONE, NONE, NONE]),
    e(0x00BA, [TLS, RSA, WITH, CAMELLIA, T_128, CBC, SHA256, NONE]),
    e(0x00BA, [CAMELLIA128, SHA256, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x00BE, [TLS, DHE, RSA, WITH, CAMELLIA, T_128, CBC, SHA256]),
    e(0x00BE, [DHE, RSA, CAMELLIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0x00C0, [TLS, RSA, WITH, CAMELLIA, T_256, CBC, SHA256, NONE]),
    e(0x00C0, [CAMELLIA256, SHA256, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0x00C4, [TLS, DHE, RSA, WITH, CAMELLIA, T_256, CBC, SHA256]),
    e(0x00C4, [DHE, RSA, CAMELLIA256, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC037, [TLS, ECDHE, PSK, WITH, AES, T_128, CBC, SHA256]),
    e(0xC037, [ECDHE, PSK, AES128, CBC, SHA256, NONE, NONE, NONE]),
    e(0xC038, [TLS, ECDHE, PSK, WITH, AES, T_256, CBC, SHA384]),
    e(0xC038, [ECDHE, PSK, AES256, CBC, SHA384, NONE, NONE, NONE]),
    e(0xC039, [TLS, ECDHE, PSK, WITH, NULL, SHA, NONE, NONE]),
    e(0xC039, [ECDHE, PSK, NULL, SHA, NONE, NONE, NONE, NONE]),
    e(0xC03A, [TLS, ECDHE, PSK, WITH, NULL, SHA256, NONE, NONE]),
    e(0xC03A, [ECDHE, PSK, NULL, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC03B, [TLS, ECDHE, PSK, WITH, NULL, SHA384, NONE, NONE]),
    e(0xC03B, [ECDHE, PSK, NULL, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC03C, [TLS, RSA, WITH, ARIA, T_128, CBC, SHA256, NONE]),
    e(0xC03C, [ARIA128, SHA256, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0xC03D, [TLS, RSA, WITH, ARIA, T_256, CBC, SHA384, NONE]),
    e(0xC03D, [ARIA256, SHA384, NONE, NONE, NONE, NONE, NONE, NONE]),
    e(0xC044, [TLS, DHE, RSA, WITH, ARIA, T_128, CBC, SHA256]),
    e(0xC044, [DHE, RSA, ARIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC045, [TLS, DHE, RSA, WITH, ARIA, T_256, CBC, SHA384]),
    e(0xC045, [DHE, RSA, ARIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC048, [TLS, ECDHE, ECDSA, WITH, ARIA, T_128, CBC, SHA256]),
    e(0xC048, [ECDHE, ECDSA, ARIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC049, [TLS, ECDHE, ECDSA, WITH, ARIA, T_256, CBC, SHA384]),
    e(0xC049, [ECDHE, ECDSA, ARIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC04A, [TLS, ECDH, ECDSA, WITH, ARIA, T_128, CBC, SHA256]),
    e(0xC04A, [ECDH, ECDSA, ARIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC04B, [TLS, ECDH, ECDSA, WITH, ARIA, T_256, CBC, SHA384]),
    e(0xC04B, [ECDH, ECDSA, ARIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC04C, [TLS, ECDHE, RSA, WITH, ARIA, T_128, CBC, SHA256]),
    e(0xC04C, [ECDHE, ARIA128, SHA256, NONE, NONE, NONE, NONE, NONE]),
    e(0xC04D, [TLS, ECDHE, RSA, WITH, ARIA, T_256, CBC, SHA384]),
    e(0xC04D, [ECDHE, ARIA256, SHA384, NONE, NONE, NONE, NONE, NONE]),
    e(0xC04E, [TLS, ECDH, RSA, WITH, ARIA, T_128, CBC, SHA256]),
    e(0xC04E, [ECDH, ARIA128, SHA256, NONE, NONE, NONE, NONE, NONE]),
    e(0xC04F, [TLS, ECDH, RSA, WITH, ARIA, T_256, CBC, SHA384]),
    e(0xC04F, [ECDH, ARIA256, SHA384, NONE, NONE, NONE, NONE, NONE]),
    e(0xC050, [TLS, RSA, WITH, ARIA, T_128, GCM, SHA256, NONE]),
    e(0xC050, [ARIA128, GCM, SHA256, NONE, NONE, NONE, NONE, NONE]),
    e(0xC051, [TLS, RSA, WITH, ARIA, T_256, GCM, SHA384, NONE]),
    e(0xC051, [ARIA256, GCM, SHA384, NONE, NONE, NONE, NONE, NONE]),
    e(0xC052, [TLS, DHE, RSA, WITH, ARIA, T_128, GCM, SHA256]),
    e(0xC052, [DHE, RSA, ARIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC053, [TLS, DHE, RSA, WITH, ARIA, T_256, GCM, SHA384]),
    e(0xC053, [DHE, RSA, ARIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC05C, [TLS, ECDHE, ECDSA, WITH, ARIA, T_128, GCM, SHA256]),
    e(0xC05C, [ECDHE, ECDSA, ARIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC05D, [TLS, ECDHE, ECDSA, WITH, ARIA, T_256, GCM, SHA384]),
    e(0xC05D, [ECDHE, ECDSA, ARIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC05E, [TLS, ECDH, ECDSA, WITH, ARIA, T_128, GCM, SHA256]),
    e(0xC05E, [ECDH, ECDSA, ARIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC05F, [TLS, ECDH, ECDSA, WITH, ARIA, T_256, GCM, SHA384]),
    e(0xC05F, [ECDH, ECDSA, ARIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC060, [TLS, ECDHE, RSA, WITH, ARIA, T_128, GCM, SHA256]),
    e(0xC060, [ECDHE, ARIA128, GCM, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC061, [TLS, ECDHE, RSA, WITH, ARIA, T_256, GCM, SHA384]),
    e(0xC061, [ECDHE, ARIA256, GCM, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC062, [TLS, ECDH, RSA, WITH, ARIA, T_128, GCM, SHA256]),
    e(0xC062, [ECDH, ARIA128, GCM, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC063, [TLS, ECDH, RSA, WITH, ARIA, T_256, GCM, SHA384]),
    e(0xC063, [ECDH, ARIA256, GCM, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC064, [TLS, PSK, WITH, ARIA, T_128, CBC, SHA256, NONE]),
    e(0xC064, [PSK, ARIA128, SHA256, NONE, NONE, NONE, NONE, NONE]),
    e(0xC065, [TLS, PSK, WITH, ARIA, T_256, CBC, SHA384, NONE]),
    e(0xC065, [PSK, ARIA256, SHA384, NONE, NONE, NONE, NONE, NONE]),
    e(0xC066, [TLS, DHE, PSK, WITH, ARIA, T_128, CBC, SHA256]),
    e(0xC066, [DHE, PSK, ARIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC067, [TLS, DHE, PSK, WITH, ARIA, T_256, CBC, SHA384]),
    e(0xC067, [DHE, PSK, ARIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC068, [TLS, RSA, PSK, WITH, ARIA, T_128, CBC, SHA256]),
    e(0xC068, [RSA, PSK, ARIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC069, [TLS, RSA, PSK, WITH, ARIA, T_256, CBC, SHA384]),
    e(0xC069, [RSA, PSK, ARIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC06A, [TLS, PSK, WITH, ARIA, T_128, GCM, SHA256, NONE]),
    e(0xC06A, [PSK, ARIA128, GCM, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC06B, [TLS, PSK, WITH, ARIA, T_256, GCM, SHA384, NONE]),
    e(0xC06B, [PSK, ARIA256, GCM, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC06C, [TLS, DHE, PSK, WITH, ARIA, T_128, GCM, SHA256]),
    e(0xC06C, [DHE, PSK, ARIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC06D, [TLS, DHE, PSK, WITH, ARIA, T_256, GCM, SHA384]),
    e(0xC06D, [DHE, PSK, ARIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC06E, [TLS, RSA, PSK, WITH, ARIA, T_128, GCM, SHA256]),
    e(0xC06E, [RSA, PSK, ARIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC06F, [TLS, RSA, PSK, WITH, ARIA, T_256, GCM, SHA384]),
    e(0xC06F, [RSA, PSK, ARIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC070, [TLS, ECDHE, PSK, WITH, ARIA, T_128, CBC, SHA256]),
    e(0xC070, [ECDHE, PSK, ARIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC071, [TLS, ECDHE, PSK, WITH, ARIA, T_256, CBC, SHA384]),
    e(0xC071, [ECDHE, PSK, ARIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC072, [TLS, ECDHE, ECDSA, WITH, CAMELLIA, T_128, CBC, SHA256]),
    e(0xC072, [ECDHE, ECDSA, CAMELLIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC073, [TLS, ECDHE, ECDSA, WITH, CAMELLIA, T_256, CBC, SHA384]),
    e(0xC073, [ECDHE, ECDSA, CAMELLIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC074, [TLS, ECDH, ECDSA, WITH, CAMELLIA, T_128, CBC, SHA256]),
    e(0xC074, [ECDH, ECDSA, CAMELLIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC075, [TLS, ECDH, ECDSA, WITH, CAMELLIA, T_256, CBC, SHA384]),
    e(0xC075, [ECDH, ECDSA, CAMELLIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC076, [TLS, ECDHE, RSA, WITH, CAMELLIA, T_128, CBC, SHA256]),
    e(0xC076, [ECDHE, RSA, CAMELLIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC077, [TLS, ECDHE, RSA, WITH, CAMELLIA, T_256, CBC, SHA384]),
    e(0xC077, [ECDHE, RSA, CAMELLIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC078, [TLS, ECDH, RSA, WITH, CAMELLIA, T_128, CBC, SHA256]),
    e(0xC078, [ECDH, CAMELLIA128, SHA256, NONE, NONE, NONE, NONE, NONE]),
    e(0xC079, [TLS, ECDH, RSA, WITH, CAMELLIA, T_256, CBC, SHA384]),
    e(0xC079, [ECDH, CAMELLIA256, SHA384, NONE, NONE, NONE, NONE, NONE]),
    e(0xC07A, [TLS, RSA, WITH, CAMELLIA, T_128, GCM, SHA256, NONE]),
    e(0xC07A, [CAMELLIA128, GCM, SHA256, NONE, NONE, NONE, NONE, NONE]),
    e(0xC07B, [TLS, RSA, WITH, CAMELLIA, T_256, GCM, SHA384, NONE]),
    e(0xC07B, [CAMELLIA256, GCM, SHA384, NONE, NONE, NONE, NONE, NONE]),
    e(0xC07C, [TLS, DHE, RSA, WITH, CAMELLIA, T_128, GCM, SHA256]),
    e(0xC07C, [DHE, RSA, CAMELLIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC07D, [TLS, DHE, RSA, WITH, CAMELLIA, T_256, GCM, SHA384]),
    e(0xC07D, [DHE, RSA, CAMELLIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC086, [TLS, ECDHE, ECDSA, WITH, CAMELLIA, T_128, GCM, SHA256]),
    e(0xC086, [ECDHE, ECDSA, CAMELLIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC087, [TLS, ECDHE, ECDSA, WITH, CAMELLIA, T_256, GCM, SHA384]),
    e(0xC087, [ECDHE, ECDSA, CAMELLIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC088, [TLS, ECDH, ECDSA, WITH, CAMELLIA, T_128, GCM, SHA256]),
    e(0xC088, [ECDH, ECDSA, CAMELLIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC089, [TLS, ECDH, ECDSA, WITH, CAMELLIA, T_256, GCM, SHA384]),
    e(0xC089, [ECDH, ECDSA, CAMELLIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC08A, [TLS, ECDHE, RSA, WITH, CAMELLIA, T_128, GCM, SHA256]),
    e(0xC08A, [ECDHE, CAMELLIA128, GCM, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC08B, [TLS, ECDHE, RSA, WITH, CAMELLIA, T_256, GCM, SHA384]),
    e(0xC08B, [ECDHE, CAMELLIA256, GCM, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC08C, [TLS, ECDH, RSA, WITH, CAMELLIA, T_128, GCM, SHA256]),
    e(0xC08C, [ECDH, CAMELLIA128, GCM, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC08D, [TLS, ECDH, RSA, WITH, CAMELLIA, T_256, GCM, SHA384]),
    e(0xC08D, [ECDH, CAMELLIA256, GCM, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC08E, [TLS, PSK, WITH, CAMELLIA, T_128, GCM, SHA256, NONE]),
    e(0xC08E, [PSK, CAMELLIA128, GCM, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC08F, [TLS, PSK, WITH, CAMELLIA, T_256, GCM, SHA384, NONE]),
    e(0xC08F, [PSK, CAMELLIA256, GCM, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC090, [TLS, DHE, PSK, WITH, CAMELLIA, T_128, GCM, SHA256]),
    e(0xC090, [DHE, PSK, CAMELLIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC091, [TLS, DHE, PSK, WITH, CAMELLIA, T_256, GCM, SHA384]),
    e(0xC091, [DHE, PSK, CAMELLIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC092, [TLS, RSA, PSK, WITH, CAMELLIA, T_128, GCM, SHA256]),
    e(0xC092, [RSA, PSK, CAMELLIA128, GCM, SHA256, NONE, NONE, NONE]),
    e(0xC093, [TLS, RSA, PSK, WITH, CAMELLIA, T_256, GCM, SHA384]),
    e(0xC093, [RSA, PSK, CAMELLIA256, GCM, SHA384, NONE, NONE, NONE]),
    e(0xC094, [TLS, PSK, WITH, CAMELLIA, T_128, CBC, SHA256, NONE]),
    e(0xC094, [PSK, CAMELLIA128, SHA256, NONE, NONE, NONE, NONE, NONE]),
    e(0xC095, [TLS, PSK, WITH, CAMELLIA, T_256, CBC, SHA384, NONE]),
    e(0xC095, [PSK, CAMELLIA256, SHA384, NONE, NONE, NONE, NONE, NONE]),
    e(0xC096, [TLS, DHE, PSK, WITH, CAMELLIA, T_128, CBC, SHA256]),
    e(0xC096, [DHE, PSK, CAMELLIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC097, [TLS, DHE, PSK, WITH, CAMELLIA, T_256, CBC, SHA384]),
    e(0xC097, [DHE, PSK, CAMELLIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC098, [TLS, RSA, PSK, WITH, CAMELLIA, T_128, CBC, SHA256]),
    e(0xC098, [RSA, PSK, CAMELLIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC099, [TLS, RSA, PSK, WITH, CAMELLIA, T_256, CBC, SHA384]),
    e(0xC099, [RSA, PSK, CAMELLIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC09A, [TLS, ECDHE, PSK, WITH, CAMELLIA, T_128, CBC, SHA256]),
    e(0xC09A, [ECDHE, PSK, CAMELLIA128, SHA256, NONE, NONE, NONE, NONE]),
    e(0xC09B, [TLS, ECDHE, PSK, WITH, CAMELLIA, T_256, CBC, SHA384]),
    e(0xC09B, [ECDHE, PSK, CAMELLIA256, SHA384, NONE, NONE, NONE, NONE]),
    e(0xC09E, [TLS, DHE, RSA, WITH, AES, T_128, CCM, NONE]),
    e(0xC09E, [DHE, RSA, AES128, CCM, NONE, NONE, NONE, NONE]),
    e(0xC09F, [TLS, DHE, RSA, WITH, AES, T_256, CCM, NONE]),
    e(0xC09F, [DHE, RSA, AES256, CCM, NONE, NONE, NONE, NONE]),
    e(0xC0A2, [TLS, DHE, RSA, WITH, AES, T_128, CCM, T_8]),
    e(0xC0A2, [DHE, RSA, AES128, CCM8, NONE, NONE, NONE, NONE]),
    e(0xC0A3, [TLS, DHE, RSA, WITH, AES, T_256, CCM, T_8]),
    e(0xC0A3, [DHE, RSA, AES256, CCM8, NONE, NONE, NONE, NONE]),
    e(0xC0A4, [TLS, PSK, WITH, AES, T_128, CCM, NONE, NONE]),
    e(0xC0A4, [PSK, AES128, CCM, NONE, NONE, NONE, NONE, NONE]),
    e(0xC0A5, [TLS, PSK, WITH, AES, T_256, CCM, NONE, NONE]),
    e(0xC0A5, [PSK, AES256, CCM, NONE, NONE, NONE, NONE, NONE]),
    e(0xC0A6, [TLS, DHE, PSK, WITH, AES, T_128, CCM, NONE]),
    e(0xC0A6, [DHE, PSK, AES128, CCM, NONE, NONE, NONE, NONE]),
    e(0xC0A7, [TLS, DHE, PSK, WITH, AES, T_256, CCM, NONE]),
    e(0xC0A7, [DHE, PSK, AES256, CCM, NONE, NONE, NONE, NONE]),
    e(0xC0A8, [TLS, PSK, WITH, AES, T_128, CCM, T_8, NONE]),
    e(0xC0A8, [PSK, AES128, CCM8, NONE, NONE, NONE, NONE, NONE]),
    e(0xC0A9, [TLS, PSK, WITH, AES, T_256, CCM, T_8, NONE]),
    e(0xC0A9, [PSK, AES256, CCM8, NONE, NONE, NONE, NONE, NONE]),
    e(0xC0AA, [TLS, PSK, DHE, WITH, AES, T_128, CCM, T_8]),
    e(0xC0AA, [DHE, PSK, AES128, CCM8, NONE, NONE, NONE, NONE]),
    e(0xC0AB, [TLS, PSK, DHE, WITH, AES, T_256, CCM, T_8]),
    e(0xC0AB, [DHE, PSK, AES256, CCM8, NONE, NONE, NONE, NONE]),
    e(0xCCAA, [TLS, DHE, RSA, WITH, CHACHA20, POLY1305, SHA256, NONE]),
    e(0xCCAA, [DHE, RSA, CHACHA20, POLY1305, NONE, NONE, NONE, NONE]),
    e(0xCCAC, [TLS, ECDHE, PSK, WITH, CHACHA20, POLY1305, SHA256, NONE]),
    e(0xCCAC, [ECDHE, PSK, CHACHA20, POLY1305, NONE, NONE, NONE, NONE]),
    e(0xCCAD, [TLS, DHE, PSK, WITH, CHACHA20, POLY1305, SHA256, NONE]),
    e(0xCCAD, [DHE, PSK, CHACHA20, POLY1305, NONE, NONE, NONE, NONE]),
    e(0xCCAE, [TLS, RSA, PSK, WITH, CHACHA20, POLY1305, SHA256, NONE]),
    e(0xCCAE, [RSA, PSK, CHACHA20, POLY1305, NONE, NONE, NONE, NONE]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::decoder::decode_name;
    use crate::suite::encoder::encode_name;
    use crate::suite::token::TOKENS;

    #[test]
    fn test_index_constants_match_dictionary() {
        assert_eq!(TOKENS[TLS as usize], "TLS");
        assert_eq!(TOKENS[T_128 as usize], "128");
        assert_eq!(TOKENS[T_8 as usize], "8");
        assert_eq!(TOKENS[CHACHA20 as usize], "CHACHA20");
        assert_eq!(TOKENS[CAMELLIA256 as usize], "CAMELLIA256");
        assert_eq!(TOKENS[NONE as usize], "");
    }

    #[test]
    fn test_entries_are_well_formed() {
        for entry in CIPHER_SUITES {
            assert_ne!(entry.id, 0, "0x0000 is the not-found sentinel");

            let indices = entry.name.indices();
            assert_ne!(indices[0], 0, "entry for 0x{:04x} has no name", entry.id);
            for index in indices {
                assert!(
                    (index as usize) < TOKENS.len(),
                    "entry for 0x{:04x} references index {index} outside the dictionary",
                    entry.id
                );
            }
            // Padding must be trailing only.
            let mut seen_padding = false;
            for index in indices {
                if index == 0 {
                    seen_padding = true;
                } else {
                    assert!(!seen_padding, "entry for 0x{:04x} has an interior hole", entry.id);
                }
            }
        }
    }

    #[test]
    fn test_full_table_round_trip() {
        for entry in CIPHER_SUITES {
            let name = decode_name(&entry.name).unwrap();
            let packed = encode_name(&name).unwrap();
            assert_eq!(
                packed, entry.name,
                "0x{:04x} ({name}) did not survive decode/encode",
                entry.id
            );
        }
    }

    #[test]
    fn test_duplicate_names_share_an_id() {
        for (i, a) in CIPHER_SUITES.iter().enumerate() {
            for b in &CIPHER_SUITES[i + 1..] {
                if a.name == b.name {
                    assert_eq!(
                        a.id, b.id,
                        "packed name is ambiguous between 0x{:04x} and 0x{:04x}",
                        a.id, b.id
                    );
                }
            }
        }
    }
}
