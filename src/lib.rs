//! Ciphermap: TLS cipher-suite name/id mapping
//!
//! A bidirectional mapping between TLS cipher-suite names and their
//! 16-bit IANA registry identifiers, ported from curl's compact
//! cipher-suite table. Both the RFC/IANA names
//! ("TLS_RSA_WITH_AES_128_CBC_SHA") and the legacy OpenSSL-style short
//! names ("AES128-SHA") resolve, so TLS backends that only accept
//! numeric identifiers can still honor name-based cipher lists.
//!
//! Names are not stored as strings: each one is packed into 6 bytes of
//! 6-bit token-dictionary indices, keeping the hundreds-strong reference
//! table small.
//!
//! ## Modules
//!
//! - `suite` - Packed-name codec, reference table, and lookups
//!
//! ```
//! use ciphermap::{id_from_name, name_from_id, walk};
//!
//! assert_eq!(id_from_name("ECDHE-RSA-AES256-SHA"), 0xC014);
//! assert_eq!(name_from_id(0x1301, true), "TLS_AES_128_GCM_SHA256");
//!
//! let ids: Vec<u16> = walk("AES128-SHA:AES256-SHA").map(|(_, id)| id).collect();
//! assert_eq!(ids, vec![0x002F, 0x0035]);
//! ```

pub mod suite;

pub use suite::{
    decode_name, encode_name, id_from_name, name_from_id, try_name_from_id, walk, CsEntry,
    PackedName, SuiteError, SuiteWalk, CIPHER_SUITES, TOKENS,
};
