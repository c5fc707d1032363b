//! Compact cipher-suite name encoding and lookup.
//!
//! A cipher-suite name is a sequence of up to 8 dictionary fragments
//! ("ECDHE", "AES128", ...). Each name is packed into 6 bytes of 6-bit
//! dictionary indices, and a reference table maps the packed names to
//! 16-bit IANA identifiers, in both the RFC/IANA and the legacy
//! OpenSSL-style naming conventions.

mod decoder;
mod encoder;
mod error;
mod packed;
mod resolver;
mod table;
mod token;

pub use decoder::decode_name;
pub use encoder::encode_name;
pub use error::SuiteError;
pub use packed::PackedName;
pub use resolver::{id_from_name, name_from_id, try_name_from_id, walk, SuiteWalk};
pub use table::{CsEntry, CIPHER_SUITES};
pub use token::{token_index, token_str, TOKENS};
