use thiserror::Error;

/// Error type for the cipher-suite name codec.
///
/// These never escape the public lookup functions, which translate them
/// into the sentinel conventions (id 0, `TLS_UNKNOWN_0x...` display name).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuiteError {
    #[error("name fragment {0:?} is not in the token dictionary")]
    UnknownToken(String),
    #[error("cipher suite name has more than 8 fragments")]
    TooManyParts,
    #[error("packed token index {0} is outside the dictionary")]
    IndexOutOfRange(u8),
}
