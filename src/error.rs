use thiserror::Error;

/// Precondition violations surfaced by the analysis operations.
/// Every case is deterministic, so there are no retry semantics: an operation
/// either fully succeeds or fails before producing any output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Two buffers had to agree on length (exact XOR, hamming distance) or a
    /// buffer had to be a whole number of blocks (ECB), and it was not.
    #[error("incompatible lengths: {left} and {right}")]
    InvalidLength { left: usize, right: usize },

    /// The ciphertext is too short for the requested search range.
    #[error("need at least {needed} bytes of input, got {actual}")]
    InsufficientInput { needed: usize, actual: usize },

    /// Zero-length text where a per-character average is undefined.
    #[error("empty input")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, CryptoError>;
