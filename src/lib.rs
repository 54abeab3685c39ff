//! Statistical cryptanalysis of classical byte-oriented XOR ciphers.
//!
//! The crate recovers key material from ciphertext without knowing the key:
//! - [`corpus`] builds a character-frequency language model from reference text,
//! - [`analyze::single_byte`] brute-forces single-byte XOR keys against it,
//! - [`analyze::multibyte`] estimates repeating-key lengths from normalized
//!   Hamming distance and reconstructs the full key column by column,
//! - [`analyze::cipher`] detects ECB mode from repeated ciphertext blocks,
//! - [`encrypt`] holds the XOR transforms themselves and [`cipher`] the
//!   block-cipher seam used to apply a recovered or known AES key.

pub mod analyze;
pub mod cipher;
pub mod corpus;
pub mod encrypt;
pub mod error;

pub use error::{CryptoError, Result};
