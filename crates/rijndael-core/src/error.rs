//! Error type shared by key setup and block operations.

use thiserror::Error;

/// Failures surfaced by the cipher. Both are detected before any
/// transformation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The key is not 16, 24 or 32 bytes long.
    #[error("invalid key length: {len} bytes (expected 16, 24 or 32)")]
    Configuration {
        /// Length of the rejected key.
        len: usize,
    },
    /// The input block is not exactly 16 bytes long.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidInput {
        /// Length of the rejected block.
        len: usize,
    },
}

/// Result alias for cipher operations.
pub type Result<T> = core::result::Result<T, Error>;
