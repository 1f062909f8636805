//! AES (Rijndael) single-block cipher for 128, 192 and 256-bit keys.
//!
//! This crate follows the FIPS-197 specification and provides:
//! - GF(2^8) arithmetic and S-boxes derived from it at compile time.
//! - Key schedule for all three key sizes.
//! - Single-block encryption and decryption.
//!
//! Modes of operation, padding and multi-block processing are left to
//! callers. The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
mod round;
pub mod sbox;
mod schedule;
mod state;

pub use crate::block::{block_from_slice, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, Aes};
pub use crate::error::{Error, Result};
pub use crate::key::{KeySize, RoundKeys, Word, NB};
pub use crate::schedule::expand_key;
