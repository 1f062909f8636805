//! Block representation helpers.

use log::debug;

use crate::error::{Error, Result};

/// Size of one cipher block in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// Copies `input` into a [`Block`], rejecting any other length.
pub fn block_from_slice(input: &[u8]) -> Result<Block> {
    Block::try_from(input).map_err(|_| {
        debug!("rejecting {}-byte block", input.len());
        Error::InvalidInput { len: input.len() }
    })
}
