//! Single-block encryption and decryption.

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::{KeySize, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;
use crate::state::State;

fn encrypt(block: &Block, round_keys: &RoundKeys) -> Block {
    let nr = round_keys.rounds();
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.round_key(0));

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.round_key(round));
    }

    // No MixColumns in the final round.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.round_key(nr));

    state.into_block()
}

fn decrypt(block: &Block, round_keys: &RoundKeys) -> Block {
    let nr = round_keys.rounds();
    let mut state = State::from_block(block);

    add_round_key(&mut state, round_keys.round_key(nr));
    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.round_key(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.round_key(0));

    state.into_block()
}

/// Encrypts one 16-byte block with pre-expanded round keys.
///
/// Fails with [`Error::InvalidInput`](crate::Error::InvalidInput) unless
/// `plaintext` is exactly 16 bytes.
pub fn encrypt_block(plaintext: &[u8], round_keys: &RoundKeys) -> Result<Block> {
    let block = block_from_slice(plaintext)?;
    Ok(encrypt(&block, round_keys))
}

/// Decrypts one 16-byte block with pre-expanded round keys.
///
/// Fails with [`Error::InvalidInput`](crate::Error::InvalidInput) unless
/// `ciphertext` is exactly 16 bytes.
pub fn decrypt_block(ciphertext: &[u8], round_keys: &RoundKeys) -> Result<Block> {
    let block = block_from_slice(ciphertext)?;
    Ok(decrypt(&block, round_keys))
}

/// A cipher bound to one key, with its schedule derived at construction.
#[derive(Clone, Copy, Debug)]
pub struct Aes {
    round_keys: RoundKeys,
}

impl Aes {
    /// Expands `key` (16, 24 or 32 bytes) and returns a ready cipher.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            round_keys: expand_key(key)?,
        })
    }

    /// Variant selected by the key length.
    pub fn key_size(&self) -> KeySize {
        self.round_keys.key_size()
    }

    /// The expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts a block whose length is already fixed by its type.
    pub fn encrypt(&self, block: &Block) -> Block {
        encrypt(block, &self.round_keys)
    }

    /// Decrypts a block whose length is already fixed by its type.
    pub fn decrypt(&self, block: &Block) -> Block {
        decrypt(block, &self.round_keys)
    }

    /// Encrypts a byte slice that must be exactly one block long.
    pub fn encrypt_block(&self, plaintext: &[u8]) -> Result<Block> {
        encrypt_block(plaintext, &self.round_keys)
    }

    /// Decrypts a byte slice that must be exactly one block long.
    pub fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Block> {
        decrypt_block(ciphertext, &self.round_keys)
    }
}

impl From<RoundKeys> for Aes {
    fn from(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }
}
