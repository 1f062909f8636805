//! Key sizes and expanded round keys.

use core::fmt;

use log::debug;

use crate::error::{Error, Result};

/// Number of 32-bit words in a block (`Nb`).
pub const NB: usize = 4;

/// Capacity of a schedule: `Nb * (14 + 1)` words for AES-256.
pub(crate) const MAX_SCHEDULE_WORDS: usize = NB * 15;

/// A four-byte word of the key schedule.
pub type Word = [u8; 4];

/// Supported AES variants, selected by key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 16-byte key, 10 rounds.
    Aes128,
    /// 24-byte key, 12 rounds.
    Aes192,
    /// 32-byte key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a key length in bytes to its variant.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            _ => {
                debug!("rejecting {len}-byte key");
                Err(Error::Configuration { len })
            }
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Key length in words (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Number of words in the expanded schedule, `Nb * (Nr + 1)`.
    pub const fn schedule_len(self) -> usize {
        NB * (self.nr() + 1)
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.key_len() * 8)
    }
}

/// Expanded round keys for one cipher key.
///
/// Immutable once derived; one schedule may be shared by any number of
/// threads encrypting or decrypting independent blocks.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundKeys {
    size: KeySize,
    words: [Word; MAX_SCHEDULE_WORDS],
}

impl RoundKeys {
    pub(crate) fn from_words(size: KeySize, words: [Word; MAX_SCHEDULE_WORDS]) -> Self {
        Self { size, words }
    }

    /// Key size the schedule was derived from.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    /// All schedule words, exactly `Nb * (Nr + 1)` of them.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words[..self.size.schedule_len()]
    }

    /// Returns the four words consumed by AddRoundKey in `round` (0..=Nr).
    ///
    /// # Panics
    ///
    /// Panics if `round > Nr`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &[Word] {
        assert!(round <= self.rounds(), "round {round} out of range");
        &self.words[round * NB..(round + 1) * NB]
    }
}

// Round keys are secret material; keep them out of debug output.
impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_per_key_size() {
        let expected = [
            (KeySize::Aes128, 16, 4, 10, 44),
            (KeySize::Aes192, 24, 6, 12, 52),
            (KeySize::Aes256, 32, 8, 14, 60),
        ];
        for (size, len, nk, nr, words) in expected {
            assert_eq!(KeySize::from_len(len), Ok(size));
            assert_eq!(size.key_len(), len);
            assert_eq!(size.nk(), nk);
            assert_eq!(size.nr(), nr);
            assert_eq!(size.schedule_len(), words);
        }
    }

    #[test]
    fn rejects_unsupported_lengths() {
        for len in [0, 8, 15, 17, 20, 31, 33, 64] {
            assert_eq!(KeySize::from_len(len), Err(Error::Configuration { len }));
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(KeySize::Aes128.to_string(), "AES-128");
        assert_eq!(KeySize::Aes192.to_string(), "AES-192");
        assert_eq!(KeySize::Aes256.to_string(), "AES-256");
    }

    #[test]
    fn debug_output_hides_words() {
        let keys = RoundKeys::from_words(KeySize::Aes128, [[0xab; 4]; MAX_SCHEDULE_WORDS]);
        let rendered = format!("{keys:?}");
        assert!(rendered.contains("Aes128"));
        assert!(!rendered.contains("171"));
    }
}
