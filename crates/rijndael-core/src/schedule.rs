//! Key expansion for 128, 192 and 256-bit keys.

use log::trace;

use crate::error::Result;
use crate::gf;
use crate::key::{KeySize, RoundKeys, Word, MAX_SCHEDULE_WORDS};
use crate::sbox::sbox;

/// Number of round constants any key size consumes (AES-128 uses all ten).
const RCON_LEN: usize = 10;

const fn build_rcon() -> [u8; RCON_LEN] {
    let mut rcon = [0u8; RCON_LEN];
    let mut value = 0x01u8;
    let mut i = 0;
    while i < RCON_LEN {
        rcon[i] = value;
        value = gf::xtime(value);
        i += 1;
    }
    rcon
}

/// Round constants: successive powers of x, starting at 0x01.
const RCON: [u8; RCON_LEN] = build_rcon();

fn rot_word(word: Word) -> Word {
    let [b0, b1, b2, b3] = word;
    [b1, b2, b3, b0]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_words(a: Word, b: Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expands a 16, 24 or 32-byte key into its round-key schedule.
pub fn expand_key(key: &[u8]) -> Result<RoundKeys> {
    let size = KeySize::from_len(key.len())?;
    let nk = size.nk();
    let total = size.schedule_len();

    let mut w = [[0u8; 4]; MAX_SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = xor_words(w[i - nk], temp);
    }

    trace!("expanded {size} key schedule ({total} words)");
    Ok(RoundKeys::from_words(size, w))
}
