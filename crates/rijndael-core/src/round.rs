//! AES round transformations.

use crate::gf::{mul, xtime};
use crate::key::Word;
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub(crate) fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub(crate) fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub(crate) fn shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_left(r);
        state.set_row(r, row);
    }
}

/// Rotates row `r` right by `r` positions.
#[inline]
pub(crate) fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_right(r);
        state.set_row(r, row);
    }
}

// Rows of the {2,3,1,1} circulant matrix.
fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

// Rows of the {14,11,13,9} circulant matrix.
fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = mul(a0, 0x0e) ^ mul(a1, 0x0b) ^ mul(a2, 0x0d) ^ mul(a3, 0x09);
    col[1] = mul(a0, 0x09) ^ mul(a1, 0x0e) ^ mul(a2, 0x0b) ^ mul(a3, 0x0d);
    col[2] = mul(a0, 0x0d) ^ mul(a1, 0x09) ^ mul(a2, 0x0e) ^ mul(a3, 0x0b);
    col[3] = mul(a0, 0x0b) ^ mul(a1, 0x0d) ^ mul(a2, 0x09) ^ mul(a3, 0x0e);
}

/// MixColumns over all four columns.
#[inline]
pub(crate) fn mix_columns(state: &mut State) {
    for column in state.columns.iter_mut() {
        mix_single_column(column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub(crate) fn inv_mix_columns(state: &mut State) {
    for column in state.columns.iter_mut() {
        inv_mix_single_column(column);
    }
}

/// XORs one round key (four words, one per column) into the state.
#[inline]
pub(crate) fn add_round_key(state: &mut State, round_key: &[Word]) {
    debug_assert_eq!(round_key.len(), 4);
    for (column, word) in state.columns.iter_mut().zip(round_key) {
        for (byte, k) in column.iter_mut().zip(word) {
            *byte ^= *k;
        }
    }
}
