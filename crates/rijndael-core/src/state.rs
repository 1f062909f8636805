//! The 4x4 byte matrix a block occupies while it is being transformed.

use crate::block::Block;

/// Column-major cipher state: `columns[c][r]` holds input byte `4 * c + r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) columns: [[u8; 4]; 4],
}

impl State {
    pub(crate) fn from_block(block: &Block) -> Self {
        let mut columns = [[0u8; 4]; 4];
        for (column, chunk) in columns.iter_mut().zip(block.chunks_exact(4)) {
            column.copy_from_slice(chunk);
        }
        Self { columns }
    }

    pub(crate) fn into_block(self) -> Block {
        let mut block = [0u8; 16];
        for (chunk, column) in block.chunks_exact_mut(4).zip(self.columns.iter()) {
            chunk.copy_from_slice(column);
        }
        block
    }

    /// Iterates over every byte of the state.
    pub(crate) fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.columns.iter_mut().flatten()
    }

    pub(crate) fn row(&self, r: usize) -> [u8; 4] {
        [
            self.columns[0][r],
            self.columns[1][r],
            self.columns[2][r],
            self.columns[3][r],
        ]
    }

    pub(crate) fn set_row(&mut self, r: usize, row: [u8; 4]) {
        for (column, byte) in self.columns.iter_mut().zip(row) {
            column[r] = byte;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_layout_is_column_major() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let state = State::from_block(&block);
        assert_eq!(state.columns[0], [0, 1, 2, 3]);
        assert_eq!(state.columns[3], [12, 13, 14, 15]);
        assert_eq!(state.row(1), [1, 5, 9, 13]);
        assert_eq!(state.into_block(), block);
    }

    #[test]
    fn set_row_touches_one_row() {
        let mut state = State::from_block(&[0u8; 16]);
        state.set_row(2, [0xaa, 0xbb, 0xcc, 0xdd]);
        assert_eq!(state.row(2), [0xaa, 0xbb, 0xcc, 0xdd]);
        assert_eq!(state.row(0), [0; 4]);
        assert_eq!(state.row(3), [0; 4]);
    }
}
