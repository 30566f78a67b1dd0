//! Zobrist keys for material signatures.
//!
//! A material key identifies *which* pieces are on the board, not where they
//! stand. It is the XOR of one random value per (color, kind, ordinal) triple,
//! where the ordinal runs from 0 to the number of such pieces minus one. Two
//! positions with the same piece multiset therefore hash identically, no
//! matter how the pieces are arranged.

use crate::types::{Color, PieceKind};

/// Largest number of same-kind, same-color pieces the key table covers.
pub const MAX_PIECE_ORDINAL: usize = 16;

/// Pre-computed random values for material hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][ordinal]
    pub material: [[[u64; MAX_PIECE_ORDINAL]; 6]; 2],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate keys with xorshift64 from a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x123456789ABCDEF0u64; // Fixed seed

        let mut material = [[[0u64; MAX_PIECE_ORDINAL]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut n = 0;
                while n < MAX_PIECE_ORDINAL {
                    state = xorshift64(state);
                    material[color][kind][n] = state;
                    n += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        ZobristKeys { material }
    }

    /// Key contribution of the `ordinal`-th piece of this color and kind.
    #[inline(always)]
    pub fn material_key(&self, color: Color, kind: PieceKind, ordinal: usize) -> u64 {
        self.material[color.idx()][kind.idx()][ordinal]
    }

    /// Material key for a full table of piece counts, indexed [color][kind].
    pub fn key_for_counts(&self, counts: &[[u32; 6]; 2]) -> u64 {
        let mut key = 0u64;
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                for n in 0..counts[color.idx()][kind.idx()] as usize {
                    key ^= self.material_key(color, kind, n);
                }
            }
        }
        key
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
