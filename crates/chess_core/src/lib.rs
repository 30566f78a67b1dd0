//! Position layer for the endgame evaluator.
//!
//! Provides exactly what specialised endgame knowledge needs to read off a
//! board: per-side piece sets and counts, non-pawn material, attack sets,
//! check and passed-pawn predicates, the material hash used as a lookup key,
//! and a legal move generator for stalemate detection.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod error;
pub mod movegen;
pub mod types;
pub mod value;
pub mod zobrist;

pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use error::FenError;
pub use movegen::*;
pub use types::*;
pub use value::*;
pub use zobrist::ZOBRIST;
