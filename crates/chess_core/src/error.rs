use thiserror::Error;

use crate::types::{Color, PieceKind};

/// Reasons a FEN string cannot be turned into a [`crate::Position`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in the board field, found {0}")]
    RankCount(usize),
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("rank {0} does not describe exactly 8 files")]
    BadRankWidth(usize),
    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
    #[error("{color:?} has {count} kings, expected exactly one")]
    KingCount { color: Color, count: u32 },
    #[error("too many {kind:?}s for {color:?}")]
    TooManyPieces { color: Color, kind: PieceKind },
}
