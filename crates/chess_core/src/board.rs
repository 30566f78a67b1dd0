use crate::attacks::{attacks_bb, bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::{passed_pawn_mask, Bitboard};
use crate::error::FenError;
use crate::types::*;
use crate::value::{piece_value_mg, Value};
use crate::zobrist::{MAX_PIECE_ORDINAL, ZOBRIST};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };
}

/// A chess position: a square-indexed board mirrored by per-color and
/// per-kind bitboards, plus the FEN game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: [Option<Piece>; 64],
    by_color: [Bitboard; 2],
    by_kind: [Bitboard; 6],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Position {
    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            by_color: [Bitboard::EMPTY; 2],
            by_kind: [Bitboard::EMPTY; 6],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Parse Forsyth-Edwards Notation. Move counters are optional.
    ///
    /// Any arrangement with exactly one king per side is accepted, including
    /// pawns on the back ranks; material signatures are derived from such
    /// boards.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let mut pos = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let s = sq(file, rank).ok_or(FenError::BadRankWidth(rank_idx + 1))?;
                    pos.put_piece(s, Piece { color, kind });
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadRankWidth(rank_idx + 1));
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth(rank_idx + 1));
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(FenError::InvalidCastling(c)),
                }
            }
        }

        pos.en_passant = match parts[3] {
            "-" => None,
            coord => Some(
                coord_to_sq(coord).ok_or_else(|| FenError::InvalidEnPassant(coord.to_string()))?,
            ),
        };

        let counter = |field: Option<&&str>, default: u32| -> Result<u32, FenError> {
            match field {
                None => Ok(default),
                Some(s) => s.parse().map_err(|_| FenError::InvalidCounter(s.to_string())),
            }
        };
        pos.halfmove_clock = counter(parts.get(4), 0)?;
        pos.fullmove_number = counter(parts.get(5), 1)?;

        for color in Color::ALL {
            let kings = pos.count(color, PieceKind::King);
            if kings != 1 {
                return Err(FenError::KingCount { color, count: kings });
            }
            for kind in PieceKind::ALL {
                if pos.count(color, kind) as usize > MAX_PIECE_ORDINAL {
                    return Err(FenError::TooManyPieces { color, kind });
                }
            }
        }

        Ok(pos)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    /// Place `pc` on the empty square `sq`.
    pub fn put_piece(&mut self, sq: u8, pc: Piece) {
        debug_assert!(self.board[sq as usize].is_none());
        self.board[sq as usize] = Some(pc);
        self.by_color[pc.color.idx()].set(sq);
        self.by_kind[pc.kind.idx()].set(sq);
    }

    /// Clear `sq`, returning whatever stood there.
    pub fn remove_piece(&mut self, sq: u8) -> Option<Piece> {
        let pc = self.board[sq as usize].take()?;
        self.by_color[pc.color.idx()].clear(sq);
        self.by_kind[pc.kind.idx()].clear(sq);
        Some(pc)
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.remove_piece(sq);
        if let Some(pc) = pc {
            self.put_piece(sq, pc);
        }
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.by_color[0] | self.by_color[1]
    }

    #[inline(always)]
    pub fn pieces_of(&self, c: Color) -> Bitboard {
        self.by_color[c.idx()]
    }

    /// Pieces of `kind` for both colors.
    #[inline(always)]
    pub fn pieces_kind(&self, kind: PieceKind) -> Bitboard {
        self.by_kind[kind.idx()]
    }

    #[inline(always)]
    pub fn pieces(&self, c: Color, kind: PieceKind) -> Bitboard {
        self.by_color[c.idx()] & self.by_kind[kind.idx()]
    }

    #[inline(always)]
    pub fn count(&self, c: Color, kind: PieceKind) -> u32 {
        self.pieces(c, kind).popcount()
    }

    /// Square of the lowest-indexed piece of this color and kind. The caller
    /// guarantees at least one exists.
    #[inline(always)]
    pub fn square(&self, c: Color, kind: PieceKind) -> u8 {
        let bb = self.pieces(c, kind);
        debug_assert!(!bb.is_empty(), "no {c:?} {kind:?} on the board");
        bb.0.trailing_zeros() as u8
    }

    #[inline(always)]
    pub fn king_square(&self, c: Color) -> u8 {
        self.square(c, PieceKind::King)
    }

    /// Middlegame value of everything `c` owns except pawns and the king.
    pub fn non_pawn_material(&self, c: Color) -> Value {
        [
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ]
        .iter()
        .map(|&kind| self.count(c, kind) as Value * piece_value_mg(kind))
        .sum()
    }

    /// Bishops on both square colors.
    pub fn bishop_pair(&self, c: Color) -> bool {
        let bishops = self.pieces(c, PieceKind::Bishop);
        !(bishops & Bitboard::DARK_SQUARES).is_empty()
            && !(bishops & !Bitboard::DARK_SQUARES).is_empty()
    }

    /// Pieces of either color attacking `target`, given an occupancy.
    pub fn attackers_to(&self, target: u8, occupied: Bitboard) -> Bitboard {
        let rooks = self.pieces_kind(PieceKind::Rook) | self.pieces_kind(PieceKind::Queen);
        let bishops = self.pieces_kind(PieceKind::Bishop) | self.pieces_kind(PieceKind::Queen);

        (pawn_attacks(target, Color::Black) & self.pieces(Color::White, PieceKind::Pawn))
            | (pawn_attacks(target, Color::White) & self.pieces(Color::Black, PieceKind::Pawn))
            | (knight_attacks(target) & self.pieces_kind(PieceKind::Knight))
            | (king_attacks(target) & self.pieces_kind(PieceKind::King))
            | (rook_attacks(target, occupied) & rooks)
            | (bishop_attacks(target, occupied) & bishops)
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        !(self.attackers_to(target, self.occupied()) & self.pieces_of(by)).is_empty()
    }

    /// Enemy pieces giving check to the side to move.
    pub fn checkers(&self) -> Bitboard {
        let us = self.side_to_move;
        self.attackers_to(self.king_square(us), self.occupied()) & self.pieces_of(us.other())
    }

    pub fn in_check(&self, c: Color) -> bool {
        self.is_square_attacked(self.king_square(c), c.other())
    }

    /// Squares a non-pawn piece of `kind` on `sq` attacks, given the current
    /// occupancy.
    pub fn attacks_from(&self, kind: PieceKind, sq: u8) -> Bitboard {
        attacks_bb(kind, sq, self.occupied())
    }

    /// Squares a pawn of color `c` on `sq` would attack.
    pub fn pawn_attacks_from(&self, c: Color, sq: u8) -> Bitboard {
        pawn_attacks(sq, c)
    }

    /// No enemy pawn can block or capture a pawn of `c` on `sq`.
    pub fn pawn_passed(&self, c: Color, sq: u8) -> bool {
        (self.pieces(c.other(), PieceKind::Pawn) & passed_pawn_mask(c, sq)).is_empty()
    }

    /// Hash of the piece multiset, independent of where the pieces stand.
    pub fn material_key(&self) -> u64 {
        let mut counts = [[0u32; 6]; 2];
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                counts[color.idx()][kind.idx()] = self.count(color, kind);
            }
        }
        ZOBRIST.key_for_counts(&counts)
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");

        let undo_state = (
            self.castling.clone(),
            self.en_passant,
            self.halfmove_clock,
            self.fullmove_number,
        );

        self.en_passant = None;

        let mut captured = self.remove_piece(to);
        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let cs = shift(to, -pawn_push(moved.color));
            captured = self.remove_piece(cs);
            ep_captured_sq = Some(cs);
        }

        self.remove_piece(from);
        let promotion_rank = relative_rank(moved.color, to) == RANK_8;
        let placed = if moved.kind == PieceKind::Pawn && promotion_rank {
            Piece {
                color: moved.color,
                kind: mv.promo.unwrap_or(PieceKind::Queen),
            }
        } else {
            moved
        };
        self.put_piece(to, placed);

        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            let rook_squares = match (moved.color, from, to) {
                (Color::White, 4, 6) => Some((7, 5)),
                (Color::White, 4, 2) => Some((0, 3)),
                (Color::Black, 60, 62) => Some((63, 61)),
                (Color::Black, 60, 58) => Some((56, 59)),
                _ => None,
            };
            if let Some((rf, rt)) = rook_squares {
                let rook = self.remove_piece(rf);
                self.set_piece(rt, rook);
                rook_move = Some((rf, rt));
            }
        }

        // Any move touching a king or rook home square drops that right.
        for s in [from, to] {
            match s {
                0 => self.castling.wq = false,
                7 => self.castling.wk = false,
                4 => {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                56 => self.castling.bq = false,
                63 => self.castling.bk = false,
                60 => {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
                _ => {}
            }
        }

        if moved.kind == PieceKind::Pawn && rank_distance(from, to) == 2 {
            self.en_passant = Some(shift(from, pawn_push(moved.color)));
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        let (castling, en_passant, halfmove_clock, fullmove_number) = undo_state;
        Undo {
            captured,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.remove_piece(rt);
            self.set_piece(rf, rook);
        }

        // Promotions revert to the pawn that moved.
        self.remove_piece(mv.to);
        self.put_piece(mv.from, undo.moved_piece);

        match undo.ep_captured_sq {
            Some(cs) => self.set_piece(cs, undo.captured),
            None => self.set_piece(mv.to, undo.captured),
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
