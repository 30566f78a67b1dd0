//! Endgame probe
//!
//! Reports which endgame evaluators apply to a position and what they return.

use std::fmt;

use chess_core::{Bitboard, Color, FenError, PieceKind, Position, Value};
use endgames::{Endgames, ScaleFactor, ValueKind};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("bad FEN: {0}")]
    Fen(#[from] FenError),
    #[error("pawn on the first or last rank")]
    BackRankPawn,
    #[error("side not to move is in check")]
    OpponentInCheck,
}

/// Matched value endgame. `score` is from the side to move's point of view
/// and is absent when the evaluator cannot be applied to the position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueReport {
    pub code: &'static str,
    pub strong: &'static str,
    pub score: Option<Value>,
}

/// Matched scale endgame for one side. `factor` is absent when the rule had
/// no opinion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleReport {
    pub code: &'static str,
    pub strong: &'static str,
    pub factor: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub fen: String,
    pub material_key: String,
    pub value: Option<ValueReport>,
    pub scale: Vec<ScaleReport>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.scale.is_empty()
    }
}

fn side_name(c: Color) -> &'static str {
    match c {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Parse `fen` and run every matching evaluator.
pub fn analyze(endgames: &Endgames, fen: &str) -> Result<Report, ProbeError> {
    let pos = Position::from_fen(fen)?;

    let back_ranks = Bitboard::RANK_1 | Bitboard::RANK_8;
    if !(pos.pieces_kind(PieceKind::Pawn) & back_ranks).is_empty() {
        return Err(ProbeError::BackRankPawn);
    }
    if pos.in_check(pos.side_to_move.other()) {
        return Err(ProbeError::OpponentInCheck);
    }

    let probe = endgames.probe(&pos);

    let value = probe.value.map(|eg| {
        // The bare-king rule scores quiet positions only.
        let in_check = !pos.checkers().is_empty();
        let score = if eg.kind() == ValueKind::KXK && in_check {
            None
        } else {
            Some(eg.evaluate(&pos))
        };
        ValueReport { code: eg.code(), strong: side_name(eg.strong_side()), score }
    });

    let scale = Color::ALL
        .into_iter()
        .filter_map(|c| probe.scale[c.idx()])
        .map(|eg| {
            let sf = eg.scale(&pos);
            ScaleReport {
                code: eg.code(),
                strong: side_name(eg.strong_side()),
                factor: (!sf.is_none()).then(|| sf.get()),
            }
        })
        .collect();

    Ok(Report {
        fen: fen.to_string(),
        material_key: format!("{:016x}", pos.material_key()),
        value,
        scale,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.fen)?;
        writeln!(f, "  material key: {}", self.material_key)?;
        if self.is_empty() {
            return writeln!(f, "  no endgame evaluator");
        }
        if let Some(v) = &self.value {
            match v.score {
                Some(score) => writeln!(f, "  value {} ({}): {}", v.code, v.strong, score)?,
                None => writeln!(f, "  value {} ({}): not evaluated in check", v.code, v.strong)?,
            }
        }
        for s in &self.scale {
            let factor = match s.factor {
                Some(n) => format!("{}/{}", n, ScaleFactor::NORMAL.get()),
                None => "no opinion".to_string(),
            };
            writeln!(f, "  scale {} ({}): {}", s.code, s.strong, factor)?;
        }
        Ok(())
    }
}
