//! Material signatures for endgame codes.
//!
//! A code such as `KBPKN` lists the strong side's pieces, then the weak
//! side's, each group starting with its king. The signature is the material
//! key of any position carrying that material, so it is obtained by building
//! a throwaway position from a synthetic FEN and hashing it.

use chess_core::{Color, Position};

use crate::error::EndgameError;

const PIECE_LETTERS: &str = "KQRBNP";

/// Material key of `code` with `strong` owning the first group.
///
/// Panics on a malformed code; codes coming from outside should go through
/// [`validate`] first.
pub fn key(code: &str, strong: Color) -> u64 {
    assert!(!code.is_empty() && code.len() < 8, "bad endgame code length: {code}");
    assert!(code.starts_with('K'), "endgame code must start with a king: {code}");

    let split = match code[1..].find('K') {
        Some(i) => i + 1,
        None => panic!("endgame code has no second king: {code}"),
    };

    let mut sides = [code[split..].to_string(), code[..split].to_string()];
    sides[strong.idx()] = sides[strong.idx()].to_ascii_lowercase();

    let fen = format!(
        "{}{}/8/8/8/8/8/8/{}{} w - - 0 10",
        sides[0],
        8 - sides[0].len(),
        sides[1],
        8 - sides[1].len(),
    );

    match Position::from_fen(&fen) {
        Ok(pos) => pos.material_key(),
        Err(e) => panic!("endgame code {code} produced an invalid FEN '{fen}': {e}"),
    }
}

/// Check that `code` is well formed for [`key`].
pub fn validate(code: &str) -> Result<(), EndgameError> {
    let malformed = |reason| EndgameError::MalformedCode {
        code: code.to_string(),
        reason,
    };

    if code.is_empty() || code.len() >= 8 {
        return Err(malformed("length must be between 1 and 7"));
    }
    if !code.starts_with('K') {
        return Err(malformed("must start with a king"));
    }
    if let Some(c) = code.chars().find(|c| !PIECE_LETTERS.contains(*c)) {
        return Err(malformed(if c.is_ascii_lowercase() {
            "piece letters must be upper case"
        } else {
            "unknown piece letter"
        }));
    }
    if code.matches('K').count() != 2 {
        return Err(malformed("must contain exactly two kings"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod signature_tests;
