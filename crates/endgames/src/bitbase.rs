//! KP vs K bitbase.
//!
//! Every placement of white king, black king and a white pawn on files a-d
//! is classified by retrograde analysis: positions decided immediately are
//! seeded first, then the rest are resolved from their successors until a
//! pass changes nothing. Only the win/not-win bit is kept.

use std::time::Instant;

use chess_core::{
    distance, file_of, king_attacks, make_square, pawn_attacks, rank_of, Bitboard, Color, FILE_D,
    RANK_2, RANK_7,
};
use once_cell::sync::Lazy;
use tracing::debug;

/// Side to move x pawn squares (files a-d, ranks 2-7) x white king x black king.
pub const MAX_INDEX: usize = 2 * 24 * 64 * 64;

const INVALID: u8 = 0;
const UNKNOWN: u8 = 1;
const DRAW: u8 = 2;
const WIN: u8 = 4;

static KPK: Lazy<KpkBitbase> = Lazy::new(KpkBitbase::generate);

/// Force the table to be built now instead of on first probe.
pub fn init() {
    Lazy::force(&KPK);
}

/// True when white wins with king on `wksq`, pawn on `wpsq` and black king on
/// `bksq`, `us` to move. The pawn must be on files a-d.
pub fn probe_kpk(wksq: u8, wpsq: u8, bksq: u8, us: Color) -> bool {
    KPK.probe(wksq, wpsq, bksq, us)
}

#[inline]
fn index(us: Color, bksq: u8, wksq: u8, psq: u8) -> usize {
    wksq as usize
        | (bksq as usize) << 6
        | us.idx() << 12
        | (file_of(psq) as usize) << 13
        | ((RANK_7 - rank_of(psq)) as usize) << 15
}

pub struct KpkBitbase {
    wins: Vec<u64>,
}

impl KpkBitbase {
    pub fn generate() -> Self {
        let start = Instant::now();

        let mut db: Vec<KpkPosition> = (0..MAX_INDEX).map(KpkPosition::seed).collect();

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for idx in 0..MAX_INDEX {
                if db[idx].result == UNKNOWN {
                    let result = db[idx].classify(&db);
                    if result != UNKNOWN {
                        db[idx].result = result;
                        changed = true;
                    }
                }
            }
        }

        let mut wins = vec![0u64; MAX_INDEX / 64];
        for (idx, p) in db.iter().enumerate() {
            if p.result == WIN {
                wins[idx / 64] |= 1u64 << (idx % 64);
            }
        }

        let bitbase = KpkBitbase { wins };
        debug!(
            wins = bitbase.win_count(),
            passes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built KPK bitbase"
        );
        bitbase
    }

    pub fn probe(&self, wksq: u8, wpsq: u8, bksq: u8, us: Color) -> bool {
        debug_assert!(file_of(wpsq) <= FILE_D, "pawn must be on files a-d");
        let idx = index(us, bksq, wksq, wpsq);
        self.wins[idx / 64] & (1u64 << (idx % 64)) != 0
    }

    pub fn win_count(&self) -> u32 {
        self.wins.iter().map(|w| w.count_ones()).sum()
    }
}

#[derive(Clone, Copy)]
struct KpkPosition {
    us: Color,
    wksq: u8,
    bksq: u8,
    psq: u8,
    result: u8,
}

impl KpkPosition {
    /// Decode `idx` and classify the positions that need no search.
    fn seed(idx: usize) -> Self {
        let wksq = (idx & 0x3F) as u8;
        let bksq = ((idx >> 6) & 0x3F) as u8;
        let us = if (idx >> 12) & 1 == 0 { Color::White } else { Color::Black };
        let psq = make_square(((idx >> 13) & 3) as i8, RANK_7 - (idx >> 15) as i8);
        let push = psq + 8;

        let result = if distance(wksq, bksq) <= 1
            || wksq == psq
            || bksq == psq
            || (us == Color::White && pawn_attacks(psq, Color::White).contains(bksq))
        {
            INVALID
        } else if us == Color::White {
            // Promotes without being captured
            if rank_of(psq) == RANK_7
                && wksq != push
                && (distance(bksq, push) > 1 || king_attacks(wksq).contains(push))
            {
                WIN
            } else {
                UNKNOWN
            }
        } else {
            let guarded = king_attacks(wksq) | pawn_attacks(psq, Color::White);
            let stalemate = (king_attacks(bksq) & !guarded).is_empty();
            let takes_pawn =
                !(king_attacks(bksq) & Bitboard::from_square(psq) & !king_attacks(wksq)).is_empty();
            if stalemate || takes_pawn { DRAW } else { UNKNOWN }
        };

        KpkPosition { us, wksq, bksq, psq, result }
    }

    /// Combine the results of every successor. White needs one winning move;
    /// black needs one drawing move.
    fn classify(&self, db: &[KpkPosition]) -> u8 {
        let mut r = INVALID;

        match self.us {
            Color::White => {
                for to in king_attacks(self.wksq) {
                    r |= db[index(Color::Black, self.bksq, to, self.psq)].result;
                }
                if rank_of(self.psq) < RANK_7 {
                    let s = self.psq + 8;
                    r |= db[index(Color::Black, self.bksq, self.wksq, s)].result;

                    if rank_of(self.psq) == RANK_2 && s != self.wksq && s != self.bksq {
                        r |= db[index(Color::Black, self.bksq, self.wksq, s + 8)].result;
                    }
                }
                if r & WIN != 0 {
                    WIN
                } else if r & UNKNOWN != 0 {
                    UNKNOWN
                } else {
                    DRAW
                }
            }
            Color::Black => {
                for to in king_attacks(self.bksq) {
                    r |= db[index(Color::White, to, self.wksq, self.psq)].result;
                }
                if r & DRAW != 0 {
                    DRAW
                } else if r & UNKNOWN != 0 {
                    UNKNOWN
                } else {
                    WIN
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "bitbase_tests.rs"]
mod bitbase_tests;
