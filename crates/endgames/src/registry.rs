//! Endgame registry: material key to evaluator.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use chess_core::Color;

use crate::config::RegistryConfig;
use crate::endgame::{Endgame, EndgameKind, ScaleKind, ValueKind};
use crate::error::EndgameError;
use crate::signature;

static DEFAULT: Lazy<Endgames> = Lazy::new(Endgames::new);

/// Process-wide registry with the default endgames.
pub fn endgames() -> &'static Endgames {
    &DEFAULT
}

/// Two independent lookup tables, one per evaluator family. Each registered
/// code owns two entries, one per strong side, keyed by material signature.
///
/// `Endgames::default()` is empty; [`Endgames::new`] holds the standard set.
#[derive(Debug, Default)]
pub struct Endgames {
    values: FxHashMap<u64, Endgame<ValueKind>>,
    scales: FxHashMap<u64, Endgame<ScaleKind>>,
}

impl Endgames {
    /// Registry with every default endgame.
    pub fn new() -> Self {
        let mut endgames = Endgames::default();
        for &kind in ValueKind::REGISTERED {
            endgames.add(kind);
        }
        for &kind in ScaleKind::REGISTERED {
            endgames.add(kind);
        }
        info!(
            value = endgames.values.len(),
            scale = endgames.scales.len(),
            "endgame registry ready"
        );
        endgames
    }

    /// Registry with only the endgames named in `config`. Every code must be
    /// well formed and listed under the family it belongs to.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, EndgameError> {
        let mut endgames = Endgames::default();

        for code in &config.value {
            signature::validate(code)?;
            match ValueKind::from_code(code) {
                Some(kind) => endgames.add(kind),
                None if ScaleKind::from_code(code).is_some() => {
                    return Err(EndgameError::WrongFamily(code.clone()));
                }
                None => return Err(EndgameError::UnknownCode(code.clone())),
            }
        }
        for code in &config.scale {
            signature::validate(code)?;
            match ScaleKind::from_code(code) {
                Some(kind) => endgames.add(kind),
                None if ValueKind::from_code(code).is_some() => {
                    return Err(EndgameError::WrongFamily(code.clone()));
                }
                None => return Err(EndgameError::UnknownCode(code.clone())),
            }
        }

        info!(
            value = endgames.values.len(),
            scale = endgames.scales.len(),
            "endgame registry built from config"
        );
        Ok(endgames)
    }

    /// Register the evaluator for `code`, whichever family it belongs to.
    pub fn register(&mut self, code: &str) -> Result<(), EndgameError> {
        signature::validate(code)?;
        if let Some(kind) = ValueKind::from_code(code) {
            self.add(kind);
        } else if let Some(kind) = ScaleKind::from_code(code) {
            self.add(kind);
        } else {
            return Err(EndgameError::UnknownCode(code.to_string()));
        }
        Ok(())
    }

    fn add<K: Registrable>(&mut self, kind: K) {
        for strong in Color::ALL {
            let key = signature::key(kind.code(), strong);
            debug!(code = kind.code(), ?strong, key, "register endgame");
            K::table(self).insert(key, Endgame::new(kind, strong));
        }
    }

    #[inline]
    pub fn probe_value(&self, key: u64) -> Option<&Endgame<ValueKind>> {
        self.values.get(&key)
    }

    #[inline]
    pub fn probe_scale(&self, key: u64) -> Option<&Endgame<ScaleKind>> {
        self.scales.get(&key)
    }

    pub fn value_len(&self) -> usize {
        self.values.len()
    }

    pub fn scale_len(&self) -> usize {
        self.scales.len()
    }
}

/// Picks the table a kind lives in.
trait Registrable: EndgameKind {
    fn table(endgames: &mut Endgames) -> &mut FxHashMap<u64, Endgame<Self>>;
}

impl Registrable for ValueKind {
    fn table(endgames: &mut Endgames) -> &mut FxHashMap<u64, Endgame<Self>> {
        &mut endgames.values
    }
}

impl Registrable for ScaleKind {
    fn table(endgames: &mut Endgames) -> &mut FxHashMap<u64, Endgame<Self>> {
        &mut endgames.scales
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
