//! Recognizer and evaluator for known chess endgames.
//!
//! Positions are matched by material signature against a registry of
//! specialised evaluators. Value endgames return an exact score from the side
//! to move's point of view; scale endgames return a factor for damping the
//! ordinary evaluation when the stronger side's winning chances are slim.
//!
//! ```no_run
//! use chess_core::Position;
//! use endgames::endgames;
//!
//! let pos = Position::from_fen("8/8/8/4k3/8/8/8/1NB1K3 w - - 0 1").unwrap();
//! if let Some(score) = endgames().probe(&pos).evaluate(&pos) {
//!     println!("{score}");
//! }
//! ```

pub mod bitbase;
pub mod config;
pub mod endgame;
pub mod error;
pub mod material;
pub mod normalize;
pub mod registry;
pub mod scale;
pub mod signature;
pub mod tables;
pub mod value;

pub use config::RegistryConfig;
pub use endgame::{verify_material, Endgame, EndgameKind, ScaleFactor, ScaleKind, ValueKind};
pub use error::EndgameError;
pub use material::EndgameProbe;
pub use registry::{endgames, Endgames};
