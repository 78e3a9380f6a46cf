//! Core engine types: players, state, settings, RNG, errors.
//!
//! These are the values that flow through every transition. Nothing in this
//! module changes phase on its own; see `session` for that.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{
    GameSettings, RoundLimit, SessionConfig, HIGHLIGHT_REPLACE_PROBABILITY, MAX_BEST_MOMENTS,
    MAX_PLAYERS, MIN_PLAYERS,
};
pub use error::SetupError;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{BestMoments, Phase, SessionState};
