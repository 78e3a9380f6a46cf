//! # talk-joy
//!
//! Session engine for a single-device party game: a group passes one phone
//! around, answers talk prompts or performs action cards, and scores points.
//!
//! ## Design Principles
//!
//! 1. **State as a value**: Every transition takes a `SessionState` and
//!    returns the next one. There is no ambient global state, so each
//!    transition can be tested on its own.
//!
//! 2. **Deterministic when seeded**: All randomness (deck shuffle, forbidden
//!    words, highlight curation) flows through one `GameRng`.
//!
//! 3. **Presentation stays outside**: Timers, animations and sharing are the
//!    host's job. The engine never looks at the clock.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Deck and players are `im` vectors, so
//!   copying the state per turn shares storage with the previous state.
//!
//! - **Errors vs. bugs**: User-correctable input returns `SetupError`; caller
//!   bugs (turns outside play, wrong name count) panic.
//!
//! ## Modules
//!
//! - `core`: Players, settings, session state, RNG, errors
//! - `cards`: Card definitions and the catalog
//! - `deck`: Deck building
//! - `session`: Phase transitions, turn resolution, results, controller

pub mod cards;
pub mod core;
pub mod deck;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameSettings, Phase, Player, PlayerId, PlayerMap, RoundLimit, SessionConfig,
    SessionState, SetupError,
};

pub use crate::cards::{ActionTag, Card, CardId, Catalog, Category, ForbiddenWords};

pub use crate::deck::build_deck;

pub use crate::session::{EndReason, Session, Standings, TurnOutcome};
