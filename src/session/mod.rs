//! Game session engine: phase transitions, turn resolution, results.
//!
//! ## Key Types
//!
//! - `Session`: Owning controller exposing the calls the UI makes
//! - `TurnOutcome`: Fail / pass / success buttons
//! - `Standings`: Derived ranking and share text
//! - `EndReason`: Why a game ended
//!
//! The free functions in `machine` and `resolver` are the transitions
//! themselves; `Session` only threads state, RNG and catalog through them.

pub mod controller;
pub mod machine;
pub mod resolver;
pub mod standings;

pub use controller::Session;
pub use machine::{confirm_settings, end_game_now, restart, start_setup, submit_names, EndReason};
pub use resolver::{curate_highlights, end_reason, resolve_turn, TurnOutcome};
pub use standings::Standings;
