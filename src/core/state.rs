//! Session state: one immutable value per step of the game.
//!
//! Every transition takes a `&SessionState` and returns a new one. The deck
//! and player list are `im` persistent vectors, so a transition that only
//! moves cursors shares the deck with the previous state instead of copying
//! it.
//!
//! ## Invariants
//!
//! - `current_card_index <= deck.len()`
//! - `current_player_index < players.len()` once a game has started
//! - `scores` has exactly one entry per player, in player order
//! - `best_moments.len() <= MAX_BEST_MOMENTS`
//! - `deck` is never empty while `phase == Phase::Play`

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{GameSettings, RoundLimit, MAX_BEST_MOMENTS};
use super::player::{Player, PlayerMap};
use crate::cards::Card;

/// Screen-level phase of the app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Home,
    Setup,
    NameEntry,
    Play,
    Result,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Home => "Home",
            Phase::Setup => "Setup",
            Phase::NameEntry => "NameEntry",
            Phase::Play => "Play",
            Phase::Result => "Result",
        };
        f.write_str(name)
    }
}

/// Highlight cards kept for the result screen.
pub type BestMoments = SmallVec<[Card; MAX_BEST_MOMENTS]>;

/// Complete state of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,

    /// Settings of the game in progress (defaults before the first game).
    pub settings: GameSettings,

    /// Settings confirmed on the setup screen, waiting for player names.
    pub staged_settings: Option<GameSettings>,

    /// Players in seating order.
    pub players: Vector<Player>,

    /// Shuffled deck, drawn front to back.
    pub deck: Vector<Card>,

    pub current_card_index: usize,
    pub current_player_index: usize,

    /// Round number (starts at 1).
    pub current_round: u32,

    /// Score per player id.
    pub scores: PlayerMap<i64>,

    pub best_moments: BestMoments,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Home,
            settings: GameSettings::default(),
            staged_settings: None,
            players: Vector::new(),
            deck: Vector::new(),
            current_card_index: 0,
            current_player_index: 0,
            current_round: 1,
            scores: PlayerMap::default(),
            best_moments: BestMoments::new(),
        }
    }
}

impl SessionState {
    /// The documented initial state: Home, no players, empty deck, default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a game is being played.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Play
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Result
    }

    /// Card being answered, if the deck is not exhausted.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.current_card_index)
    }

    /// Player whose turn it is, if a game has started.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Cards left to draw, including the current one.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len().saturating_sub(self.current_card_index)
    }

    /// Progress through the round limit as a percentage in `0.0..=100.0`.
    ///
    /// Unlimited games measure against 100 rounds.
    #[must_use]
    pub fn round_progress(&self) -> f64 {
        let limit = match self.settings.round_limit {
            RoundLimit::Rounds(n) => n,
            RoundLimit::Unlimited => 100,
        };
        (f64::from(self.current_round) / f64::from(limit) * 100.0).min(100.0)
    }

    /// Sum of all scores.
    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.scores.iter().map(|(_, score)| score).sum()
    }
}
