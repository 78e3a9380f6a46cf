//! Game and engine configuration types.
//!
//! - `GameSettings`: what the setup screen produces (player count, card
//!   categories, optional rules, round limit)
//! - `RoundLimit`: finite round count or unlimited play
//! - `SessionConfig`: engine-level options for a `Session` controller

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use crate::cards::Category;

/// Minimum number of players.
pub const MIN_PLAYERS: usize = 1;

/// Maximum number of players.
pub const MAX_PLAYERS: usize = 20;

/// Maximum number of best-moment cards kept for the result screen.
pub const MAX_BEST_MOMENTS: usize = 3;

/// Chance that a successful turn replaces an existing highlight once all
/// highlight slots are filled.
pub const HIGHLIGHT_REPLACE_PROBABILITY: f64 = 0.2;

/// How many rounds a game lasts before it ends on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundLimit {
    /// End once this many full rotations have been played.
    Rounds(u32),
    /// Only the deck running out ends the game.
    Unlimited,
}

impl RoundLimit {
    /// The choices offered on the setup screen.
    pub const PRESETS: [RoundLimit; 3] = [
        RoundLimit::Rounds(10),
        RoundLimit::Rounds(20),
        RoundLimit::Unlimited,
    ];

    /// Check whether `round` is past the limit.
    #[must_use]
    pub fn is_exceeded_by(self, round: u32) -> bool {
        match self {
            RoundLimit::Rounds(limit) => round > limit,
            RoundLimit::Unlimited => false,
        }
    }
}

impl Default for RoundLimit {
    fn default() -> Self {
        RoundLimit::Rounds(10)
    }
}

impl std::fmt::Display for RoundLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundLimit::Rounds(n) => write!(f, "{} rounds", n),
            RoundLimit::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Settings chosen on the setup screen.
///
/// `categories` holds the selection as entered; `finalize` turns it into the
/// deck composition actually played (talk picks, then action, then event).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Number of players (1-20).
    pub player_count: usize,

    /// Card categories in deck-building order.
    pub categories: Vec<Category>,

    /// Attach forbidden words to talk cards.
    pub use_forbidden: bool,

    /// Include action cards.
    pub use_action: bool,

    pub round_limit: RoundLimit,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_count: 3,
            categories: Vec::new(),
            use_forbidden: true,
            use_action: true,
            round_limit: RoundLimit::default(),
        }
    }
}

impl GameSettings {
    /// Create settings for `player_count` players with no categories picked.
    pub fn new(player_count: usize) -> Self {
        assert_player_count(player_count);

        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Select a category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Select several categories in order.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Toggle forbidden-word mode.
    #[must_use]
    pub fn with_forbidden(mut self, enabled: bool) -> Self {
        self.use_forbidden = enabled;
        self
    }

    /// Toggle action cards.
    #[must_use]
    pub fn with_action(mut self, enabled: bool) -> Self {
        self.use_action = enabled;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_round_limit(mut self, limit: RoundLimit) -> Self {
        if let RoundLimit::Rounds(n) = limit {
            assert!(n > 0, "Round limit must be at least 1");
        }
        self.round_limit = limit;
        self
    }

    /// Validate the selection and produce the settings a game is played with.
    ///
    /// Talk categories keep their selection order with repeats dropped.
    /// Action is appended when enabled and Event is always appended; any
    /// action or event entries in the input are ignored.
    pub fn finalize(&self) -> Result<GameSettings, SetupError> {
        assert_player_count(self.player_count);
        if let RoundLimit::Rounds(n) = self.round_limit {
            assert!(n > 0, "Round limit must be at least 1");
        }

        let mut categories: Vec<Category> = Vec::with_capacity(Category::ALL.len());
        for &category in &self.categories {
            if category.is_talk() && !categories.contains(&category) {
                categories.push(category);
            }
        }

        if categories.is_empty() {
            return Err(SetupError::EmptyCategorySelection);
        }

        if self.use_action {
            categories.push(Category::Action);
        }
        categories.push(Category::Event);

        Ok(GameSettings {
            categories,
            ..self.clone()
        })
    }
}

fn assert_player_count(player_count: usize) {
    assert!(
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
        "Player count must be {}-{}, got {}",
        MIN_PLAYERS,
        MAX_PLAYERS,
        player_count
    );
}

/// Engine-level configuration for a `Session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Use a fixed seed so games can be reproduced.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
