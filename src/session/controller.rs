//! The owning controller the presentation layer talks to.

use tracing::debug;

use super::machine;
use super::resolver::{resolve_turn, TurnOutcome};
use super::standings::Standings;
use crate::cards::Catalog;
use crate::core::{GameRng, GameSettings, Phase, SessionConfig, SessionState, SetupError};

/// Owns the current `SessionState`, the RNG and the catalog.
///
/// Each call replaces the state wholesale with the value returned by the
/// matching transition and hands back a reference to it.
///
/// ## Example
///
/// ```
/// use talk_joy::cards::Category;
/// use talk_joy::core::{GameSettings, Phase, RoundLimit, SessionConfig};
/// use talk_joy::session::{Session, TurnOutcome};
///
/// let mut session = Session::new(SessionConfig::default().with_seed(7));
/// session.start_setup();
/// session
///     .confirm_settings(
///         GameSettings::new(2)
///             .with_category(Category::LightTalk)
///             .with_round_limit(RoundLimit::Rounds(1)),
///     )
///     .unwrap();
/// session.submit_names(&["Ari", ""]);
///
/// session.submit_outcome(TurnOutcome::Success);
/// session.submit_outcome(TurnOutcome::Pass);
///
/// assert_eq!(session.phase(), Phase::Result);
/// assert!(session.share_text().contains("1st: Ari (1 pts)"));
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    state: SessionState,
    rng: GameRng,
    catalog: Catalog,
}

impl Session {
    /// Create a session with the standard catalog.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_catalog(config, Catalog::standard())
    }

    /// Create a session that deals from a custom catalog.
    #[must_use]
    pub fn with_catalog(config: SessionConfig, catalog: Catalog) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), cards = catalog.len(), "session created");

        Self {
            state: SessionState::new(),
            rng,
            catalog,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Seed of the session RNG, for reproducing a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Home -> Setup.
    pub fn start_setup(&mut self) -> &SessionState {
        self.state = machine::start_setup(&self.state);
        &self.state
    }

    /// Setup -> NameEntry. On a validation error the state is unchanged.
    pub fn confirm_settings(&mut self, settings: GameSettings) -> Result<&SessionState, SetupError> {
        self.state = machine::confirm_settings(&self.state, &settings)?;
        Ok(&self.state)
    }

    /// NameEntry -> Play. See `machine::submit_names` for the panics.
    pub fn submit_names<S: AsRef<str>>(&mut self, names: &[S]) -> &SessionState {
        self.state = machine::submit_names(&self.state, names, &self.catalog, &mut self.rng);
        &self.state
    }

    /// Resolve the current turn with a raw score delta.
    ///
    /// # Panics
    ///
    /// Panics outside `Phase::Play`.
    pub fn submit_turn(&mut self, score_delta: i64) -> &SessionState {
        self.state = resolve_turn(&self.state, score_delta, &mut self.rng);
        &self.state
    }

    /// Resolve the current turn with one of the fail/pass/success buttons.
    pub fn submit_outcome(&mut self, outcome: TurnOutcome) -> &SessionState {
        self.submit_turn(outcome.score_delta())
    }

    /// Play -> Result immediately.
    pub fn end_game_now(&mut self) -> &SessionState {
        self.state = machine::end_game_now(&self.state);
        &self.state
    }

    /// Result -> Home.
    pub fn restart(&mut self) -> &SessionState {
        self.state = machine::restart(&self.state);
        &self.state
    }

    /// Ranking of the current players.
    #[must_use]
    pub fn standings(&self) -> Standings {
        Standings::from_state(&self.state)
    }

    /// Share payload for the result screen.
    #[must_use]
    pub fn share_text(&self) -> String {
        self.standings().share_text()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
