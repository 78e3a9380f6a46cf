//! Phase transitions.
//!
//! ```text
//! Home --start_setup--> Setup --confirm_settings--> NameEntry --submit_names--> Play
//!   ^                                                                           |  ^
//!   |                                                   resolve_turn / end_game_now |
//!   +------------------------------ restart ------------- Result <--------------+--+
//! ```
//!
//! Each function takes the current state and returns the next one; the input
//! is never modified. Data-free actions that do not apply to the current
//! phase are ignored with a warning. Submitting names outside name entry, or
//! the wrong number of names, is a caller bug and panics.

use im::Vector;
use tracing::{debug, info, warn};

use crate::cards::Catalog;
use crate::core::{
    GameRng, GameSettings, Phase, Player, PlayerId, PlayerMap, SessionState, SetupError,
};
use crate::deck::build_deck;

/// Why a game reached the result screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// Every card was played.
    DeckExhausted,
    /// The last allowed round finished.
    RoundLimitReached,
    /// Someone pressed "end game now".
    EndedEarly,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            EndReason::DeckExhausted => "deck exhausted",
            EndReason::RoundLimitReached => "round limit reached",
            EndReason::EndedEarly => "ended early",
        };
        f.write_str(reason)
    }
}

fn ignored(state: &SessionState, action: &str) -> SessionState {
    warn!(phase = %state.phase, action, "ignoring action not valid in current phase");
    state.clone()
}

fn with_phase(state: &SessionState, phase: Phase) -> SessionState {
    debug!(from = %state.phase, to = %phase, "phase transition");
    SessionState {
        phase,
        ..state.clone()
    }
}

/// Home -> Setup.
#[must_use]
pub fn start_setup(state: &SessionState) -> SessionState {
    if state.phase != Phase::Home {
        return ignored(state, "start_setup");
    }
    with_phase(state, Phase::Setup)
}

/// Setup -> NameEntry.
///
/// Validates and finalizes `settings` (see `GameSettings::finalize`) and
/// stages them for `submit_names`. An empty talk selection is rejected and
/// the caller keeps its Setup state.
pub fn confirm_settings(
    state: &SessionState,
    settings: &GameSettings,
) -> Result<SessionState, SetupError> {
    if state.phase != Phase::Setup {
        return Ok(ignored(state, "confirm_settings"));
    }

    let staged = settings.finalize().map_err(|err| {
        debug!(%err, "settings rejected");
        err
    })?;

    debug!(
        players = staged.player_count,
        categories = ?staged.categories,
        round_limit = %staged.round_limit,
        "settings staged"
    );

    let mut next = with_phase(state, Phase::NameEntry);
    next.staged_settings = Some(staged);
    Ok(next)
}

/// NameEntry -> Play.
///
/// Seats the players (ids 1..=N, blank names replaced by "Player {N}"),
/// builds the deck from the staged settings and resets all cursors, scores
/// and highlights.
///
/// # Panics
///
/// Panics if the state is not in name entry, if `names.len()` differs from
/// the staged player count, or if the staged categories produce an empty deck.
#[must_use]
pub fn submit_names<S: AsRef<str>>(
    state: &SessionState,
    names: &[S],
    catalog: &Catalog,
    rng: &mut GameRng,
) -> SessionState {
    assert_eq!(
        state.phase,
        Phase::NameEntry,
        "Names submitted outside name entry"
    );
    let settings = match &state.staged_settings {
        Some(settings) => settings.clone(),
        None => panic!("Name entry reached without staged settings"),
    };
    assert_eq!(
        names.len(),
        settings.player_count,
        "Expected {} player names, got {}",
        settings.player_count,
        names.len()
    );

    let players: Vector<Player> = PlayerId::all(settings.player_count)
        .zip(names)
        .map(|(id, name)| Player::new(id, name.as_ref()))
        .collect();

    let deck = build_deck(&settings, catalog, rng);
    assert!(!deck.is_empty(), "Cannot start a game with an empty deck");

    info!(
        players = players.len(),
        deck = deck.len(),
        round_limit = %settings.round_limit,
        forbidden = settings.use_forbidden,
        "game started"
    );

    SessionState {
        phase: Phase::Play,
        scores: PlayerMap::with_value(settings.player_count, 0),
        settings,
        staged_settings: None,
        players,
        deck,
        current_card_index: 0,
        current_player_index: 0,
        current_round: 1,
        best_moments: Default::default(),
    }
}

/// Play -> Result, keeping everything scored so far.
#[must_use]
pub fn end_game_now(state: &SessionState) -> SessionState {
    if state.phase != Phase::Play {
        return ignored(state, "end_game_now");
    }
    info!(reason = %EndReason::EndedEarly, round = state.current_round, "game over");
    with_phase(state, Phase::Result)
}

/// Result -> Home, discarding the session.
#[must_use]
pub fn restart(state: &SessionState) -> SessionState {
    if state.phase != Phase::Result {
        return ignored(state, "restart");
    }
    debug!(from = %state.phase, to = %Phase::Home, "phase transition");
    SessionState::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;
    use crate::core::RoundLimit;

    fn setup_state() -> SessionState {
        start_setup(&SessionState::new())
    }

    fn name_entry_state(player_count: usize) -> SessionState {
        let settings = GameSettings::new(player_count)
            .with_category(Category::LightTalk)
            .with_forbidden(false)
            .with_round_limit(RoundLimit::Rounds(2));
        confirm_settings(&setup_state(), &settings).unwrap()
    }

    #[test]
    fn test_start_setup() {
        let home = SessionState::new();
        let setup = start_setup(&home);

        assert_eq!(setup.phase, Phase::Setup);
        assert_eq!(home.phase, Phase::Home);
    }

    #[test]
    fn test_confirm_settings_stages() {
        let state = name_entry_state(3);

        assert_eq!(state.phase, Phase::NameEntry);
        let staged = state.staged_settings.as_ref().unwrap();
        assert_eq!(staged.player_count, 3);
        assert_eq!(
            staged.categories,
            vec![Category::LightTalk, Category::Action, Category::Event]
        );
        // Not committed yet
        assert_eq!(state.settings, GameSettings::default());
    }

    #[test]
    fn test_confirm_settings_rejects_empty() {
        let setup = setup_state();
        let result = confirm_settings(&setup, &GameSettings::new(2));

        assert_eq!(result, Err(SetupError::EmptyCategorySelection));
        assert_eq!(setup.phase, Phase::Setup);
    }

    #[test]
    fn test_submit_names() {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(42);
        let state = submit_names(&name_entry_state(3), &["Ari", " ", "  Cy "], &catalog, &mut rng);

        assert_eq!(state.phase, Phase::Play);
        let names: Vec<_> = state.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ari", "Player 2", "Cy"]);
        let ids: Vec<_> = state.players.iter().map(|p| p.id.number()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // 10 light talk + 8 action + 5 event
        assert_eq!(state.deck.len(), 23);
        assert_eq!(state.scores.player_count(), 3);
        assert!(state.scores.iter().all(|(_, &s)| s == 0));
        assert_eq!(state.current_round, 1);
        assert_eq!(state.current_card_index, 0);
        assert_eq!(state.current_player_index, 0);
        assert!(state.best_moments.is_empty());
        assert!(state.staged_settings.is_none());
        assert_eq!(state.settings.round_limit, RoundLimit::Rounds(2));
    }

    #[test]
    #[should_panic(expected = "Expected 3 player names, got 2")]
    fn test_submit_names_wrong_count() {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(42);
        let _ = submit_names(&name_entry_state(3), &["Ari", "Bo"], &catalog, &mut rng);
    }

    #[test]
    #[should_panic(expected = "Names submitted outside name entry")]
    fn test_submit_names_wrong_phase() {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(42);
        let _ = submit_names(&setup_state(), &["Ari"], &catalog, &mut rng);
    }

    #[test]
    #[should_panic(expected = "empty deck")]
    fn test_submit_names_empty_catalog() {
        let catalog = Catalog::new();
        let mut rng = GameRng::new(42);
        let _ = submit_names(&name_entry_state(1), &["Solo"], &catalog, &mut rng);
    }

    #[test]
    fn test_end_game_now_keeps_progress() {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(42);
        let mut playing = submit_names(&name_entry_state(2), &["Ari", "Bo"], &catalog, &mut rng);
        playing.scores[PlayerId::new(1)] = 4;

        let ended = end_game_now(&playing);

        assert_eq!(ended.phase, Phase::Result);
        assert_eq!(ended.scores, playing.scores);
        assert_eq!(ended.deck, playing.deck);
    }

    #[test]
    fn test_restart_returns_initial_state() {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(42);
        let playing = submit_names(&name_entry_state(2), &["Ari", "Bo"], &catalog, &mut rng);

        let home = restart(&end_game_now(&playing));
        assert_eq!(home, SessionState::new());
    }

    #[test]
    fn test_inapplicable_actions_are_ignored() {
        let home = SessionState::new();
        assert_eq!(end_game_now(&home), home);
        assert_eq!(restart(&home), home);

        let setup = setup_state();
        assert_eq!(start_setup(&setup), setup);

        let settings = GameSettings::new(2).with_category(Category::DeepTalk);
        assert_eq!(confirm_settings(&home, &settings), Ok(home.clone()));
    }

    #[test]
    fn test_end_reason_display() {
        assert_eq!(EndReason::DeckExhausted.to_string(), "deck exhausted");
        assert_eq!(EndReason::EndedEarly.to_string(), "ended early");
    }
}
