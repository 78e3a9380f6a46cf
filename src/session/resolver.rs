//! Turn resolution: scoring, highlight curation, cursor advance, game end.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::machine::EndReason;
use crate::cards::Card;
use crate::core::{
    BestMoments, GameRng, Phase, SessionState, HIGHLIGHT_REPLACE_PROBABILITY, MAX_BEST_MOMENTS,
};

/// The three buttons under a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    Fail,
    Pass,
    Success,
}

impl TurnOutcome {
    /// Points awarded to the current player.
    #[must_use]
    pub const fn score_delta(self) -> i64 {
        match self {
            TurnOutcome::Fail | TurnOutcome::Pass => 0,
            TurnOutcome::Success => 1,
        }
    }
}

/// Resolve the current player's turn on the current card.
///
/// In order:
/// 1. Add `score_delta` to the current player's score (map and player record).
/// 2. Curate highlights (see `curate_highlights`).
/// 3. Move to the next card and the next player; the round goes up when the
///    player cursor wraps to the first player.
/// 4. End the game if the deck is used up or the round limit is passed.
///
/// The input state is left untouched.
///
/// # Panics
///
/// Panics if the state is not in `Phase::Play` or its cursors are out of range.
#[must_use]
pub fn resolve_turn(state: &SessionState, score_delta: i64, rng: &mut GameRng) -> SessionState {
    assert_eq!(state.phase, Phase::Play, "Turn submitted outside play");

    let player_index = state.current_player_index;
    let player_count = state.players.len();
    assert!(
        player_index < player_count,
        "Player cursor {} out of range for {} players",
        player_index,
        player_count
    );
    let card = match state.current_card() {
        Some(card) => card.clone(),
        None => panic!(
            "Card cursor {} out of range for a deck of {}",
            state.current_card_index,
            state.deck.len()
        ),
    };

    let mut next = state.clone();

    let player_id = next.players[player_index].id;
    next.scores[player_id] += score_delta;
    next.players[player_index].score = next.scores[player_id];

    curate_highlights(&mut next.best_moments, &card, score_delta, rng);

    next.current_card_index += 1;
    next.current_player_index = (player_index + 1) % player_count;
    if next.current_player_index == 0 {
        next.current_round += 1;
    }

    debug!(
        player = %player_id,
        card = %card.id,
        delta = score_delta,
        score = next.scores[player_id],
        round = next.current_round,
        "turn resolved"
    );

    if let Some(reason) = end_reason(&next) {
        info!(%reason, round = next.current_round, cards_played = next.current_card_index, "game over");
        next.phase = Phase::Result;
    }

    next
}

/// Check whether a state with freshly advanced cursors has reached the end.
#[must_use]
pub fn end_reason(state: &SessionState) -> Option<EndReason> {
    if state.current_card_index >= state.deck.len() {
        Some(EndReason::DeckExhausted)
    } else if state.settings.round_limit.is_exceeded_by(state.current_round) {
        Some(EndReason::RoundLimitReached)
    } else {
        None
    }
}

/// Best-effort "memorable moments" sample, not a top-K.
///
/// A card is kept while there is room if it scored or is an action card.
/// Once full, a scoring card replaces a uniformly chosen slot with
/// probability `HIGHLIGHT_REPLACE_PROBABILITY`.
pub fn curate_highlights(best: &mut BestMoments, card: &Card, score_delta: i64, rng: &mut GameRng) {
    if (score_delta > 0 || card.is_action()) && best.len() < MAX_BEST_MOMENTS {
        best.push(card.clone());
    } else if score_delta > 0 && rng.gen_bool(HIGHLIGHT_REPLACE_PROBABILITY) {
        let slot = rng.gen_range_usize(0..best.len());
        best[slot] = card.clone();
    }
}
