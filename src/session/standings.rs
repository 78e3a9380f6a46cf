//! Result screen view: ranking, winner and the share payload.
//!
//! Derived from a `SessionState` on demand, never stored.

use crate::cards::Card;
use crate::core::{Player, PlayerId, SessionState};

const SHARE_HEADER: &str = "🏆 Talk & Joy Results 🏆";
const SHARE_FALLBACK_HIGHLIGHT: &str = "It was fun!";
const SHARE_TAGS: &str = "#TalkAndJoy #PartyGame";

/// Players ranked by score, highest first.
///
/// Equal scores keep seating order; ties get no shared rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standings {
    ranked: Vec<Player>,
    best_moments: Vec<Card>,
}

impl Standings {
    /// Rank the players of `state`.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        let mut ranked: Vec<Player> = state.players.iter().cloned().collect();
        // `sort_by` is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        Self {
            ranked,
            best_moments: state.best_moments.to_vec(),
        }
    }

    /// Players in rank order.
    #[must_use]
    pub fn ranked(&self) -> &[Player] {
        &self.ranked
    }

    /// The rank-0 player, if anyone played.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.ranked.first()
    }

    /// 0-based position of a player.
    #[must_use]
    pub fn rank_of(&self, player: PlayerId) -> Option<usize> {
        self.ranked.iter().position(|p| p.id == player)
    }

    #[must_use]
    pub fn best_moments(&self) -> &[Card] {
        &self.best_moments
    }

    /// Text handed to the OS share sheet or clipboard.
    ///
    /// ```text
    /// 🏆 Talk & Joy Results 🏆
    ///
    /// 1st: Ari (3 pts)
    /// 2nd: Bo (1 pts)
    ///
    /// Today's talk: "<first highlight>"
    ///
    /// #TalkAndJoy #PartyGame
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let ranks = self
            .ranked
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}: {} ({} pts)", ordinal(i + 1), p.name, p.score))
            .collect::<Vec<_>>()
            .join("\n");

        let highlight = self
            .best_moments
            .first()
            .map_or(SHARE_FALLBACK_HIGHLIGHT, |card| card.text.as_str());

        format!("{SHARE_HEADER}\n\n{ranks}\n\nToday's talk: \"{highlight}\"\n\n{SHARE_TAGS}")
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
