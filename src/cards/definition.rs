//! Card definitions.
//!
//! A `Card` is immutable content from the catalog. The only per-game change
//! is the forbidden-word group the deck builder attaches to talk cards, and
//! that is applied to the deck's own copy, never to the catalog.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Words a player must avoid while answering a talk card.
///
/// Groups are three words long, so they stay inline.
pub type ForbiddenWords = SmallVec<[String; 3]>;

/// Unique identifier for a card, e.g. `"l-1"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card category. Decides deck composition and whether forbidden words apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    LightTalk,
    FunnyTalk,
    DeepTalk,
    Action,
    Event,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 5] = [
        Category::LightTalk,
        Category::FunnyTalk,
        Category::DeepTalk,
        Category::Action,
        Category::Event,
    ];

    /// The categories a player can pick on the setup screen.
    pub const TALK: [Category; 3] = [Category::LightTalk, Category::FunnyTalk, Category::DeepTalk];

    /// Talk cards are the ones that can carry forbidden words.
    #[must_use]
    pub const fn is_talk(self) -> bool {
        matches!(self, Category::LightTalk | Category::FunnyTalk | Category::DeepTalk)
    }

    /// Setup screen label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::LightTalk => "🎈 Light Talk",
            Category::FunnyTalk => "🔥 Spicy / Exposé",
            Category::DeepTalk => "🌙 Deep / Heartfelt",
            Category::Action => "⚡ Action",
            Category::Event => "🎁 Event",
        }
    }

    /// Setup screen blurb.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Category::LightTalk => "Daily life, tastes, TMI",
            Category::FunnyTalk => "Embarrassing pasts, balance games, extra spicy",
            Category::DeepTalk => "Values, worries, the future",
            Category::Action => "Act it out, instant penalties",
            Category::Event => "Surprises for the whole group",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::LightTalk => "light-talk",
            Category::FunnyTalk => "funny-talk",
            Category::DeepTalk => "deep-talk",
            Category::Action => "action",
            Category::Event => "event",
        };
        f.write_str(name)
    }
}

/// Cosmetic tag shown on action cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionTag {
    Rule,
    Speed,
    Dance,
    Game,
    Acting,
    Challenge,
    Touch,
    Talent,
}

/// A prompt card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub category: Category,
    pub text: String,

    /// Present only on talk cards dealt with forbidden-word mode on.
    pub forbidden_words: Option<ForbiddenWords>,

    pub action_tag: Option<ActionTag>,
}

impl Card {
    /// Create a card with no forbidden words or tag.
    pub fn new(id: impl Into<String>, category: Category, text: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            category,
            text: text.into(),
            forbidden_words: None,
            action_tag: None,
        }
    }

    /// Set the action tag.
    #[must_use]
    pub fn with_tag(mut self, tag: ActionTag) -> Self {
        self.action_tag = Some(tag);
        self
    }

    /// Check if this is an action card.
    #[must_use]
    pub fn is_action(&self) -> bool {
        self.category == Category::Action
    }
}
