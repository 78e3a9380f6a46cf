//! Card catalog: the fixed pool of prompt cards and forbidden-word groups.
//!
//! `Catalog::standard()` is the content the game ships with. Hosts can
//! assemble their own catalog with `Catalog::new()` + `register`.

use rustc_hash::FxHashMap;

use super::definition::{ActionTag, Card, Category, ForbiddenWords};
use crate::core::GameRng;

const LIGHT_TALK: &[(&str, &str)] = &[
    ("l-1", "📱 Show the 10th photo in your gallery (newest first) and explain it! No photos? Show the latest one."),
    ("l-2", "🔍 Reveal your top 3 recent searches (video or web) exactly as they are"),
    ("l-3", "💰 You just won a 10 billion lottery jackpot! How much do you give each person here?"),
    ("l-4", "💸 What was the most wasteful purchase of your life?"),
    ("l-5", "🚻 If you woke up as another gender, what is the first thing you would try?"),
    ("l-6", "🛌 Share a cringe memory that still makes you kick the blanket at night"),
    ("l-7", "🍔 Name 3 foods you want to eat right now! (Penalty if you can't answer in 3 seconds)"),
    ("l-8", "💬 Read your most recent chat message (or DM) out loud"),
    ("l-9", "😴 Do you have an unusual sleeping habit or daily quirk?"),
    ("l-10", "📛 What was your nickname at school, and why did people call you that?"),
];

const FUNNY_TALK: &[(&str, &str)] = &[
    ("f-1", "👉 [Point] Who here would be the first to die on a desert island?"),
    ("f-2", "💔 Tell the story of your worst relationship (none? your worst crush)"),
    ("f-3", "📱 Text your ex (or crush) 'you up?' right now vs. take a penalty drink"),
    ("f-4", "⚖️ [Balance] Never brush your teeth again vs. never shower again"),
    ("f-5", "⚖️ [Balance] A partner who cheats with your best friend vs. a best friend who cheats with your partner"),
    ("f-6", "🍺 What is the most shocking thing you have done while drunk?"),
    ("f-7", "💯 Rate your own looks out of 10 (be honest)"),
    ("f-8", "👉 [Point] On three, everyone points at the person least likely to shower"),
    ("f-9", "🤥 What is the most recent lie you told?"),
    ("f-10", "⚖️ [Balance] Vomit-flavored tomato vs. tomato-flavored vomit"),
];

const DEEP_TALK: &[(&str, &str)] = &[
    ("d-1", "🎯 What is the one goal you absolutely want to reach this year?"),
    ("d-2", "🤝 What is the one thing you could never forgive in a relationship?"),
    ("d-3", "🤔 What does being a 'real adult' mean to you?"),
    ("d-4", "⏳ If you could go back to any moment in your past, when would it be?"),
    ("d-5", "😟 What worry has kept you up at night lately?"),
    ("d-6", "🌻 Find a strength in the person on your right and compliment them sincerely"),
    ("d-7", "🪦 What sentence would you want on your tombstone?"),
    ("d-8", "⚖️ If you could keep only one forever, love or friendship?"),
    ("d-9", "🧐 What do you think is your biggest weakness (or insecurity)?"),
    ("d-10", "🔮 What do you think you will be like in 10 years?"),
];

const ACTION: &[(&str, &str, ActionTag)] = &[
    ("a-1", "🚫 No saying 'yes' or 'no' until the end of this round! (Slip up and take the penalty)", ActionTag::Rule),
    ("a-2", "⏱️ Name 3 strengths of the person on your right within 5 seconds (penalty if you fail)", ActionTag::Speed),
    ("a-3", "💃 Put on an upbeat song and dance for 1 minute (refuse and drink)", ActionTag::Dance),
    ("a-4", "✊ Rock, paper, scissors! The loser takes a forehead flick", ActionTag::Game),
    ("a-5", "😍 Act cute until everyone is satisfied (keep going until you pass)", ActionTag::Acting),
    ("a-6", "😐 Don't laugh for 1 minute! (Show your teeth and you're out)", ActionTag::Challenge),
    ("a-7", "👉 Poke the cheek of the person on your left and say 'so cute' as cheesily as possible", ActionTag::Touch),
    ("a-8", "🎤 Show off your best impression", ActionTag::Talent),
];

const EVENT: &[(&str, &str)] = &[
    ("e-1", "📢 [Group Mission] Everyone bottoms up! (No drinks? Three cheers instead)"),
    ("e-2", "🔄 [Reverse] The turn order is now reversed!"),
    ("e-3", "💣 [Hot Potato] Set a 30-second timer and pass the phone around! Whoever holds it when it rings takes the penalty!"),
    ("e-4", "👑 [King Game] This turn's player is King. Give one command! (No vetoes)"),
    ("e-5", "🤐 [Silence] One minute of silence! The first to speak or make a sound takes the penalty!"),
];

/// Common filler words.
const FORBIDDEN_GROUPS: &[[&str; 3]] = &[
    ["I", "you", "we"],
    ["really", "honestly", "just"],
    ["no", "but", "uh"],
    ["um...", "like", "kind of"],
    ["anyway", "actually", "so"],
    ["good", "bad", "dunno"],
    ["today", "yesterday", "tomorrow"],
    ["friend", "work", "home"],
    ["think", "feel", "heart"],
    // No saying numbers
    ["1", "2", "3"],
];

/// Read-only pool of cards grouped by category, plus forbidden-word groups.
///
/// ## Example
///
/// ```
/// use talk_joy::cards::{Card, Catalog, Category};
///
/// let mut catalog = Catalog::new();
/// catalog.register(Card::new("x-1", Category::LightTalk, "Favorite snack?"));
/// catalog.register_forbidden_group(["snack", "food", "eat"]);
///
/// assert_eq!(catalog.cards_for(Category::LightTalk).len(), 1);
/// assert!(catalog.cards_for(Category::Event).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: FxHashMap<Category, Vec<Card>>,
    forbidden_groups: Vec<ForbiddenWords>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The content the game ships with.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        for (category, entries) in [
            (Category::LightTalk, LIGHT_TALK),
            (Category::FunnyTalk, FUNNY_TALK),
            (Category::DeepTalk, DEEP_TALK),
            (Category::Event, EVENT),
        ] {
            for &(id, text) in entries {
                catalog.register(Card::new(id, category, text));
            }
        }

        for &(id, text, tag) in ACTION {
            catalog.register(Card::new(id, Category::Action, text).with_tag(tag));
        }

        for group in FORBIDDEN_GROUPS {
            catalog.register_forbidden_group(*group);
        }

        catalog
    }

    /// Add a card to the end of its category.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.iter().any(|c| c.id == card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.cards.entry(card.category).or_default().push(card);
    }

    /// Add a forbidden-word group.
    pub fn register_forbidden_group<S: Into<String>>(&mut self, words: impl IntoIterator<Item = S>) {
        self.forbidden_groups
            .push(words.into_iter().map(Into::into).collect());
    }

    /// Cards of one category, in catalog order.
    #[must_use]
    pub fn cards_for(&self, category: Category) -> &[Card] {
        self.cards.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All forbidden-word groups.
    #[must_use]
    pub fn forbidden_groups(&self) -> &[ForbiddenWords] {
        &self.forbidden_groups
    }

    /// Pick a forbidden-word group uniformly at random.
    ///
    /// Returns an empty group if the catalog has none.
    pub fn random_forbidden_group(&self, rng: &mut GameRng) -> ForbiddenWords {
        rng.choose(&self.forbidden_groups)
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.values().map(Vec::len).sum()
    }

    /// Check if the catalog has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all cards, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.cards_for(category).iter())
    }
}
