use im::Vector;

use crate::cards::{Card, Catalog};
use crate::core::{GameRng, GameSettings};

/// Build a shuffled play deck for `settings`.
///
/// 1. Concatenate the catalog's cards for every category in
///    `settings.categories`, in list order.
/// 2. Shuffle uniformly (Fisher–Yates).
/// 3. With forbidden-word mode on, give every talk card its own freshly
///    drawn forbidden-word group. Action and event cards never get one.
///
/// The deck owns its cards; the catalog is never modified. An empty category
/// list yields an empty deck, which callers must not start a game with.
pub fn build_deck(settings: &GameSettings, catalog: &Catalog, rng: &mut GameRng) -> Vector<Card> {
    let mut cards: Vec<Card> = settings
        .categories
        .iter()
        .flat_map(|&category| catalog.cards_for(category).iter().cloned())
        .collect();

    rng.shuffle(&mut cards);

    if settings.use_forbidden {
        for card in cards.iter_mut().filter(|c| c.category.is_talk()) {
            card.forbidden_words = Some(catalog.random_forbidden_group(rng));
        }
    }

    cards.into_iter().collect()
}
