//! Deck builder distribution tests.
//!
//! These verify that decks contain exactly the selected catalog cards, that
//! every ordering is reachable with roughly equal frequency, and that
//! forbidden words land only on talk cards.

use std::collections::HashMap;

use talk_joy::cards::{Catalog, Category};
use talk_joy::core::{GameRng, GameSettings};
use talk_joy::deck::build_deck;

fn settings(categories: &[Category], use_forbidden: bool) -> GameSettings {
    GameSettings {
        categories: categories.to_vec(),
        use_forbidden,
        ..GameSettings::default()
    }
}

/// Every selection yields the multiset union of its categories.
#[test]
fn test_deck_contents_for_every_selection() {
    let catalog = Catalog::standard();
    let mut rng = GameRng::new(42);

    // All non-empty subsets of the five categories
    for mask in 1u32..32 {
        let categories: Vec<Category> = Category::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &c)| c)
            .collect();

        let deck = build_deck(&settings(&categories, false), &catalog, &mut rng);

        let mut expected: Vec<String> = categories
            .iter()
            .flat_map(|&c| catalog.cards_for(c).iter().map(|card| card.id.0.clone()))
            .collect();
        let mut actual: Vec<String> = deck.iter().map(|card| card.id.0.clone()).collect();
        expected.sort();
        actual.sort();

        assert_eq!(actual, expected, "categories {:?}", categories);
    }
}

/// Repeated categories contribute their cards once per repetition.
#[test]
fn test_repeated_category_keeps_multiplicity() {
    let catalog = Catalog::standard();
    let mut rng = GameRng::new(1);

    let deck = build_deck(&settings(&[Category::Event, Category::Event], false), &catalog, &mut rng);
    assert_eq!(deck.len(), 10);
}

/// All 120 orderings of the 5 event cards show up with similar frequency.
#[test]
fn test_shuffle_is_uniform() {
    let catalog = Catalog::standard();
    let mut rng = GameRng::new(2024);
    let settings = settings(&[Category::Event], false);

    let runs = 12_000;
    let mut counts: HashMap<Vec<String>, u32> = HashMap::new();
    for _ in 0..runs {
        let deck = build_deck(&settings, &catalog, &mut rng);
        let order = deck.iter().map(|c| c.id.0.clone()).collect();
        *counts.entry(order).or_default() += 1;
    }

    // Expected 100 per ordering, standard deviation ~10
    assert_eq!(counts.len(), 120);
    for (order, &count) in &counts {
        assert!((40..=160).contains(&count), "{:?} seen {} times", order, count);
    }
}

/// Each card is equally likely to be drawn first.
#[test]
fn test_first_card_is_uniform() {
    let catalog = Catalog::standard();
    let mut rng = GameRng::new(77);
    let settings = settings(&Category::TALK, false);

    let runs = 30_000;
    let mut firsts: HashMap<String, u32> = HashMap::new();
    for _ in 0..runs {
        let deck = build_deck(&settings, &catalog, &mut rng);
        *firsts.entry(deck[0].id.0.clone()).or_default() += 1;
    }

    // 30 cards, expected 1000 each
    assert_eq!(firsts.len(), 30);
    assert!(firsts.values().all(|&n| (800..=1200).contains(&n)));
}

/// Forbidden words appear iff the mode is on and the card is a talk card.
#[test]
fn test_forbidden_words_placement() {
    let catalog = Catalog::standard();

    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        for use_forbidden in [false, true] {
            let deck = build_deck(&settings(&Category::ALL, use_forbidden), &catalog, &mut rng);
            for card in deck.iter() {
                let expect_words = use_forbidden && card.category.is_talk();
                assert_eq!(card.forbidden_words.is_some(), expect_words, "card {}", card.id);
            }
        }
    }
}

/// Forbidden groups are drawn per card, not once per deck.
#[test]
fn test_forbidden_groups_vary_between_cards() {
    let catalog = Catalog::standard();
    let mut rng = GameRng::new(8);

    let deck = build_deck(&settings(&Category::TALK, true), &catalog, &mut rng);
    let first = deck[0].forbidden_words.clone();
    assert!(deck.iter().any(|c| c.forbidden_words != first));
}
