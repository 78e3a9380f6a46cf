//! Deck construction.
//!
//! The deck for a game is assembled from the catalog once, when names are
//! submitted, and then only read.

mod builder;

pub use builder::build_deck;
