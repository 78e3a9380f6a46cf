//! Card system: definitions and the static catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Unique card identifier
//! - `Category`: Light/funny/deep talk, action, event
//! - `Card`: Prompt text plus optional forbidden words and action tag
//! - `Catalog`: The card pool and forbidden-word groups

pub mod catalog;
pub mod definition;

pub use catalog::Catalog;
pub use definition::{ActionTag, Card, CardId, Category, ForbiddenWords};
