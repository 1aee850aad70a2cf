//! Outfit compatibility scoring engine.
//!
//! Turns a set of garment attribute records into a 0-10 rating with a
//! decomposed breakdown, human-readable feedback, and ranked single-item
//! swap suggestions:
//! - `tables`: static affinity matrices and rule weights, loaded from JSON
//! - `data`: garment records and outfit selections
//! - `metrics`: pairwise assessment plus formality and tag bonuses
//! - `scorer`: the rating engine
//! - `alternatives`: wardrobe substitution search
//! - `report`: markdown rendering of results

pub mod alternatives;
pub mod data;
pub mod metrics;
pub mod report;
pub mod scorer;
pub mod tables;

// Re-export commonly used types
pub use alternatives::{Alternative, AlternativesResult};
pub use data::{load_wardrobe, Category, Color, Garment, OutfitSelection, Pattern};
pub use scorer::{OutfitRating, OutfitScorer, EMPTY_SELECTION_MESSAGE};
pub use tables::{CompatibilityTables, NEUTRAL_AFFINITY};
