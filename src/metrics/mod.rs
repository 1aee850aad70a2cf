//! Metric modules for outfit scoring.
//!
//! Pairwise assessment plus the two outfit-level bonus metrics, each in its
//! own module returning a plain result struct.

pub mod formality;
pub mod pairwise;
pub mod tags;

pub use formality::{assess_formality, FormalityAssessment};
pub use pairwise::{assess_pair, PairAssessment};
pub use tags::{assess_tags, TagAssessment};
