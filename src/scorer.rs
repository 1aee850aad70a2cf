//! Outfit scorer - main coordinator for rating candidate outfits.
//!
//! Flattens the selection, scores every unordered garment pair through the
//! compatibility tables, averages the sub-metrics into a weighted matrix
//! score, then applies the formality and tag bonuses. Pure computation: a
//! fixed selection against fixed tables always produces identical output.

use serde::{Deserialize, Serialize};

use crate::data::OutfitSelection;
use crate::metrics::{assess_formality, assess_pair, assess_tags, PairAssessment};
use crate::tables::{round1, CompatibilityTables, NEUTRAL_AFFINITY};

/// Guidance returned for an empty selection.
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one clothing item";

/// Pairs at or above this combined score are called out as strengths.
const STRENGTH_THRESHOLD: f64 = 8.0;
/// Pairs in [FEEDBACK_THRESHOLD, STRENGTH_THRESHOLD) get a neutral mention.
const FEEDBACK_THRESHOLD: f64 = 6.0;
/// Pairs below this combined score earn an improvement suggestion.
pub(crate) const SUGGESTION_THRESHOLD: f64 = 5.0;

/// Rating engine. Owns the injected read-only tables; one instance serves
/// any number of rating calls.
pub struct OutfitScorer {
    tables: CompatibilityTables,
}

/// Full rating for one outfit. Pure output: never mutated after return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitRating {
    /// Composite 0-10 score, one decimal.
    pub score: f64,
    /// Average color affinity across pairs (0-10).
    pub color_score: f64,
    /// Average pattern affinity across pairs (0-10).
    pub pattern_score: f64,
    /// Average type affinity across pairs (0-10).
    pub type_score: f64,
    /// Signed formality-spread delta.
    pub formality_bonus: f64,
    /// Signed tag-rule delta.
    pub tag_bonus: f64,
    pub feedback: Vec<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
    /// Per-pair records, kept so the substitution search can identify the
    /// weakest contributor without rescoring.
    pub pairs: Vec<PairAssessment>,
}

impl OutfitRating {
    fn empty_selection() -> Self {
        OutfitRating {
            score: 0.0,
            color_score: 0.0,
            pattern_score: 0.0,
            type_score: 0.0,
            formality_bonus: 0.0,
            tag_bonus: 0.0,
            feedback: vec![EMPTY_SELECTION_MESSAGE.to_string()],
            strengths: vec![],
            suggestions: vec![],
            pairs: vec![],
        }
    }
}

impl OutfitScorer {
    pub fn new(tables: CompatibilityTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &CompatibilityTables {
        &self.tables
    }

    /// Rate one outfit. Never fails: degenerate inputs produce defined
    /// results (empty selection scores zero, a single garment scores the
    /// neutral baseline plus bonuses, unknown labels score neutral).
    pub fn score_outfit(&self, selection: &OutfitSelection) -> OutfitRating {
        let garments = selection.garments();
        if garments.is_empty() {
            return OutfitRating::empty_selection();
        }

        let mut pairs = Vec::new();
        let mut feedback = Vec::new();
        let mut strengths = Vec::new();
        let mut suggestions = Vec::new();

        for i in 0..garments.len() {
            for j in i + 1..garments.len() {
                let pair = assess_pair(garments[i], garments[j], &self.tables);
                if pair.combined >= STRENGTH_THRESHOLD {
                    strengths.push(format!(
                        "{} and {} work very well together",
                        pair.left_label, pair.right_label
                    ));
                } else if pair.combined >= FEEDBACK_THRESHOLD {
                    feedback.push(format!(
                        "{} and {} pair nicely",
                        pair.left_label, pair.right_label
                    ));
                } else if pair.combined < SUGGESTION_THRESHOLD {
                    suggestions.push(format!(
                        "{} and {} clash; consider swapping one of them",
                        pair.left_label, pair.right_label
                    ));
                }
                pairs.push(pair);
            }
        }

        // A single garment has no pairs; the averages fall back to neutral.
        let (avg_color, avg_pattern, avg_type) = if pairs.is_empty() {
            (NEUTRAL_AFFINITY, NEUTRAL_AFFINITY, NEUTRAL_AFFINITY)
        } else {
            let n = pairs.len() as f64;
            (
                pairs.iter().map(|p| p.color).sum::<f64>() / n,
                pairs.iter().map(|p| p.pattern).sum::<f64>() / n,
                pairs.iter().map(|p| p.garment_type).sum::<f64>() / n,
            )
        };

        let w = &self.tables.weights;
        let mut score = w.color * avg_color + w.pattern * avg_pattern + w.garment_type * avg_type;

        let formality = assess_formality(&garments, &self.tables.formality);
        score += formality.bonus;
        if let Some(message) = formality.message.clone() {
            if formality.advisory {
                suggestions.push(message);
            } else {
                feedback.push(message);
            }
        }

        let tag = assess_tags(&garments, &self.tables.tag_rules);
        score += tag.bonus;
        feedback.extend(tag.feedback);
        suggestions.extend(tag.suggestions);

        let score = round1(score.clamp(0.0, 10.0));
        feedback.push(band_message(score).to_string());

        tracing::debug!(
            garments = garments.len(),
            pairs = pairs.len(),
            score,
            "outfit scored"
        );

        OutfitRating {
            score,
            color_score: round1(avg_color),
            pattern_score: round1(avg_pattern),
            type_score: round1(avg_type),
            formality_bonus: formality.bonus,
            tag_bonus: tag.bonus,
            feedback,
            strengths,
            suggestions,
            pairs,
        }
    }
}

/// Overall sentence keyed to the final score band.
fn band_message(score: f64) -> &'static str {
    match score {
        s if s >= 8.5 => "Excellent outfit! The pieces complement each other beautifully",
        s if s >= 7.0 => "Good outfit. These items work well together",
        s if s >= 5.5 => "Decent combination, with room to improve",
        _ => "This combination needs improvement; check the suggestions",
    }
}
