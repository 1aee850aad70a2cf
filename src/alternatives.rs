//! Alternative-swap search.
//!
//! Identifies the garment dragging the rating down, re-rates the outfit
//! with every same-category wardrobe candidate swapped in, and returns the
//! candidates that clear the improvement threshold, best first. Sequential
//! and Rayon-parallel implementations share the same logic and produce
//! identical output.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::{Category, Garment, OutfitSelection};
use crate::scorer::{OutfitRating, OutfitScorer, SUGGESTION_THRESHOLD};
use crate::tables::round1;

/// Minimum rounded score gain a candidate must deliver; anything at or
/// below this is noise at one-decimal precision.
const MIN_IMPROVEMENT: f64 = 0.3;
/// At most this many candidates are returned.
const MAX_ALTERNATIVES: usize = 3;

/// One improving substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub garment: Garment,
    /// Full re-rating of the outfit with this garment swapped in.
    pub predicted_score: f64,
    /// `predicted_score` minus the current score, one decimal.
    pub improvement: f64,
}

/// Ranked substitutions for the problematic garment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlternativesResult {
    /// Id of the garment targeted for substitution; `None` when the outfit
    /// has fewer than two garments and no pair can be blamed.
    pub problem_item: Option<String>,
    pub ranked: Vec<Alternative>,
}

impl OutfitScorer {
    /// Search the wardrobe for single-item swaps that improve the rating.
    /// Degenerate inputs (sub-pair outfits, empty candidate pools) return
    /// an empty result, never an error.
    pub fn find_alternatives(
        &self,
        selection: &OutfitSelection,
        current: &OutfitRating,
        wardrobe: &[Garment],
    ) -> AlternativesResult {
        let Some((target_id, category)) = problematic_item(selection, current) else {
            return AlternativesResult::default();
        };

        let ranked: Vec<Alternative> = candidates(wardrobe, &target_id, category)
            .filter_map(|c| self.evaluate_candidate(selection, &target_id, current.score, c))
            .collect();

        finish_ranking(target_id, ranked)
    }

    /// `find_alternatives` with the candidate re-ratings fanned out across
    /// threads. Worth it for large wardrobes; output is identical.
    pub fn find_alternatives_parallel(
        &self,
        selection: &OutfitSelection,
        current: &OutfitRating,
        wardrobe: &[Garment],
    ) -> AlternativesResult {
        let Some((target_id, category)) = problematic_item(selection, current) else {
            return AlternativesResult::default();
        };

        let pool: Vec<&Garment> = candidates(wardrobe, &target_id, category).collect();
        let ranked: Vec<Alternative> = pool
            .into_par_iter()
            .filter_map(|c| self.evaluate_candidate(selection, &target_id, current.score, c))
            .collect();

        finish_ranking(target_id, ranked)
    }

    fn evaluate_candidate(
        &self,
        selection: &OutfitSelection,
        target_id: &str,
        current_score: f64,
        candidate: &Garment,
    ) -> Option<Alternative> {
        let hypothetical = selection.with_swap(target_id, candidate.clone());
        let predicted_score = self.score_outfit(&hypothetical).score;
        let improvement = round1(predicted_score - current_score);

        (improvement > MIN_IMPROVEMENT).then(|| Alternative {
            garment: candidate.clone(),
            predicted_score,
            improvement,
        })
    }
}

/// The garment most responsible for the low score: most appearances in
/// suggestion-band pairs, lowest mean pair score as tiebreak, outfit order
/// breaking exact ties.
fn problematic_item(
    selection: &OutfitSelection,
    current: &OutfitRating,
) -> Option<(String, Category)> {
    let garments = selection.garments();
    if garments.len() < 2 || current.pairs.is_empty() {
        return None;
    }

    let mut worst: Option<(&Garment, usize, f64)> = None;
    for garment in &garments {
        let mut clashes = 0;
        let mut total = 0.0;
        let mut count = 0;
        for pair in &current.pairs {
            if pair.left_id == garment.id || pair.right_id == garment.id {
                total += pair.combined;
                count += 1;
                if pair.combined < SUGGESTION_THRESHOLD {
                    clashes += 1;
                }
            }
        }
        if count == 0 {
            continue;
        }
        let mean = total / count as f64;

        let beats_current = match worst {
            None => true,
            Some((_, worst_clashes, worst_mean)) => {
                clashes > worst_clashes || (clashes == worst_clashes && mean < worst_mean)
            }
        };
        if beats_current {
            worst = Some((garment, clashes, mean));
        }
    }

    worst.map(|(garment, _, _)| (garment.id.clone(), garment.category))
}

fn candidates<'a>(
    wardrobe: &'a [Garment],
    target_id: &'a str,
    category: Category,
) -> impl Iterator<Item = &'a Garment> {
    wardrobe
        .iter()
        .filter(move |g| g.category == category && g.id != target_id)
}

fn finish_ranking(target_id: String, mut ranked: Vec<Alternative>) -> AlternativesResult {
    // Stable sort: wardrobe order breaks predicted-score ties.
    ranked.sort_by(|a, b| b.predicted_score.total_cmp(&a.predicted_score));
    ranked.truncate(MAX_ALTERNATIVES);

    tracing::debug!(
        problem = %target_id,
        kept = ranked.len(),
        "alternative search finished"
    );

    AlternativesResult {
        problem_item: Some(target_id),
        ranked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::CompatibilityTables;
    use crate::data::{Color, Pattern};

    fn scorer() -> OutfitScorer {
        OutfitScorer::new(CompatibilityTables::builtin().unwrap())
    }

    fn garment(id: &str, category: Category, garment_type: &str, color: Color) -> Garment {
        Garment {
            id: id.to_string(),
            category,
            garment_type: garment_type.to_string(),
            primary_color: color,
            secondary_colors: vec![],
            pattern: Pattern::Solid,
            formality: None,
            tags: vec![],
        }
    }

    fn clashing_outfit() -> OutfitSelection {
        // Red top on green bottom: a 3.0 color clash in the builtin table.
        OutfitSelection::from_garments(vec![
            garment("red-top", Category::Top, "T-shirt", Color::Red),
            garment("green-bottom", Category::Bottom, "Jeans", Color::Green),
        ])
    }

    #[test]
    fn test_sub_pair_outfit_returns_empty() {
        let scorer = scorer();
        let selection =
            OutfitSelection::from_garments(vec![garment("solo", Category::Top, "T-shirt", Color::Red)]);
        let rating = scorer.score_outfit(&selection);
        let wardrobe = vec![garment("other", Category::Top, "Shirt", Color::White)];

        let result = scorer.find_alternatives(&selection, &rating, &wardrobe);
        assert!(result.problem_item.is_none());
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_no_same_category_candidates_returns_empty_list() {
        let scorer = scorer();
        let selection = clashing_outfit();
        let rating = scorer.score_outfit(&selection);
        // Wardrobe only has footwear; nothing can replace the problem item.
        let wardrobe = vec![garment("shoes", Category::Footwear, "Sneakers", Color::White)];

        let result = scorer.find_alternatives(&selection, &rating, &wardrobe);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_predicted_scores_reproduce_full_reratings() {
        let scorer = scorer();
        let selection = clashing_outfit();
        let rating = scorer.score_outfit(&selection);
        let wardrobe = vec![
            garment("white-top", Category::Top, "Shirt", Color::White),
            garment("black-top", Category::Top, "T-shirt", Color::Black),
            garment("beige-top", Category::Top, "Sweater", Color::Beige),
        ];

        let result = scorer.find_alternatives(&selection, &rating, &wardrobe);
        assert!(!result.ranked.is_empty());

        for alternative in &result.ranked {
            assert!(alternative.improvement > MIN_IMPROVEMENT);
            let swapped = selection.with_swap(
                result.problem_item.as_deref().unwrap(),
                alternative.garment.clone(),
            );
            let rescored = scorer.score_outfit(&swapped);
            assert_eq!(rescored.score, alternative.predicted_score);
        }

        // Best first.
        for pair in result.ranked.windows(2) {
            assert!(pair[0].predicted_score >= pair[1].predicted_score);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scorer = scorer();
        let selection = clashing_outfit();
        let rating = scorer.score_outfit(&selection);
        let wardrobe: Vec<Garment> = [
            ("w1", Color::White),
            ("w2", Color::Black),
            ("w3", Color::Beige),
            ("w4", Color::Gray),
            ("w5", Color::Navy),
        ]
        .iter()
        .map(|(id, color)| garment(id, Category::Top, "Shirt", *color))
        .collect();

        let sequential = scorer.find_alternatives(&selection, &rating, &wardrobe);
        let parallel = scorer.find_alternatives_parallel(&selection, &rating, &wardrobe);

        assert_eq!(sequential.problem_item, parallel.problem_item);
        assert_eq!(sequential.ranked.len(), parallel.ranked.len());
        for (s, p) in sequential.ranked.iter().zip(&parallel.ranked) {
            assert_eq!(s.garment.id, p.garment.id);
            assert_eq!(s.predicted_score, p.predicted_score);
        }
    }

    #[test]
    fn test_cap_at_three_alternatives() {
        let scorer = scorer();
        let selection = clashing_outfit();
        let rating = scorer.score_outfit(&selection);
        // Plenty of strong candidates for the red top.
        let wardrobe: Vec<Garment> = [
            ("w1", "Shirt", Color::White),
            ("w2", "T-shirt", Color::Black),
            ("w3", "Sweater", Color::Beige),
            ("w4", "Sweater", Color::Brown),
            ("w5", "Shirt", Color::Gray),
        ]
        .iter()
        .map(|(id, t, color)| garment(id, Category::Top, t, *color))
        .collect();

        let result = scorer.find_alternatives(&selection, &rating, &wardrobe);
        assert_eq!(result.ranked.len(), MAX_ALTERNATIVES);
    }
}
