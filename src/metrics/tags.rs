//! Tag-pool bonus.
//!
//! Pools the free-form tags across the outfit with multiplicity counts and
//! applies the tag rules: an occasion shared by two or more garments earns
//! the occasion bonus, a shared style tag earns the style bonus, and mixing
//! warm-weather with cold-weather pieces is penalized. The occasion and
//! style matches are first-match-only over the ordered rule lists; bonuses
//! never stack within a category.

use rustc_hash::FxHashMap;

use crate::data::Garment;
use crate::tables::TagRules;

/// Tags must appear on at least this many garments to count as shared.
const SHARED_TAG_MIN: usize = 2;

/// Result of the tag-pool step.
#[derive(Debug, Clone)]
pub struct TagAssessment {
    /// Signed delta added to the matrix score.
    pub bonus: f64,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Compute the tag bonus for an outfit.
pub fn assess_tags(garments: &[&Garment], rules: &TagRules) -> TagAssessment {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for garment in garments {
        for tag in &garment.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut bonus = 0.0;
    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();

    // First shared occasion wins; later matches are ignored.
    for tag in &rules.occasion_tags {
        if counts.get(tag.as_str()).copied().unwrap_or(0) >= SHARED_TAG_MIN {
            bonus += rules.occasion_bonus;
            feedback.push(format!("Several pieces suit the {} occasion", tag));
            break;
        }
    }

    for tag in &rules.style_tags {
        if counts.get(tag.as_str()).copied().unwrap_or(0) >= SHARED_TAG_MIN {
            bonus += rules.style_bonus;
            feedback.push(format!("Cohesive {} style across the outfit", tag));
            break;
        }
    }

    let has_summer = rules.summer_tags.iter().any(|t| counts.contains_key(t.as_str()));
    let has_winter = rules.winter_tags.iter().any(|t| counts.contains_key(t.as_str()));
    if has_summer && has_winter {
        bonus += rules.season_clash_penalty;
        suggestions
            .push("Outfit mixes warm-weather and cold-weather pieces; pick one season".to_string());
    }

    TagAssessment {
        bonus,
        feedback,
        suggestions,
    }
}
