//! Per-pair compatibility assessment.
//!
//! Combines the color, pattern and type affinities for one unordered garment
//! pair into a weighted composite. The pattern matrix alone decides the
//! pattern sub-score; patterns additionally modulate the color sub-score
//! when the colors already clash.

use serde::{Deserialize, Serialize};

use crate::data::Garment;
use crate::tables::CompatibilityTables;

/// Color scores at or above this need no pattern modulation.
const COLOR_CLASH_THRESHOLD: f64 = 7.0;
/// A single patterned garment masks a weak color pairing: move the color
/// score this fraction of the way toward 10.
const SINGLE_PATTERN_RELIEF: f64 = 0.2;
/// Two patterned garments sharpen the clash: cut the color score by this
/// fraction.
const DUAL_PATTERN_PENALTY: f64 = 0.1;

/// Scores for one unordered garment pair within an outfit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairAssessment {
    pub left_id: String,
    pub right_id: String,
    pub left_label: String,
    pub right_label: String,
    pub color: f64,
    pub pattern: f64,
    pub garment_type: f64,
    pub combined: f64,
}

/// Score one garment pair against the active tables.
pub fn assess_pair(a: &Garment, b: &Garment, tables: &CompatibilityTables) -> PairAssessment {
    let color = adjusted_color_score(a, b, tables);
    let pattern = tables.pattern_affinity(a.pattern, b.pattern);
    let garment_type = tables.type_affinity(&a.garment_type, &b.garment_type);

    let w = &tables.weights;
    let combined = w.color * color + w.pattern * pattern + w.garment_type * garment_type;

    PairAssessment {
        left_id: a.id.clone(),
        right_id: b.id.clone(),
        left_label: a.label(),
        right_label: b.label(),
        color,
        pattern,
        garment_type,
        combined,
    }
}

/// Multi-color affinity with the pattern interaction applied. Only color
/// pairings below the clash threshold are adjusted; both-solid pairs are
/// never touched.
fn adjusted_color_score(a: &Garment, b: &Garment, tables: &CompatibilityTables) -> f64 {
    let mut color = tables.color_affinity_multi(a, b);
    if color >= COLOR_CLASH_THRESHOLD {
        return color;
    }

    let patterned = [a, b].iter().filter(|g| g.pattern.is_patterned()).count();
    match patterned {
        1 => color += (10.0 - color) * SINGLE_PATTERN_RELIEF,
        2 => color -= color * DUAL_PATTERN_PENALTY,
        _ => {}
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Category, Color, Pattern};
    use approx::assert_relative_eq;

    fn garment(id: &str, color: Color, pattern: Pattern) -> Garment {
        Garment {
            id: id.to_string(),
            category: Category::Top,
            garment_type: "T-shirt".to_string(),
            primary_color: color,
            secondary_colors: vec![],
            pattern,
            formality: None,
            tags: vec![],
        }
    }

    fn tables() -> CompatibilityTables {
        CompatibilityTables::builtin().unwrap()
    }

    #[test]
    fn test_both_solid_colors_untouched() {
        let tables = tables();
        // Navy-Blue is a 4.0 clash in the builtin table.
        let a = garment("a", Color::Navy, Pattern::Solid);
        let b = garment("b", Color::Blue, Pattern::Solid);
        assert_relative_eq!(adjusted_color_score(&a, &b, &tables), 4.0);
    }

    #[test]
    fn test_single_pattern_softens_clash() {
        let tables = tables();
        let a = garment("a", Color::Navy, Pattern::Solid);
        let b = garment("b", Color::Blue, Pattern::Striped);
        // 4.0 + (10 - 4.0) * 0.2
        assert_relative_eq!(adjusted_color_score(&a, &b, &tables), 5.2);
    }

    #[test]
    fn test_dual_pattern_worsens_clash() {
        let tables = tables();
        let a = garment("a", Color::Navy, Pattern::Striped);
        let b = garment("b", Color::Blue, Pattern::Plaid);
        // 4.0 - 4.0 * 0.1
        assert_relative_eq!(adjusted_color_score(&a, &b, &tables), 3.6);
    }

    #[test]
    fn test_good_colors_skip_adjustment() {
        let tables = tables();
        // Black-White is 9.0, above the clash threshold.
        let a = garment("a", Color::Black, Pattern::Striped);
        let b = garment("b", Color::White, Pattern::Plaid);
        assert_relative_eq!(adjusted_color_score(&a, &b, &tables), 9.0);
    }

    #[test]
    fn test_combined_blend_uses_table_weights() {
        let tables = tables();
        let a = garment("a", Color::Black, Pattern::Solid);
        let mut b = garment("b", Color::White, Pattern::Solid);
        b.garment_type = "Jeans".to_string();

        let pair = assess_pair(&a, &b, &tables);
        // color 9.0, pattern Solid-Solid 8.0, type T-shirt-Jeans 9.0
        assert_relative_eq!(pair.combined, 0.35 * 9.0 + 0.25 * 8.0 + 0.40 * 9.0);
        assert_eq!(pair.left_label, "Black T-shirt");
        assert_eq!(pair.right_label, "White Jeans");
    }
}
