//! Rating report rendering.
//!
//! Turns a rating and an alternatives result into markdown for whatever
//! surface the caller renders on. Pure string construction.

use crate::alternatives::AlternativesResult;
use crate::scorer::OutfitRating;

/// Render a full rating as a markdown section.
pub fn render_rating(rating: &OutfitRating) -> String {
    let mut lines = Vec::new();

    let (stars, label) = score_band(rating.score);
    lines.push(format!("## Outfit Rating: {:.1}/10", rating.score));
    lines.push(format!("{} {}", stars, label));
    lines.push(String::new());

    lines.push("| Component | Score |".to_string());
    lines.push("|-----------|-------|".to_string());
    lines.push(format!("| Color | {:.1} |", rating.color_score));
    lines.push(format!("| Pattern | {:.1} |", rating.pattern_score));
    lines.push(format!("| Type | {:.1} |", rating.type_score));
    lines.push(format!("| Formality bonus | {:+.1} |", rating.formality_bonus));
    lines.push(format!("| Tag bonus | {:+.1} |", rating.tag_bonus));

    if !rating.strengths.is_empty() {
        lines.push(String::new());
        lines.push("**Strengths:**".to_string());
        for strength in &rating.strengths {
            lines.push(format!("- {}", strength));
        }
    }

    if !rating.feedback.is_empty() {
        lines.push(String::new());
        lines.push("**Observations:**".to_string());
        for note in &rating.feedback {
            lines.push(format!("- {}", note));
        }
    }

    if !rating.suggestions.is_empty() {
        lines.push(String::new());
        lines.push("**Suggestions:**".to_string());
        for suggestion in &rating.suggestions {
            lines.push(format!("- {}", suggestion));
        }
    }

    lines.join("\n")
}

/// Render the ranked swap list as a markdown section.
pub fn render_alternatives(result: &AlternativesResult) -> String {
    let mut lines = Vec::new();
    lines.push("### Suggested Swaps".to_string());

    if result.ranked.is_empty() {
        lines.push("No improving swaps found in the wardrobe.".to_string());
        return lines.join("\n");
    }

    for (rank, alternative) in result.ranked.iter().enumerate() {
        lines.push(format!(
            "{}. {} — predicted {:.1} ({:+.1})",
            rank + 1,
            alternative.garment.label(),
            alternative.predicted_score,
            alternative.improvement
        ));
    }

    lines.join("\n")
}

fn score_band(score: f64) -> (&'static str, &'static str) {
    match score {
        s if s >= 8.5 => ("★★★★★", "Excellent"),
        s if s >= 7.0 => ("★★★★☆", "Good"),
        s if s >= 5.5 => ("★★★☆☆", "Decent"),
        s if s >= 4.0 => ("★★☆☆☆", "Needs improvement"),
        _ => ("★☆☆☆☆", "Poor"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alternatives::Alternative;
    use crate::data::{Category, Color, Garment, Pattern};

    fn rating(score: f64) -> OutfitRating {
        OutfitRating {
            score,
            color_score: 7.0,
            pattern_score: 8.0,
            type_score: 9.0,
            formality_bonus: 1.0,
            tag_bonus: 0.0,
            feedback: vec!["Good outfit. These items work well together".to_string()],
            strengths: vec!["Black T-shirt and White Jeans work very well together".to_string()],
            suggestions: vec![],
            pairs: vec![],
        }
    }

    #[test]
    fn test_report_headline_and_bands() {
        let report = render_rating(&rating(9.0));
        assert!(report.starts_with("## Outfit Rating: 9.0/10"));
        assert!(report.contains("★★★★★ Excellent"));

        let report = render_rating(&rating(6.0));
        assert!(report.contains("★★★☆☆ Decent"));

        let report = render_rating(&rating(2.0));
        assert!(report.contains("★☆☆☆☆ Poor"));
    }

    #[test]
    fn test_report_sections_present() {
        let report = render_rating(&rating(8.0));
        assert!(report.contains("| Formality bonus | +1.0 |"));
        assert!(report.contains("**Strengths:**"));
        assert!(report.contains("**Observations:**"));
        assert!(!report.contains("**Suggestions:**"));
    }

    #[test]
    fn test_alternatives_rendering() {
        let empty = AlternativesResult::default();
        assert!(render_alternatives(&empty).contains("No improving swaps"));

        let result = AlternativesResult {
            problem_item: Some("old".to_string()),
            ranked: vec![Alternative {
                garment: Garment {
                    id: "new".to_string(),
                    category: Category::Top,
                    garment_type: "Shirt".to_string(),
                    primary_color: Color::White,
                    secondary_colors: vec![],
                    pattern: Pattern::Solid,
                    formality: None,
                    tags: vec![],
                },
                predicted_score: 8.4,
                improvement: 1.2,
            }],
        };
        let rendered = render_alternatives(&result);
        assert!(rendered.contains("1. White Shirt — predicted 8.4 (+1.2)"));
    }
}
