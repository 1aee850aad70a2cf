//! Formality-spread bonus.
//!
//! Looks at the spread (max − min) of the formality levels users assigned
//! to the garments and steps it into a signed score adjustment. Garments
//! without a formality level, and garments in exempt categories, stay out
//! of the spread.

use crate::data::Garment;
use crate::tables::FormalityRules;

/// Result of the formality-spread step.
#[derive(Debug, Clone)]
pub struct FormalityAssessment {
    /// Signed delta added to the matrix score.
    pub bonus: f64,
    /// max − min over the considered formality values; `None` when fewer
    /// than two values were available.
    pub spread: Option<f64>,
    pub message: Option<String>,
    /// Routes the message to `suggestions` instead of `feedback`.
    pub advisory: bool,
}

/// Compute the formality bonus for an outfit.
pub fn assess_formality(garments: &[&Garment], rules: &FormalityRules) -> FormalityAssessment {
    let values: Vec<f64> = garments
        .iter()
        .filter(|g| !rules.exempt_categories.contains(&g.category))
        .filter_map(|g| g.formality)
        .collect();

    if values.len() < 2 {
        return FormalityAssessment {
            bonus: 0.0,
            spread: None,
            message: None,
            advisory: false,
        };
    }

    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    let min = values.iter().cloned().fold(f64::MAX, f64::min);
    let spread = max - min;

    let (bonus, message, advisory) = if spread <= rules.excellent_spread {
        (
            rules.excellent_bonus,
            "Excellent formality consistency across the outfit".to_string(),
            false,
        )
    } else if spread <= rules.neutral_spread {
        (
            0.0,
            "Formality levels are reasonably consistent".to_string(),
            false,
        )
    } else if spread <= rules.minor_spread {
        (
            rules.minor_penalty,
            "Formality levels vary slightly; consider narrowing the gap".to_string(),
            true,
        )
    } else {
        (
            rules.major_penalty,
            "This outfit mixes casual and formal pieces; aim for closer formality levels"
                .to_string(),
            true,
        )
    };

    FormalityAssessment {
        bonus,
        spread: Some(spread),
        message: Some(message),
        advisory,
    }
}
