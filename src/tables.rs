//! Compatibility tables.
//!
//! Static symmetric affinity lookups for color, garment-type and pattern
//! pairs, plus the rule weights used to combine them. Pure data loaded once
//! from a JSON asset; the engine only consumes whatever table is active.
//! Regenerating the asset is an offline concern and never touches this code.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::data::{Category, Color, Garment, Pattern};

/// Affinity returned for any attribute pair the tables do not cover. An
/// unrecognized label dilutes confidence rather than aborting evaluation.
pub const NEUTRAL_AFFINITY: f64 = 5.0;

/// Matrices store the upper triangle only; lookups try both key orders.
type AffinityMatrix = FxHashMap<String, FxHashMap<String, f64>>;

/// Blend weights for the per-pair color/pattern/type composite.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PairWeights {
    pub color: f64,
    pub pattern: f64,
    #[serde(rename = "type")]
    pub garment_type: f64,
}

/// Step function buckets for the formality-spread bonus.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormalityRules {
    pub excellent_spread: f64,
    pub neutral_spread: f64,
    pub minor_spread: f64,
    pub excellent_bonus: f64,
    pub minor_penalty: f64,
    pub major_penalty: f64,
    /// Categories whose formality values never enter the spread.
    #[serde(default)]
    pub exempt_categories: Vec<Category>,
}

/// Tag categories and bonuses. The occasion and style lists are ordered:
/// the first entry matched twice across the outfit wins, and the bonus is
/// applied once per category, never stacked.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagRules {
    pub occasion_tags: Vec<String>,
    pub occasion_bonus: f64,
    pub style_tags: Vec<String>,
    pub style_bonus: f64,
    pub summer_tags: Vec<String>,
    pub winter_tags: Vec<String>,
    pub season_clash_penalty: f64,
}

/// All static scoring data: three affinity matrices plus the rule weights.
/// Construct once at startup and treat as read-only; every scorer borrows
/// the same instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompatibilityTables {
    colors: AffinityMatrix,
    types: AffinityMatrix,
    patterns: AffinityMatrix,
    pub weights: PairWeights,
    pub formality: FormalityRules,
    pub tag_rules: TagRules,
}

const BUILTIN_TABLES: &str = include_str!("../data/compatibility_tables.json");

impl CompatibilityTables {
    /// Load tables from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read compatibility tables: {:?}", path))?;
        let tables = Self::from_json(&contents)?;

        tracing::debug!(
            colors = tables.colors.len(),
            types = tables.types.len(),
            patterns = tables.patterns.len(),
            "compatibility tables loaded"
        );
        Ok(tables)
    }

    /// Parse tables from a JSON string. Used by `load`, the builtin asset,
    /// and fixture injection in tests.
    pub fn from_json(contents: &str) -> Result<Self> {
        let tables: CompatibilityTables = serde_json::from_str(contents)
            .with_context(|| "Failed to parse compatibility tables JSON")?;
        tables.validate()?;
        Ok(tables)
    }

    /// The table set bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_TABLES)
    }

    /// Every affinity must sit in [0,10] and the rule thresholds must be
    /// coherent, otherwise scoring could silently leave the documented range.
    fn validate(&self) -> Result<()> {
        for (name, matrix) in [
            ("colors", &self.colors),
            ("types", &self.types),
            ("patterns", &self.patterns),
        ] {
            for (row_key, row) in matrix {
                for (col_key, value) in row {
                    if !(0.0..=10.0).contains(value) {
                        anyhow::bail!(
                            "Affinity {}[{}][{}] = {} outside [0,10]",
                            name,
                            row_key,
                            col_key,
                            value
                        );
                    }
                }
            }
        }

        let w = &self.weights;
        if w.color <= 0.0 || w.pattern <= 0.0 || w.garment_type <= 0.0 {
            anyhow::bail!("Pair weights must be positive");
        }

        let f = &self.formality;
        if !(f.excellent_spread < f.neutral_spread && f.neutral_spread < f.minor_spread) {
            anyhow::bail!("Formality spread thresholds must be strictly ascending");
        }

        Ok(())
    }

    fn lookup(matrix: &AffinityMatrix, a: &str, b: &str) -> f64 {
        matrix
            .get(a)
            .and_then(|row| row.get(b))
            .or_else(|| matrix.get(b).and_then(|row| row.get(a)))
            .copied()
            .unwrap_or(NEUTRAL_AFFINITY)
    }

    /// Symmetric color affinity; diagonal entries are intentionally low to
    /// discourage exact color repetition across distinct garments.
    pub fn color_affinity(&self, a: Color, b: Color) -> f64 {
        Self::lookup(&self.colors, a.as_str(), b.as_str())
    }

    /// Symmetric affinity over free-form type labels. Same-type pairs score
    /// low; labels absent from the table score neutral.
    pub fn type_affinity(&self, a: &str, b: &str) -> f64 {
        Self::lookup(&self.types, a, b)
    }

    /// Symmetric pattern affinity. Solid pairs well with anything; busy
    /// patterns clash with each other.
    pub fn pattern_affinity(&self, a: Pattern, b: Pattern) -> f64 {
        Self::lookup(&self.patterns, a.as_str(), b.as_str())
    }

    /// Color affinity widened to full garment palettes: the mean of every
    /// cross-palette color pair, rounded to one decimal. Symmetric under
    /// operand swap and identical to `color_affinity` for two single-color
    /// garments.
    pub fn color_affinity_multi(&self, a: &Garment, b: &Garment) -> f64 {
        let palette_a = a.palette();
        let palette_b = b.palette();

        let mut total = 0.0;
        for &color_a in &palette_a {
            for &color_b in &palette_b {
                total += self.color_affinity(color_a, color_b);
            }
        }
        round1(total / (palette_a.len() * palette_b.len()) as f64)
    }
}

/// Round to one decimal, the precision every reported score carries.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
