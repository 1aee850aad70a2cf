//! Garment data model and wardrobe loading.
//!
//! The surrounding application owns item CRUD and slot classification; this
//! module only defines the attribute records the scoring engine consumes and
//! a JSON reader for a full wardrobe export.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fs;
use std::path::Path;

/// Body slot a garment occupies. Determines which wardrobe subset is
/// searched during substitution; never used directly in pairwise scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Top,
    Bottom,
    Footwear,
    Outerwear,
    Accessory,
}

/// Fixed color palette. Free-form colors from upstream are mapped to
/// `Other` before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
    Gray,
    Navy,
    Blue,
    Red,
    Green,
    Yellow,
    Orange,
    Pink,
    Purple,
    Brown,
    Beige,
    Multicolor,
    Other,
}

impl Color {
    /// Table key for affinity lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::Gray => "Gray",
            Color::Navy => "Navy",
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Pink => "Pink",
            Color::Purple => "Purple",
            Color::Brown => "Brown",
            Color::Beige => "Beige",
            Color::Multicolor => "Multicolor",
            Color::Other => "Other",
        }
    }
}

/// Visual pattern. Anything upstream cannot classify arrives as `Solid`,
/// which is also the serde default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Pattern {
    #[default]
    Solid,
    Striped,
    Plaid,
    Floral,
    PolkaDot,
    Checkered,
    Graphic,
}

impl Pattern {
    /// Table key for affinity lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Solid => "Solid",
            Pattern::Striped => "Striped",
            Pattern::Plaid => "Plaid",
            Pattern::Floral => "Floral",
            Pattern::PolkaDot => "PolkaDot",
            Pattern::Checkered => "Checkered",
            Pattern::Graphic => "Graphic",
        }
    }

    pub fn is_patterned(&self) -> bool {
        !matches!(self, Pattern::Solid)
    }
}

/// One garment's attributes, immutable for the duration of a rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Garment {
    pub id: String,
    pub category: Category,
    /// Free-form type label ("T-shirt", "Jeans"); validated against the
    /// type table at lookup time, unknown labels score neutral.
    pub garment_type: String,
    pub primary_color: Color,
    #[serde(default)]
    pub secondary_colors: Vec<Color>,
    #[serde(default)]
    pub pattern: Pattern,
    /// Optional 1-5 formality set by the user; absent values are excluded
    /// from the formality-spread computation.
    #[serde(default)]
    pub formality: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Garment {
    /// All colors on this garment, primary first. Garments rarely carry
    /// more than one or two secondaries, so the list stays on the stack.
    pub fn palette(&self) -> SmallVec<[Color; 4]> {
        let mut colors = SmallVec::new();
        colors.push(self.primary_color);
        colors.extend(self.secondary_colors.iter().copied());
        colors
    }

    /// Short display label for feedback strings, e.g. "Black T-shirt".
    pub fn label(&self) -> String {
        format!("{} {}", self.primary_color.as_str(), self.garment_type)
    }
}

/// A candidate outfit: at most one garment per body slot plus any number of
/// accessories. Built fresh by the caller per rating request, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutfitSelection {
    pub top: Option<Garment>,
    pub bottom: Option<Garment>,
    pub footwear: Option<Garment>,
    pub outerwear: Option<Garment>,
    #[serde(default)]
    pub accessories: Vec<Garment>,
}

impl OutfitSelection {
    /// Place a garment into the slot its category dictates, replacing any
    /// existing occupant of a single-garment slot.
    pub fn place(&mut self, garment: Garment) {
        match garment.category {
            Category::Top => self.top = Some(garment),
            Category::Bottom => self.bottom = Some(garment),
            Category::Footwear => self.footwear = Some(garment),
            Category::Outerwear => self.outerwear = Some(garment),
            Category::Accessory => self.accessories.push(garment),
        }
    }

    /// Build a selection from pre-classified garments.
    pub fn from_garments<I: IntoIterator<Item = Garment>>(garments: I) -> Self {
        let mut selection = Self::default();
        for garment in garments {
            selection.place(garment);
        }
        selection
    }

    /// Flatten the slots into a stable list: top, bottom, footwear,
    /// outerwear, then accessories in insertion order.
    pub fn garments(&self) -> Vec<&Garment> {
        let mut all = Vec::new();
        for slot in [&self.top, &self.bottom, &self.footwear, &self.outerwear] {
            if let Some(garment) = slot {
                all.push(garment);
            }
        }
        all.extend(self.accessories.iter());
        all
    }

    pub fn is_empty(&self) -> bool {
        self.garments().is_empty()
    }

    /// Copy of this selection with the garment carrying `target_id` swapped
    /// for `replacement`. Unknown ids leave the copy unchanged.
    pub fn with_swap(&self, target_id: &str, replacement: Garment) -> Self {
        let mut swapped = self.clone();
        let mut replacement = Some(replacement);
        for slot in [
            &mut swapped.top,
            &mut swapped.bottom,
            &mut swapped.footwear,
            &mut swapped.outerwear,
        ] {
            if replacement.is_some() && slot.as_ref().is_some_and(|g| g.id == target_id) {
                *slot = replacement.take();
            }
        }
        if let Some(replacement) = replacement {
            if let Some(accessory) = swapped.accessories.iter_mut().find(|g| g.id == target_id) {
                *accessory = replacement;
            }
        }
        swapped
    }
}

/// Read a full wardrobe export (JSON array of garments). Stands in for the
/// garment-repository accessor owned by the surrounding application.
pub fn load_wardrobe(path: &Path) -> Result<Vec<Garment>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read wardrobe file: {:?}", path))?;

    let wardrobe: Vec<Garment> =
        serde_json::from_str(&contents).with_context(|| "Failed to parse wardrobe JSON")?;

    Ok(wardrobe)
}
