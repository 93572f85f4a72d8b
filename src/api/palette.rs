use indexmap::IndexMap;

use crate::core::Continent;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Pastel categorical palette backing the default ordinal color scale.
///
/// Nine visually distinct entries; the chart uses at most five, one per
/// continent, and the remainder keeps the scale total for larger keysets.
pub const CATEGORICAL_PALETTE: [Color; 9] = [
    Color::from_rgb8(0xfb, 0xb4, 0xae),
    Color::from_rgb8(0xb3, 0xcd, 0xe3),
    Color::from_rgb8(0xcc, 0xeb, 0xc5),
    Color::from_rgb8(0xde, 0xcb, 0xe4),
    Color::from_rgb8(0xfe, 0xd9, 0xa6),
    Color::from_rgb8(0xff, 0xff, 0xcc),
    Color::from_rgb8(0xe5, 0xd8, 0xbd),
    Color::from_rgb8(0xfd, 0xda, 0xec),
    Color::from_rgb8(0xf2, 0xf2, 0xf2),
];

/// Ordinal continent-to-color mapping.
///
/// Palette slots are assigned in first-seen key order and keep their
/// assignment for the lifetime of the scale, so a continent renders in the
/// same color on every frame. Keysets longer than the palette wrap around.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalColorScale {
    palette: Vec<Color>,
    assigned: IndexMap<Continent, usize>,
}

impl OrdinalColorScale {
    pub fn new(palette: Vec<Color>) -> ChartResult<Self> {
        if palette.is_empty() {
            return Err(ChartError::InvalidConfig(
                "ordinal color palette must not be empty".to_owned(),
            ));
        }
        for color in &palette {
            color.validate()?;
        }

        Ok(Self {
            palette,
            assigned: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn with_default_palette() -> Self {
        Self {
            palette: CATEGORICAL_PALETTE.to_vec(),
            assigned: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    /// Returns the key's color, assigning the next free palette slot on
    /// first sight.
    pub fn color_for(&mut self, key: Continent) -> Color {
        let next_slot = self.assigned.len() % self.palette.len();
        let slot = *self.assigned.entry(key).or_insert(next_slot);
        self.palette[slot]
    }

    /// Returns the key's color only if a slot was already assigned.
    #[must_use]
    pub fn assigned_color(&self, key: Continent) -> Option<Color> {
        self.assigned.get(&key).map(|slot| self.palette[*slot])
    }
}
