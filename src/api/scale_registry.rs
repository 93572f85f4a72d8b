use crate::core::{Continent, CountryRecord, LinearScale, LogScale, RadiusScale};
use crate::render::Color;

use super::palette::OrdinalColorScale;
use super::transition::MarkAttrs;

/// The four domain-to-visual mappings behind every rendered mark.
///
/// Geometry scales work in plot-local pixels; `origin` is the plot area's
/// top-left corner in viewport coordinates and is folded in by
/// `attrs_for`, so mark targets come out viewport-absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRegistry {
    x: LogScale,
    y: LinearScale,
    radius: RadiusScale,
    color: OrdinalColorScale,
    origin: (f64, f64),
}

impl ScaleRegistry {
    #[must_use]
    pub fn new(
        x: LogScale,
        y: LinearScale,
        radius: RadiusScale,
        color: OrdinalColorScale,
        origin: (f64, f64),
    ) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            origin,
        }
    }

    #[must_use]
    pub fn x(&self) -> LogScale {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> LinearScale {
        self.y
    }

    #[must_use]
    pub fn radius(&self) -> RadiusScale {
        self.radius
    }

    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    /// Viewport-absolute target attributes for one record.
    #[must_use]
    pub fn attrs_for(&self, record: &CountryRecord) -> MarkAttrs {
        MarkAttrs {
            cx: self.origin.0 + self.x.map(record.income),
            cy: self.origin.1 + self.y.map(record.life_exp),
            radius: self.radius.radius_for(record.population),
        }
    }

    pub fn color_for(&mut self, continent: Continent) -> Color {
        self.color.color_for(continent)
    }

    #[must_use]
    pub fn assigned_color(&self, continent: Continent) -> Option<Color> {
        self.color.assigned_color(continent)
    }
}
