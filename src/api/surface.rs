use crate::core::{Continent, Margins, Viewport};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::format::{format_currency, format_decimal};
use super::scale_registry::ScaleRegistry;

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const AXIS_STROKE: f64 = 1.0;
const TICK_LEN: f64 = 6.0;
const TICK_FONT_PX: f64 = 11.0;
const TICK_LABEL_GAP: f64 = 3.0;
const CAPTION_FONT_PX: f64 = 14.0;
const LEGEND_FONT_PX: f64 = 12.0;
const LEGEND_SWATCH_PX: f64 = 10.0;
const LEGEND_ROW_PX: f64 = 20.0;
const YEAR_MARKER_FONT_PX: f64 = 40.0;
const YEAR_MARKER_ALPHA: f64 = 0.4;
const Y_TICK_COUNT: usize = 10;

/// Continents enumerated by the legend, in their fixed display order.
pub(super) const LEGEND_CONTINENTS: [Continent; 4] = [
    Continent::Africa,
    Continent::Americas,
    Continent::Europe,
    Continent::Asia,
];

/// The persistent visual scaffolding, constructed once at engine startup.
///
/// Everything here is static across frames except the year-marker text,
/// which is injected per frame by `extend_frame`.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ChartSurface {
    lines: Vec<LinePrimitive>,
    rects: Vec<RectPrimitive>,
    texts: Vec<TextPrimitive>,
    year_anchor: (f64, f64),
}

impl ChartSurface {
    /// Builds axes, captions, the legend, and the year-marker anchor.
    ///
    /// Takes the registry mutably so legend construction assigns the
    /// continent palette slots in display order before any data renders.
    pub fn new(
        viewport: Viewport,
        margins: Margins,
        registry: &mut ScaleRegistry,
        income_tick_values: &[f64],
    ) -> ChartResult<Self> {
        let left = margins.left;
        let top = margins.top;
        let plot_width = margins.plot_width(viewport);
        let plot_height = margins.plot_height(viewport);
        let baseline = top + plot_height;

        let mut lines = Vec::new();
        let mut rects = Vec::new();
        let mut texts = Vec::new();

        // Income axis along the bottom plot edge, ticks pointing down.
        lines.push(LinePrimitive::new(
            left,
            baseline,
            left + plot_width,
            baseline,
            AXIS_STROKE,
            AXIS_COLOR,
        ));
        for value in income_tick_values {
            let x = left + registry.x().map(*value);
            lines.push(LinePrimitive::new(
                x,
                baseline,
                x,
                baseline + TICK_LEN,
                AXIS_STROKE,
                AXIS_COLOR,
            ));
            texts.push(TextPrimitive::new(
                format_currency(*value),
                x,
                baseline + TICK_LEN + TICK_LABEL_GAP,
                TICK_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Center,
            ));
        }

        // Life-expectancy axis along the left plot edge, ticks pointing out.
        lines.push(LinePrimitive::new(
            left,
            top,
            left,
            baseline,
            AXIS_STROKE,
            AXIS_COLOR,
        ));
        for value in registry.y().ticks(Y_TICK_COUNT) {
            let y = top + registry.y().map(value);
            lines.push(LinePrimitive::new(
                left - TICK_LEN,
                y,
                left,
                y,
                AXIS_STROKE,
                AXIS_COLOR,
            ));
            texts.push(TextPrimitive::new(
                format_decimal(value, 0),
                left - TICK_LEN - TICK_LABEL_GAP,
                y - TICK_FONT_PX / 2.0,
                TICK_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Right,
            ));
        }

        // Axis captions.
        texts.push(TextPrimitive::new(
            "GDP Per Capita ($)",
            left + plot_width / 2.0,
            baseline + 50.0,
            CAPTION_FONT_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
        texts.push(
            TextPrimitive::new(
                "Life Expectancy (years)",
                left - 50.0,
                top + plot_height / 2.0,
                CAPTION_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Center,
            )
            .rotated(-90.0),
        );

        // Legend rows in the lower-right plot corner.
        let legend_x = left + plot_width - 10.0;
        let legend_y = baseline - 125.0;
        for (row, continent) in LEGEND_CONTINENTS.iter().enumerate() {
            let row_y = legend_y + row as f64 * LEGEND_ROW_PX;
            rects.push(RectPrimitive::filled(
                legend_x,
                row_y,
                LEGEND_SWATCH_PX,
                LEGEND_SWATCH_PX,
                registry.color_for(*continent),
            ));
            texts.push(TextPrimitive::new(
                continent.label(),
                legend_x - 10.0,
                row_y - 1.0,
                LEGEND_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Right,
            ));
        }

        let surface = Self {
            lines,
            rects,
            texts,
            year_anchor: (left + plot_width - 50.0, baseline - 50.0),
        };
        surface.validate()?;
        Ok(surface)
    }

    fn validate(&self) -> ChartResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        self.year_marker("0").validate()
    }

    fn year_marker(&self, year_label: &str) -> TextPrimitive {
        TextPrimitive::new(
            year_label,
            self.year_anchor.0,
            self.year_anchor.1,
            YEAR_MARKER_FONT_PX,
            AXIS_COLOR.with_alpha(YEAR_MARKER_ALPHA),
            TextHAlign::Center,
        )
    }

    /// Contributes the static scaffolding plus the current year marker.
    pub fn extend_frame(&self, frame: &mut RenderFrame, year_label: &str) {
        frame.lines.extend_from_slice(&self.lines);
        frame.rects.extend_from_slice(&self.rects);
        frame.texts.extend_from_slice(&self.texts);
        frame.texts.push(self.year_marker(year_label));
    }
}
