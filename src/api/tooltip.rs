use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::CountryRecord;
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::format::{capitalize, format_currency, format_decimal, format_grouped};
use super::reconcile::MarkSet;

const TOOLTIP_FONT_PX: f64 = 11.0;
const TOOLTIP_LINE_PX: f64 = 16.0;
const TOOLTIP_PADDING_PX: f64 = 8.0;
const TOOLTIP_OFFSET_PX: f64 = 12.0;
const TOOLTIP_CHAR_WIDTH_PX: f64 = 6.5;
const TOOLTIP_BACKGROUND: Color = Color::rgba(0.15, 0.15, 0.15, 0.9);
const TOOLTIP_TEXT_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

/// Formatted hover card for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub country: String,
    pub lines: Vec<String>,
}

/// Finds the mark under the pointer, if any.
///
/// Containment is tested against the current interpolated attributes; when
/// circles overlap, the mark whose center is nearest the pointer wins.
pub(super) fn hit_test<'a>(marks: &'a MarkSet, x: f64, y: f64) -> Option<&'a str> {
    let mut hits: SmallVec<[(OrderedFloat<f64>, &str); 4]> = SmallVec::new();
    for (country, mark) in marks.iter() {
        let attrs = mark.attrs();
        let dx = x - attrs.cx;
        let dy = y - attrs.cy;
        let distance_sq = dx * dx + dy * dy;
        if distance_sq <= attrs.radius * attrs.radius {
            hits.push((OrderedFloat(distance_sq), country));
        }
    }

    hits.into_iter()
        .min_by_key(|(distance_sq, _)| *distance_sq)
        .map(|(_, country)| country)
}

pub(super) fn content_for(record: &CountryRecord) -> TooltipContent {
    TooltipContent {
        country: record.country.clone(),
        lines: vec![
            format!("Country: {}", capitalize(&record.country)),
            format!("Continent: {}", record.continent.label()),
            format!("Population: {}", format_grouped(record.population)),
            format!("GDP Per Capita: {}", format_currency(record.income)),
            format!(
                "Life Expectancy: {} Years",
                format_decimal(record.life_exp, 2)
            ),
        ],
    }
}

/// Emits the hover card as a background rect plus text lines anchored just
/// below and to the right of the pointer.
pub(super) fn extend_frame(frame: &mut RenderFrame, x: f64, y: f64, content: &TooltipContent) {
    let widest = content
        .lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let box_width = widest * TOOLTIP_CHAR_WIDTH_PX + TOOLTIP_PADDING_PX * 2.0;
    let box_height = content.lines.len() as f64 * TOOLTIP_LINE_PX + TOOLTIP_PADDING_PX * 2.0;
    let box_x = x + TOOLTIP_OFFSET_PX;
    let box_y = y + TOOLTIP_OFFSET_PX;

    frame.rects.push(RectPrimitive::filled(
        box_x,
        box_y,
        box_width,
        box_height,
        TOOLTIP_BACKGROUND,
    ));
    for (row, line) in content.lines.iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            line.clone(),
            box_x + TOOLTIP_PADDING_PX,
            box_y + TOOLTIP_PADDING_PX + row as f64 * TOOLTIP_LINE_PX,
            TOOLTIP_FONT_PX,
            TOOLTIP_TEXT_COLOR,
            TextHAlign::Left,
        ));
    }
}
