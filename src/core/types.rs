use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel insets separating the plot area from the viewport edges.
///
/// The left and bottom margins leave room for the axis captions; axis lines
/// sit on the plot-area edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[must_use]
    pub fn plot_width(self, viewport: Viewport) -> f64 {
        f64::from(viewport.width) - self.left - self.right
    }

    #[must_use]
    pub fn plot_height(self, viewport: Viewport) -> f64 {
        f64::from(viewport.height) - self.top - self.bottom
    }

    #[must_use]
    pub fn is_valid(self, viewport: Viewport) -> bool {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .all(|inset| inset.is_finite() && *inset >= 0.0)
            && self.plot_width(viewport) > 0.0
            && self.plot_height(viewport) > 0.0
    }
}

/// Continent category carried by every country record.
///
/// The working dataset is closed over this enum; raw records naming any
/// other continent are treated as malformed and dropped at normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Continent {
    /// Case-insensitive parse of the raw dataset spelling.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "africa" => Some(Self::Africa),
            "americas" => Some(Self::Americas),
            "asia" => Some(Self::Asia),
            "europe" => Some(Self::Europe),
            "oceania" => Some(Self::Oceania),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Africa => "africa",
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Oceania => "oceania",
        }
    }

    /// Capitalized display form used by the legend and tooltip.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
        }
    }
}

/// Continent restriction applied to every rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContinentFilter {
    All,
    Only(Continent),
}

impl ContinentFilter {
    #[must_use]
    pub fn admits(self, continent: Continent) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == continent,
        }
    }
}

impl Default for ContinentFilter {
    fn default() -> Self {
        Self::All
    }
}

/// One country's sample for one year, already validated and numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub continent: Continent,
    pub income: f64,
    pub life_exp: f64,
    pub population: f64,
}

/// The validated records for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSlice {
    pub year: i32,
    pub records: Vec<CountryRecord>,
}

impl YearSlice {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
