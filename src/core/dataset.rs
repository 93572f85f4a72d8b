use serde::Deserialize;
use tracing::debug;

use crate::core::types::{Continent, CountryRecord, YearSlice};
use crate::error::{ChartError, ChartResult};

/// First calendar year of the reference dataset; slice index `i` holds
/// year `base_year + i`.
pub const DEFAULT_BASE_YEAR: i32 = 1800;

/// One country entry exactly as it appears in the input document: numeric
/// fields arrive as string numerals and any of them may be absent or null.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountryRecord {
    pub country: String,
    pub continent: String,
    #[serde(default)]
    pub income: Option<String>,
    #[serde(default)]
    pub life_exp: Option<String>,
    #[serde(default)]
    pub population: Option<f64>,
}

impl RawCountryRecord {
    /// Validates and coerces one raw entry.
    ///
    /// Entries missing `income` or `life_exp`, carrying non-numeric text in
    /// either, carrying a non-positive income, or naming an unknown
    /// continent are excluded from the working dataset. Population is not
    /// validated and defaults to zero when absent.
    #[must_use]
    pub fn normalize(self) -> Option<CountryRecord> {
        let income = parse_numeric_field(self.income.as_deref())?;
        if income <= 0.0 {
            return None;
        }
        let life_exp = parse_numeric_field(self.life_exp.as_deref())?;
        let continent = Continent::parse(&self.continent)?;

        Some(CountryRecord {
            country: self.country,
            continent,
            income,
            life_exp,
            population: self.population.unwrap_or(0.0),
        })
    }
}

fn parse_numeric_field(field: Option<&str>) -> Option<f64> {
    let text = field?.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// One year object of the input document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawYearRecord {
    pub countries: Vec<RawCountryRecord>,
}

/// The normalized, immutable working dataset: one validated slice per year,
/// ordered ascending from the base year. Built once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    slices: Vec<YearSlice>,
    base_year: i32,
}

impl Dataset {
    /// Parses and normalizes a full dataset document.
    ///
    /// A parse failure of the document itself is fatal to startup by
    /// contract and surfaces as an error; malformed country entries inside
    /// a well-formed document are silently excluded.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: Vec<RawYearRecord> = serde_json::from_str(input)?;
        Self::from_raw(raw, DEFAULT_BASE_YEAR)
    }

    pub fn from_raw(raw: Vec<RawYearRecord>, base_year: i32) -> ChartResult<Self> {
        if raw.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let mut kept = 0usize;
        let mut dropped = 0usize;
        let slices: Vec<YearSlice> = raw
            .into_iter()
            .enumerate()
            .map(|(index, year)| {
                let records: Vec<CountryRecord> = year
                    .countries
                    .into_iter()
                    .filter_map(|raw_record| match raw_record.normalize() {
                        Some(record) => {
                            kept += 1;
                            Some(record)
                        }
                        None => {
                            dropped += 1;
                            None
                        }
                    })
                    .collect();
                YearSlice {
                    year: base_year + index as i32,
                    records,
                }
            })
            .collect();

        debug!(
            slices = slices.len(),
            kept, dropped, "normalized dataset document"
        );

        Ok(Self { slices, base_year })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    #[must_use]
    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.slices.len() - 1
    }

    #[must_use]
    pub fn slice(&self, index: usize) -> Option<&YearSlice> {
        self.slices.get(index)
    }

    #[must_use]
    pub fn slices(&self) -> &[YearSlice] {
        &self.slices
    }

    #[must_use]
    pub fn year_at(&self, index: usize) -> i32 {
        self.base_year + index as i32
    }

    #[must_use]
    pub fn index_for_year(&self, year: i32) -> Option<usize> {
        let offset = year.checked_sub(self.base_year)?;
        if offset < 0 || offset as usize >= self.slices.len() {
            return None;
        }
        Some(offset as usize)
    }
}
