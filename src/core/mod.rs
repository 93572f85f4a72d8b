pub mod dataset;
pub mod scale;
pub mod types;

pub use dataset::{DEFAULT_BASE_YEAR, Dataset, RawCountryRecord, RawYearRecord};
pub use scale::{LinearScale, LogScale, RadiusScale};
pub use types::{Continent, ContinentFilter, CountryRecord, Margins, Viewport, YearSlice};
