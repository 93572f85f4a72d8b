use crate::error::{ChartError, ChartResult};

fn validate_span(name: &str, start: f64, end: f64) -> ChartResult<()> {
    if !start.is_finite() || !end.is_finite() || start == end {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and non-degenerate: start={start}, end={end}"
        )));
    }
    Ok(())
}

/// Linear interpolation from a domain interval onto a pixel interval.
///
/// Ranges may run backwards; the y axis maps onto `[plot_height, 0]` so
/// larger values sit higher on screen. Out-of-domain values extrapolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        validate_span("linear scale domain", domain_start, domain_end)?;
        validate_span("linear scale range", range_start, range_end)?;

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 {
            return Vec::new();
        }
        if tick_count == 1 {
            return vec![self.domain_start];
        }

        let span = self.domain_end - self.domain_start;
        let denominator = (tick_count - 1) as f64;
        (0..tick_count)
            .map(|index| {
                let ratio = (index as f64) / denominator;
                self.domain_start + span * ratio
            })
            .collect()
    }
}

/// Base-10 logarithmic interpolation from a positive domain onto pixels.
///
/// Equal order-of-magnitude steps land at equal pixel spacing. Non-positive
/// input is outside the declared domain and yields NaN through the log, the
/// same way an unchecked log-scale lookup would; the dataset normalizer
/// keeps such values out of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    log_domain_start: f64,
    log_domain_end: f64,
}

impl LogScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        validate_span("log scale domain", domain_start, domain_end)?;
        validate_span("log scale range", range_start, range_end)?;
        if domain_start <= 0.0 || domain_end <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "log scale domain must be strictly positive: start={domain_start}, end={domain_end}"
            )));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
            log_domain_start: domain_start.log10(),
            log_domain_end: domain_end.log10(),
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized =
            (value.log10() - self.log_domain_start) / (self.log_domain_end - self.log_domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        10f64.powf(self.log_domain_start + normalized * (self.log_domain_end - self.log_domain_start))
    }
}

/// Population-to-radius mapping with a perceptually linear area encoding.
///
/// The domain interpolates linearly onto an area interval; the radius is
/// derived as `sqrt(area / pi)`, so the circle's area, not its radius,
/// grows linearly with population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    area: LinearScale,
}

impl RadiusScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        area_start: f64,
        area_end: f64,
    ) -> ChartResult<Self> {
        if area_start < 0.0 || area_end < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "radius scale area range must be non-negative: start={area_start}, end={area_end}"
            )));
        }
        Ok(Self {
            area: LinearScale::new(domain_start, domain_end, area_start, area_end)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.area.domain()
    }

    #[must_use]
    pub fn area_for(self, value: f64) -> f64 {
        self.area.map(value)
    }

    #[must_use]
    pub fn radius_for(self, value: f64) -> f64 {
        (self.area.map(value) / std::f64::consts::PI).sqrt()
    }
}
