use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Upper bound on the number of axis markers generated per axis.
pub const MAX_MARKER_COUNT: usize = 50;

/// Linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, range_start: f64, range_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(PlotError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Fits a scale to the extent of `values`.
    ///
    /// A flat extent (all values equal) is widened by one unit on each side
    /// so the mapping stays defined.
    pub fn fit(values: impl IntoIterator<Item = f64>, range_start: f64, range_end: f64) -> PlotResult<Self> {
        let (min, max) = extent(values).ok_or_else(|| {
            PlotError::InvalidData("cannot fit a scale to an empty value set".to_owned())
        })?;
        if min == max {
            return Self::new(min - 1.0, max + 1.0, range_start, range_end);
        }
        Self::new(min, max, range_start, range_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn map(self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> PlotResult<f64> {
        if !pixel.is_finite() {
            return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Err(PlotError::InvalidData(
                "cannot invert a scale with an empty range".to_owned(),
            ));
        }
        let normalized = (pixel - self.range_start) / span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Evenly spaced "nice" values (1, 2 or 5 × 10ⁿ steps) covering the
    /// domain, at most `max_count` of them.
    #[must_use]
    pub fn nice_ticks(self, max_count: usize) -> Vec<f64> {
        let (low, high) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        let max_count = max_count.clamp(2, MAX_MARKER_COUNT);
        let step = nice_step((high - low) / (max_count - 1) as f64);
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }

        let first = (low / step).ceil() * step;
        let mut ticks = Vec::with_capacity(max_count);
        let mut index = 0usize;
        loop {
            let value = first + index as f64 * step;
            // Tolerate accumulated rounding at the upper end.
            if value > high + step * 1e-9 || ticks.len() >= MAX_MARKER_COUNT {
                break;
            }
            ticks.push(snap_to_step(value, step));
            index += 1;
        }
        ticks
    }
}

/// Minimum and maximum of the finite values, or `None` when there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn snap_to_step(value: f64, step: f64) -> f64 {
    let snapped = (value / step).round() * step;
    if snapped.abs() < step * 1e-9 { 0.0 } else { snapped }
}
