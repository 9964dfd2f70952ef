use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::export::TabularRecord;

/// Layout of the `Time` column: UTC, whole seconds, no zone suffix.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Half-open interval `[min, max)` that readings are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Shape of the thermal sensor. Only the cell count reaches the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThermalGrid {
    pub rows: usize,
    pub cols: usize,
}

impl ThermalGrid {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorRecord {
    pub time: DateTime<Utc>,
    pub humidity: String,
    pub temperature: String,
    /// Row-major cell readings joined with commas.
    pub thermal_array: String,
}

impl SensorRecord {
    pub fn time_string(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

impl TabularRecord for SensorRecord {
    fn cells(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.time_string()),
            Cow::Borrowed(self.humidity.as_str()),
            Cow::Borrowed(self.temperature.as_str()),
            Cow::Borrowed(self.thermal_array.as_str()),
        ]
    }
}
