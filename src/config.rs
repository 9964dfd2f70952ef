use std::path::PathBuf;

use chrono::{DateTime, TimeDelta, Utc};

use crate::series::{ThermalGrid, ValueRange};

pub const DATA_COUNT: usize = 1000;
/// 2023-03-03 00:00:00 UTC
pub const INITIAL_DATA_TIME_SECS: i64 = 1_677_801_600;
pub const DATA_INTERVAL_MINUTES: i64 = 3;

pub const HUMIDITY_RANGE: ValueRange = ValueRange::new(30.0, 60.0);
pub const TEMPERATURE_RANGE: ValueRange = ValueRange::new(30.0, 60.0);
pub const THERMAL_ARRAY_RANGE: ValueRange = ValueRange::new(30.0, 60.0);
pub const THERMAL_GRID: ThermalGrid = ThermalGrid::new(24, 32);
pub const VALUE_PRECISION: usize = 2;
pub const PROGRESS_EVERY: usize = 10_000;

pub const OUTPUT_DIR: &str = "./output";
pub const FILE_NAME: &str = "data.xlsx";
pub const SHEET_NAME: &str = "SensorData";
// "Tempurature" is the column name downstream consumers already read.
pub const COLUMN_NAMES: [&str; 4] = ["Time", "Humidity", "Tempurature", "ThermalArray"];

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesConfig {
    pub count: usize,
    pub start: DateTime<Utc>,
    pub interval: TimeDelta,
    pub humidity: ValueRange,
    pub temperature: ValueRange,
    pub thermal: ValueRange,
    pub grid: ThermalGrid,
    pub precision: usize,
    /// Emit a progress line every this many records; 0 disables it.
    pub progress_every: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            count: DATA_COUNT,
            start: DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(INITIAL_DATA_TIME_SECS),
            interval: TimeDelta::minutes(DATA_INTERVAL_MINUTES),
            humidity: HUMIDITY_RANGE,
            temperature: TEMPERATURE_RANGE,
            thermal: THERMAL_ARRAY_RANGE,
            grid: THERMAL_GRID,
            precision: VALUE_PRECISION,
            progress_every: PROGRESS_EVERY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub file_name: String,
    pub sheet_name: String,
    pub column_names: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(OUTPUT_DIR),
            file_name: FILE_NAME.to_string(),
            sheet_name: SHEET_NAME.to_string(),
            column_names: COLUMN_NAMES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Every parameter of a run. There is no runtime input; `Default` is the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub series: SeriesConfig,
    pub output: OutputConfig,
}
