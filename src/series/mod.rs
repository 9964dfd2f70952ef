pub mod models;
pub mod synthesizer;

pub use models::{SensorRecord, ThermalGrid, ValueRange};
pub use synthesizer::SeriesSynthesizer;
