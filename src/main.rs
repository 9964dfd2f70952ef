mod config;
mod error;
mod export;
mod generators;
mod series;

use std::path::PathBuf;

use env_logger::Env;
use log::{debug, error, info};

use crate::config::AppConfig;
use crate::error::{SensorgenError, error_chain};
use crate::export::{TabularExporter, WorkbookSerializer, XlsxSerializer};
use crate::series::SeriesSynthesizer;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    debug!("Running with {config:?}");

    match run(&config, XlsxSerializer::new()) {
        Ok(path) => info!("Output written to {}", path.display()),
        Err(e) => {
            error!("{}", error_chain(&e));
            std::process::exit(1);
        }
    }
}

/// Generates the whole series, then exports it. Nothing is written unless
/// generation and serialization both succeed.
fn run<S: WorkbookSerializer>(
    config: &AppConfig,
    serializer: S,
) -> Result<PathBuf, SensorgenError> {
    let records = SeriesSynthesizer::from_config(&config.series)?.synthesize()?;

    let output = &config.output;
    TabularExporter::new(serializer).export_to_file(
        &records,
        &output.column_names,
        &output.sheet_name,
        &output.dir,
        &output.file_name,
    )
}
