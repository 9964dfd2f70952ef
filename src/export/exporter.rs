use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::SensorgenError;
use crate::export::write_output;
use crate::export::sheet::{Sheet, TabularRecord};
use crate::export::xlsx::WorkbookSerializer;

pub struct TabularExporter<S: WorkbookSerializer> {
    serializer: S,
}

impl<S: WorkbookSerializer> TabularExporter<S> {
    pub fn new(serializer: S) -> Self {
        Self { serializer }
    }

    /// Lays out `records` under `headers` in a sheet called `sheet_name` and
    /// returns the encoded workbook.
    pub fn export<R: TabularRecord>(
        &self,
        records: &[R],
        headers: &[String],
        sheet_name: &str,
    ) -> Result<Vec<u8>, SensorgenError> {
        let sheet = Sheet::from_records(records, headers, sheet_name);
        debug!(
            "Serializing sheet {} with {} data rows",
            sheet.name,
            sheet.data_rows().len()
        );
        self.serializer.serialize(&sheet)
    }

    pub fn export_to_file<R: TabularRecord>(
        &self,
        records: &[R],
        headers: &[String],
        sheet_name: &str,
        dir: &Path,
        file_name: &str,
    ) -> Result<PathBuf, SensorgenError> {
        let bytes = self.export(records, headers, sheet_name)?;

        info!("writing to disk...");
        let path = write_output(dir, file_name, &bytes)?;
        info!("write to disk successfully!");

        Ok(path)
    }
}
