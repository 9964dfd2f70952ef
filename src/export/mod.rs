pub mod exporter;
pub mod output;
pub mod sheet;
pub mod xlsx;

pub use exporter::TabularExporter;
pub use output::write_output;
pub use sheet::{Sheet, TabularRecord};
pub use xlsx::{WorkbookSerializer, XlsxSerializer};

#[cfg(test)]
pub use xlsx::MockWorkbookSerializer;
