use rust_xlsxwriter::{ColNum, RowNum, Workbook};

use crate::error::SensorgenError;
use crate::export::Sheet;

#[cfg_attr(test, mockall::automock)]
pub trait WorkbookSerializer: Send {
    /// Encodes a one-sheet workbook holding `sheet`.
    fn serialize(&self, sheet: &Sheet) -> Result<Vec<u8>, SensorgenError>;
}

/// Writes plain string cells into an `.xlsx` container. No styles, no formulas.
pub struct XlsxSerializer;

impl XlsxSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XlsxSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbookSerializer for XlsxSerializer {
    fn serialize(&self, sheet: &Sheet) -> Result<Vec<u8>, SensorgenError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (row_index, row) in sheet.rows.iter().enumerate() {
            let row_num = RowNum::try_from(row_index).map_err(|_| {
                SensorgenError::Workbook(format!("row {row_index} exceeds the sheet limit"))
            })?;
            for (col_index, value) in row.iter().enumerate() {
                let col_num = ColNum::try_from(col_index).map_err(|_| {
                    SensorgenError::Workbook(format!("column {col_index} exceeds the sheet limit"))
                })?;
                worksheet.write_string(row_num, col_num, value)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}
