use std::borrow::Cow;

/// A record that can be laid out as one table row.
///
/// Cells must come back in the same order as the header row of the sheet
/// they are written to; nothing checks names.
pub trait TabularRecord {
    fn cells(&self) -> Vec<Cow<'_, str>>;
}

/// One named grid of text cells. Row 0 is the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn from_records<R: TabularRecord>(records: &[R], headers: &[String], name: &str) -> Self {
        let mut rows = Vec::with_capacity(records.len() + 1);
        rows.push(headers.to_vec());
        rows.extend(
            records
                .iter()
                .map(|record| record.cells().into_iter().map(Cow::into_owned).collect()),
        );

        Self {
            name: name.to_string(),
            rows,
        }
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }
}
