use crate::csv_processor::row::{RowSchema, SourceRow};
use crate::utils::{ImporterError, Result};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

pub struct CsvStreamReader<R: Read> {
    reader: csv::Reader<R>,
    schema: RowSchema,
    current_index: usize,
    exhausted: bool,
}

impl CsvStreamReader<std::fs::File> {
    pub fn open(path: &str, delimiter: u8) -> Result<Self> {
        if !file_exists(path) {
            return Err(ImporterError::FileNotFound(path.to_string()));
        }
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, delimiter)
    }
}

impl<R: Read> CsvStreamReader<R> {
    /// Reads the header row and resolves the column schema.
    pub fn from_reader(input: R, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        let schema = RowSchema::from_headers(&headers);

        let missing = schema.missing_columns();
        if !missing.is_empty() {
            tracing::warn!(columns = ?missing, "CSV header is missing expected columns");
        }

        Ok(Self {
            reader,
            schema,
            current_index: 0,
            exhausted: false,
        })
    }
}

/// Yields `(row_number, row)` with 1-based data row numbers. A record that
/// cannot be decoded still consumes a row number.
impl<R: Read> Iterator for CsvStreamReader<R> {
    type Item = (usize, Result<SourceRow>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {
                self.current_index += 1;
                Some((self.current_index, Ok(self.schema.parse(&record))))
            }
            Ok(false) => {
                self.exhausted = true;
                None
            }
            Err(e) => {
                if e.is_io_error() {
                    self.exhausted = true;
                }
                self.current_index += 1;
                Some((self.current_index, Err(ImporterError::CsvError(e))))
            }
        }
    }
}

pub fn file_exists(path: &str) -> bool {
    Path::new(path).is_file()
}
