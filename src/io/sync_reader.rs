//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over ledger records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read and deserialize CSV records sequentially,
//! delegating conversion to the csv_format module. Records are processed one at a
//! time without loading the entire file into memory.
//!
//! ```no_run
//! use expense_splitter::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("ledger.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Processing record: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants carrying their line number

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerRecord, SplitError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader yielding ledger records
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Open a ledger file
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the file does not exist, or `IoError` if it
    /// cannot be opened.
    pub fn new(path: &Path) -> Result<Self, SplitError> {
        let file = open_input(path)?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

/// Open an input file, distinguishing a missing file from other failures
pub(crate) fn open_input(path: &Path) -> Result<File, SplitError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SplitError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => SplitError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })
}

impl Iterator for SyncReader {
    type Item = Result<LedgerRecord, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let row = deserializer.next()?;
        self.line_num += 1;

        let line = self.line_num;
        Some(
            row.map_err(SplitError::from)
                .and_then(convert_csv_record)
                .map_err(|e| e.at_line(line)),
        )
    }
}
