//! Asynchronous CSV reader with batch interface
//!
//! Provides a streaming interface over ledger records from a CSV file.
//! Supports batch reading for efficient async processing.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of LedgerRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```
//!
//! Rows that fail to parse or convert are logged with their line number and
//! skipped, as the synchronous strategy does.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerRecord, SplitError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Batch reader over an async byte source
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    line_num: u64,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            line_num: 1,
        }
    }

    /// Read up to `batch_size` valid records
    ///
    /// An empty batch means the input is exhausted.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<LedgerRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            let Some(row) = records.next().await else {
                break;
            };
            self.line_num += 1;

            let converted = row
                .map_err(|e| SplitError::parse(e.to_string()))
                .and_then(convert_csv_record)
                .map_err(|e| e.at_line(self.line_num));

            match converted {
                Ok(record) => batch.push(record),
                Err(e) => warn!("Skipping row: {}", e),
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;

    const HEADER: &str = "kind,group,expense,member,amount,note\n";

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let csv_content = format!(
            "{}group,1,,,,Trip\nmember,1,,alice,,\ngroup,2,,,,Flat\n",
            HEADER
        );
        let reader = Cursor::new(csv_content.into_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].group(), 1);
        assert!(matches!(batch[1], LedgerRecord::Member { .. }));

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].group(), 2);

        assert!(async_reader.read_batch(2).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let reader = Cursor::new(HEADER.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 0);
    }

    #[tokio::test]
    async fn test_async_reader_skips_invalid_rows() {
        let csv_content = format!(
            "{}refund,1,1,alice,1.00,\nsplit,1,,alice,1.00,\npayment,1,oops,alice,1.00,\npayment,1,2,alice,1.00,\n",
            HEADER
        );
        let reader = Cursor::new(csv_content.into_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(10).await;

        assert_eq!(batch.len(), 1);
        assert!(matches!(
            batch[0],
            LedgerRecord::Payment { expense: 2, .. }
        ));
    }
}
