use async_trait::async_trait;
use std::fs::File;
use std::path::Path;

use crate::error::SinkError;
use crate::export::RecordSink;
use crate::types::PlayerRecord;

/// Writes records to a local CSV file instead of the datastore.
pub struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

#[async_trait]
impl RecordSink for CsvSink {
    async fn insert(&mut self, record: &PlayerRecord) -> Result<(), SinkError> {
        self.writer.serialize(record)?;
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}
