use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tracing::{error, info};

use crate::book::PlayerBook;
use crate::error::SinkError;
use crate::types::PlayerRecord;

/// A datastore that accepts one record per call.
#[async_trait]
pub trait RecordSink: Send {
    async fn insert(&mut self, record: &PlayerRecord) -> Result<(), SinkError>;

    /// Called once after the last insert.
    async fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub player_name: String,
    pub result: Result<(), SinkError>,
}

impl ExportOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub struct Exporter<K> {
    sink: K,
}

impl<K: RecordSink> Exporter<K> {
    pub fn new(sink: K) -> Self {
        Self { sink }
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Stamps every record with today's date and inserts them one by one.
    pub async fn export(&mut self, book: &mut PlayerBook) -> Vec<ExportOutcome> {
        let today = Local::now().date_naive();
        self.export_as_of(book, today).await
    }

    /// A failed insert is logged and recorded; the remaining records are
    /// still attempted.
    pub async fn export_as_of(&mut self, book: &mut PlayerBook, as_of: NaiveDate) -> Vec<ExportOutcome> {
        let mut outcomes = Vec::with_capacity(book.len());

        for record in book.records_mut() {
            record.as_of_date = Some(as_of);
            let result = self.sink.insert(record).await;
            match &result {
                Ok(()) => info!("Inserted player: {}", record.full_name),
                Err(e) => error!("Error inserting player: {}, Error: {}", record.full_name, e),
            }
            outcomes.push(ExportOutcome {
                player_name: record.full_name.clone(),
                result,
            });
        }

        if let Err(e) = self.sink.finish().await {
            error!("Failed to finish export: {}", e);
        }

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        info!(
            "Exported {} of {} records as of {}",
            outcomes.len() - failed,
            outcomes.len(),
            as_of
        );
        outcomes
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::builder::seed_records;
    use crate::types::RawLabel;

    /// Keeps inserted records in memory and rejects the names it is told to.
    #[derive(Default)]
    pub struct MemorySink {
        pub inserted: Vec<PlayerRecord>,
        pub reject: Vec<String>,
        pub finished: bool,
    }

    #[async_trait]
    impl RecordSink for MemorySink {
        async fn insert(&mut self, record: &PlayerRecord) -> Result<(), SinkError> {
            if self.reject.contains(&record.full_name) {
                return Err(SinkError::Rejected {
                    status: 409,
                    body: "duplicate key".to_string(),
                });
            }
            self.inserted.push(record.clone());
            Ok(())
        }

        async fn finish(&mut self) -> Result<(), SinkError> {
            self.finished = true;
            Ok(())
        }
    }

    fn book() -> PlayerBook {
        seed_records(&[
            RawLabel::new("Justin JeffersonMIN", "WR1", "9998", None),
            RawLabel::new("Josh AllenBUF", "QB1", "7000", None),
            RawLabel::new("2025 Mid 1st", "PI3", "4100", None),
        ])
    }

    #[tokio::test]
    async fn test_export_continues_past_failures() {
        let sink = MemorySink {
            reject: vec!["Josh Allen".to_string()],
            ..Default::default()
        };
        let mut exporter = Exporter::new(sink);
        let mut book = book();
        let as_of = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();

        let outcomes = exporter.export_as_of(&mut book, as_of).await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_ok());
        assert!(!outcomes[1].is_ok());
        assert_eq!(outcomes[1].player_name, "Josh Allen");
        assert!(outcomes[2].is_ok());

        let sink = exporter.into_sink();
        assert!(sink.finished);
        let names: Vec<_> = sink.inserted.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, ["Justin Jefferson", "2025 Mid 1st"]);
        assert!(sink.inserted.iter().all(|r| r.as_of_date == Some(as_of)));
        assert!(book.records().iter().all(|r| r.as_of_date == Some(as_of)));
    }

    #[tokio::test]
    async fn test_export_stamps_today() {
        let mut exporter = Exporter::new(MemorySink::default());
        let mut book = book();
        let before = Local::now().date_naive();

        exporter.export(&mut book).await;

        let after = Local::now().date_naive();
        for record in book.records() {
            let date = record.as_of_date.unwrap();
            assert!(date == before || date == after);
        }
    }
}
