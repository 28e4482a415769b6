use anyhow::Result;
use tracing::{info, warn};

use crate::book::PlayerBook;
use crate::collector::{PageSource, PassCollector};
use crate::label_parser;
use crate::merge::{merge_labels, MergeStats};
use crate::types::{LabelKind, ParsedLabel, PlayerRecord, RankingKind, RawLabel, RosterFormat};

/// Builds the base record set from the 1QB listing and fills in the
/// superflex columns from the superflex listing.
pub struct PrimaryBuilder<'a, S> {
    collector: &'a PassCollector<S>,
}

impl<'a, S: PageSource> PrimaryBuilder<'a, S> {
    pub fn new(collector: &'a PassCollector<S>) -> Self {
        Self { collector }
    }

    pub async fn build_base(&self, kind: RankingKind) -> Result<PlayerBook> {
        let one_qb = self.collector.collect(kind, RosterFormat::OneQb).await?;
        let superflex = self.collector.collect(kind, RosterFormat::Superflex).await?;

        let mut book = seed_records(&one_qb);
        info!("Created {} records from {:?} 1QB rankings", book.len(), kind);

        let stats = apply_superflex(&mut book, &superflex);
        info!(
            "Superflex pass: {} matched, {} without a record, {} rejected",
            stats.matched, stats.missed, stats.rejected
        );

        Ok(book)
    }
}

/// One new record per parseable label, picks included.
pub fn seed_records(labels: &[RawLabel]) -> PlayerBook {
    let mut book = PlayerBook::new();
    for raw in labels {
        match label_parser::parse(raw) {
            Ok(parsed) => book.push(PlayerRecord::from(parsed)),
            Err(e) => warn!("Skipping label {:?}: {}", raw.display_text, e),
        }
    }
    book
}

pub fn apply_superflex(book: &mut PlayerBook, labels: &[RawLabel]) -> MergeStats {
    merge_labels(book, labels, set_superflex)
}

fn set_superflex(record: &mut PlayerRecord, parsed: &ParsedLabel) {
    if let LabelKind::Player { position_rank, .. } = &parsed.kind {
        record.sf_position_rank = Some(position_rank.clone());
    }
    record.sf_value = parsed.value;
}
