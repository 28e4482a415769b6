use anyhow::Result;
use tracing::info;

use crate::book::PlayerBook;
use crate::collector::{PageSource, PassCollector};
use crate::merge::{merge_labels, MergeStats};
use crate::types::{LabelKind, ParsedLabel, PlayerRecord, RankingKind, RawLabel, RosterFormat};

/// Adds single-season (redraft) values to records built from the dynasty
/// listings.
pub struct OverlayMerger<'a, S> {
    collector: &'a PassCollector<S>,
}

impl<'a, S: PageSource> OverlayMerger<'a, S> {
    pub fn new(collector: &'a PassCollector<S>) -> Self {
        Self { collector }
    }

    pub async fn apply_redraft(&self, book: &mut PlayerBook) -> Result<()> {
        let one_qb = self
            .collector
            .collect(RankingKind::Redraft, RosterFormat::OneQb)
            .await?;
        let superflex = self
            .collector
            .collect(RankingKind::Redraft, RosterFormat::Superflex)
            .await?;

        let stats = apply_redraft_one_qb(book, &one_qb);
        info!(
            "Redraft 1QB pass: {} matched, {} without a record, {} rejected",
            stats.matched, stats.missed, stats.rejected
        );

        let stats = apply_redraft_superflex(book, &superflex);
        info!(
            "Redraft superflex pass: {} matched, {} without a record, {} rejected",
            stats.matched, stats.missed, stats.rejected
        );

        Ok(())
    }
}

pub fn apply_redraft_one_qb(book: &mut PlayerBook, labels: &[RawLabel]) -> MergeStats {
    merge_labels(book, labels, |record, parsed| {
        if let Some(rank) = redraft_rank(record, parsed) {
            record.redraft_position_rank = Some(rank);
            record.redraft_value = parsed.value;
        }
    })
}

pub fn apply_redraft_superflex(book: &mut PlayerBook, labels: &[RawLabel]) -> MergeStats {
    merge_labels(book, labels, |record, parsed| {
        if let Some(rank) = redraft_rank(record, parsed) {
            record.sf_redraft_position_rank = Some(rank);
            record.sf_redraft_value = parsed.value;
        }
    })
}

/// Draft picks have no redraft value; neither a pick label nor a pick record
/// takes part in these passes.
fn redraft_rank(record: &PlayerRecord, parsed: &ParsedLabel) -> Option<String> {
    if record.is_pick() {
        return None;
    }
    match &parsed.kind {
        LabelKind::Player { position_rank, .. } => Some(position_rank.clone()),
        LabelKind::Pick => None,
    }
}
