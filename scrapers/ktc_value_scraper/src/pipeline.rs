use anyhow::Result;
use tracing::info;

use crate::book::PlayerBook;
use crate::builder::PrimaryBuilder;
use crate::collector::{PageSource, PassCollector};
use crate::overlay::OverlayMerger;
use crate::types::RankingKind;

/// Scrapes every listing and merges them into one book. Nothing is written
/// anywhere; hand the book to an `Exporter` for that.
pub async fn scrape_values<S: PageSource>(
    collector: &PassCollector<S>,
    include_redraft: bool,
) -> Result<PlayerBook> {
    let mut book = PrimaryBuilder::new(collector)
        .build_base(RankingKind::Dynasty)
        .await?;

    if include_redraft {
        OverlayMerger::new(collector).apply_redraft(&mut book).await?;
    } else {
        info!("Skipping redraft values");
    }

    info!("Scraped {} records", book.len());
    Ok(book)
}
