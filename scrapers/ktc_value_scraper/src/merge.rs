use tracing::{debug, warn};

use crate::book::PlayerBook;
use crate::label_parser;
use crate::types::{ParsedLabel, PlayerRecord, RawLabel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub matched: usize,
    pub missed: usize,
    pub rejected: usize,
}

/// Parses each label and hands it to `apply` together with the record of the
/// same name. Labels without a matching record are dropped; labels that fail
/// to parse are skipped. Never adds or removes records.
pub fn merge_labels<F>(
    book: &mut PlayerBook,
    labels: &[RawLabel],
    mut apply: F,
) -> MergeStats
where
    F: FnMut(&mut PlayerRecord, &ParsedLabel),
{
    let index = book.index();
    let mut stats = MergeStats::default();

    for raw in labels {
        let parsed = match label_parser::parse(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Skipping label {:?}: {}", raw.display_text, e);
                stats.rejected += 1;
                continue;
            }
        };

        match book.get_mut(&index, &parsed.full_name) {
            Some(record) => {
                apply(record, &parsed);
                stats.matched += 1;
            }
            None => {
                debug!("No existing record for {}", parsed.full_name);
                stats.missed += 1;
            }
        }
    }

    stats
}
