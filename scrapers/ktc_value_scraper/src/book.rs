use std::collections::HashMap;

use crate::types::PlayerRecord;

/// All records of one run, in the order the primary pass created them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerBook {
    records: Vec<PlayerRecord>,
}

impl PlayerBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PlayerRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [PlayerRecord] {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<PlayerRecord> {
        self.records
    }

    /// Name lookup for one merge pass. Duplicate names resolve to the
    /// earliest record.
    pub fn index(&self) -> NameIndex {
        let mut positions = HashMap::with_capacity(self.records.len());
        for (idx, record) in self.records.iter().enumerate() {
            positions.entry(record.full_name.clone()).or_insert(idx);
        }
        NameIndex { positions }
    }

    pub fn get_mut(&mut self, index: &NameIndex, full_name: &str) -> Option<&mut PlayerRecord> {
        index
            .positions
            .get(full_name)
            .and_then(|&idx| self.records.get_mut(idx))
    }

    pub fn find(&self, full_name: &str) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.full_name == full_name)
    }
}

pub struct NameIndex {
    positions: HashMap<String, usize>,
}

impl FromIterator<PlayerRecord> for PlayerBook {
    fn from_iter<I: IntoIterator<Item = PlayerRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label_parser::parse;
    use crate::types::RawLabel;

    fn record(display: &str, value: &str) -> PlayerRecord {
        parse(&RawLabel::new(display, "WR1", value, None)).unwrap().into()
    }

    #[test]
    fn test_index_prefers_first_record() {
        let mut book: PlayerBook = vec![
            record("Mike WilliamsNYJ", "3000"),
            record("Mike WilliamsPIT", "200"),
        ]
        .into_iter()
        .collect();

        let index = book.index();
        let found = book.get_mut(&index, "Mike Williams").unwrap();
        assert_eq!(found.value, 3000);
        assert_eq!(found.team.as_deref(), Some("NYJ"));
        assert!(book.get_mut(&index, "Nobody").is_none());
    }
}
