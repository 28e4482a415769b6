use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const PICK_POSITION: &str = "PI";

/// Which KTC ranking listing a pass reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingKind {
    Dynasty,
    Redraft,
}

impl RankingKind {
    pub fn path(self) -> &'static str {
        match self {
            RankingKind::Dynasty => "dynasty-rankings",
            RankingKind::Redraft => "fantasy-rankings",
        }
    }

    /// Position filter sent with every page request. Only the dynasty view
    /// lists rookie draft picks.
    pub fn filters(self) -> &'static str {
        match self {
            RankingKind::Dynasty => "QB|WR|RB|TE|RDP",
            RankingKind::Redraft => "QB|WR|RB|TE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    OneQb,
    Superflex,
}

impl RosterFormat {
    /// KTC's `format` query value. The two listings disagree on the code
    /// for superflex.
    pub fn code(self, kind: RankingKind) -> u8 {
        match (kind, self) {
            (_, RosterFormat::OneQb) => 1,
            (RankingKind::Dynasty, RosterFormat::Superflex) => 0,
            (RankingKind::Redraft, RosterFormat::Superflex) => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RosterFormat::OneQb => "1QB",
            RosterFormat::Superflex => "Superflex",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLabel {
    pub display_text: String,
    pub rank_text: String,
    pub value_text: String,
    pub age_text: Option<String>,
}

impl RawLabel {
    pub fn new(
        display_text: &str,
        rank_text: &str,
        value_text: &str,
        age_text: Option<&str>,
    ) -> Self {
        Self {
            display_text: display_text.to_string(),
            rank_text: rank_text.to_string(),
            value_text: value_text.to_string(),
            age_text: age_text.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LabelKind {
    Player {
        position_rank: String,
        team: String,
        is_rookie: bool,
        age: f64,
    },
    Pick,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLabel {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub position: String,
    pub value: u32,
    pub kind: LabelKind,
}

impl ParsedLabel {
    pub fn is_pick(&self) -> bool {
        matches!(self.kind, LabelKind::Pick)
    }

    pub fn position_rank(&self) -> Option<&str> {
        match &self.kind {
            LabelKind::Player { position_rank, .. } => Some(position_rank),
            LabelKind::Pick => None,
        }
    }
}

/// One row of the daily value table. Field names on the wire follow the
/// existing table columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "player_name")]
    pub full_name: String,
    pub position_rank: Option<String>,
    pub position: String,
    pub team: Option<String>,
    pub value: u32,
    pub age: Option<f64>,
    #[serde(rename = "rookie")]
    pub is_rookie: Option<bool>,
    pub sf_position_rank: Option<String>,
    pub sf_value: u32,
    #[serde(rename = "rdrft_position_rank")]
    pub redraft_position_rank: Option<String>,
    #[serde(rename = "rdrft_value")]
    pub redraft_value: u32,
    #[serde(rename = "sfrdrft_position_rank")]
    pub sf_redraft_position_rank: Option<String>,
    #[serde(rename = "sfrdrft_value")]
    pub sf_redraft_value: u32,
    #[serde(rename = "date")]
    pub as_of_date: Option<NaiveDate>,
}

impl PlayerRecord {
    pub fn is_pick(&self) -> bool {
        self.position == PICK_POSITION
    }
}

impl From<ParsedLabel> for PlayerRecord {
    fn from(label: ParsedLabel) -> Self {
        let (position_rank, team, age, is_rookie) = match label.kind {
            LabelKind::Player {
                position_rank,
                team,
                is_rookie,
                age,
            } => (Some(position_rank), Some(team), Some(age), Some(is_rookie)),
            LabelKind::Pick => (None, None, None, None),
        };

        Self {
            first_name: label.first_name,
            last_name: label.last_name,
            full_name: label.full_name,
            position_rank,
            position: label.position,
            team,
            value: label.value,
            age,
            is_rookie,
            sf_position_rank: None,
            sf_value: 0,
            redraft_position_rank: None,
            redraft_value: 0,
            sf_redraft_position_rank: None,
            sf_redraft_value: 0,
            as_of_date: None,
        }
    }
}
