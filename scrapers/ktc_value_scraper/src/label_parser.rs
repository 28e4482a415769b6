//! Turns the text scraped from one KTC listing entry into a player identity.
//!
//! KTC renders the team code (or free-agent marker) directly after the
//! player's name, e.g. `Justin JeffersonMIN`, and prefixes rookies' team
//! codes with `R` (`Bijan RobinsonRATL`). The name has to be recovered by
//! guessing how many trailing characters belong to that suffix.

use tracing::warn;

use crate::error::LabelError;
use crate::types::{LabelKind, ParsedLabel, RawLabel, PICK_POSITION};
use crate::utils::{char_from_end, first_chars, is_upper, split_name, tail};

pub const ROOKIE_MARKER: char = 'R';
pub const RESTRICTED_FREE_AGENT: &str = "RFA";
pub const FREE_AGENT: &str = "FA";

pub struct SuffixRule {
    pub name: &'static str,
    pub extract: fn(&str) -> Option<&str>,
}

/// Tried in order; the first rule that matches decides the suffix.
pub static SUFFIX_RULES: [SuffixRule; 4] = [
    SuffixRule {
        name: "restricted_free_agent",
        extract: restricted_free_agent,
    },
    SuffixRule {
        name: "rookie_team",
        extract: rookie_team,
    },
    SuffixRule {
        name: "free_agent",
        extract: free_agent,
    },
    SuffixRule {
        name: "team_code",
        extract: team_code,
    },
];

fn restricted_free_agent(text: &str) -> Option<&str> {
    tail(text, 3).filter(|suffix| *suffix == RESTRICTED_FREE_AGENT)
}

fn rookie_team(text: &str) -> Option<&str> {
    match char_from_end(text, 4) {
        Some(ROOKIE_MARKER) => tail(text, 4),
        _ => None,
    }
}

fn free_agent(text: &str) -> Option<&str> {
    tail(text, 2).filter(|suffix| *suffix == FREE_AGENT)
}

fn team_code(text: &str) -> Option<&str> {
    tail(text, 3).filter(|suffix| is_upper(suffix))
}

/// Trailing team/status suffix of a display text, empty when no rule applies.
pub fn extract_suffix(display_text: &str) -> &str {
    SUFFIX_RULES
        .iter()
        .find_map(|rule| (rule.extract)(display_text))
        .unwrap_or("")
}

/// Team code and rookie flag carried by a suffix.
pub fn team_and_rookie(suffix: &str) -> (String, bool) {
    if suffix == RESTRICTED_FREE_AGENT {
        return (suffix.to_string(), false);
    }
    match suffix.strip_prefix(ROOKIE_MARKER) {
        Some(team) => (team.to_string(), true),
        None => (suffix.to_string(), false),
    }
}

pub fn parse(raw: &RawLabel) -> Result<ParsedLabel, LabelError> {
    let display_text = raw.display_text.trim();
    let suffix = extract_suffix(display_text);
    let full_name = display_text
        .strip_suffix(suffix)
        .unwrap_or(display_text)
        .trim()
        .to_string();
    let (first_name, last_name) = split_name(&full_name);

    let position = first_chars(raw.rank_text.trim(), 2).to_string();

    let value_text = raw.value_text.trim();
    let value = value_text
        .parse::<u32>()
        .map_err(|_| LabelError::InvalidValue {
            name: full_name.clone(),
            value: value_text.to_string(),
        })?;

    let kind = if position == PICK_POSITION {
        LabelKind::Pick
    } else {
        let (team, is_rookie) = team_and_rookie(suffix);
        LabelKind::Player {
            position_rank: raw.rank_text.trim().to_string(),
            team,
            is_rookie,
            age: parse_age(raw.age_text.as_deref(), &full_name),
        }
    };

    Ok(ParsedLabel {
        first_name,
        last_name,
        full_name,
        position,
        value,
        kind,
    })
}

/// Age text looks like `22.1 yo`; only the first four characters are numeric.
/// Anything unreadable counts as no age.
fn parse_age(age_text: Option<&str>, full_name: &str) -> f64 {
    let age_text = match age_text.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return 0.0,
    };

    match first_chars(age_text, 4).trim().parse::<f64>() {
        Ok(age) => age,
        Err(_) => {
            warn!("Unreadable age {:?} for {}, using 0", age_text, full_name);
            0.0
        }
    }
}
