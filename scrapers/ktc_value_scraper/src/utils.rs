use scraper::{ElementRef, Selector};

/// Text of the first element under `parent` matching `selector`, with each
/// text node trimmed and the pieces joined without separators.
pub fn stripped_text(parent: &ElementRef, selector: &Selector) -> Option<String> {
    parent
        .select(selector)
        .next()
        .map(|el| el.text().map(str::trim).collect::<String>())
}

/// Splits on the first single space: `"Amon-Ra St. Brown"` becomes
/// `("Amon-Ra", "St. Brown")`.
pub fn split_name(full_name: &str) -> (String, String) {
    match full_name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (full_name.to_string(), String::new()),
    }
}

/// Last `n` characters of `s`, or `None` when `s` is shorter.
pub fn tail(s: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some("");
    }
    s.char_indices().rev().nth(n - 1).map(|(idx, _)| &s[idx..])
}

/// Character `n` places from the end, counting the last one as 1.
pub fn char_from_end(s: &str, n: usize) -> Option<char> {
    n.checked_sub(1).and_then(|skip| s.chars().rev().nth(skip))
}

/// Upper-case in the loose sense: at least one cased character and no
/// lower-case ones, so `" PI"` counts and `"1st"` does not.
pub fn is_upper(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

pub fn first_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_split_name() {
        assert_eq!(
            split_name("Justin Jefferson"),
            ("Justin".to_string(), "Jefferson".to_string())
        );
        assert_eq!(
            split_name("Amon-Ra St. Brown"),
            ("Amon-Ra".to_string(), "St. Brown".to_string())
        );
        assert_eq!(split_name("Pele"), ("Pele".to_string(), String::new()));
    }

    #[test]
    fn test_split_name_reconstructs_full_name() {
        for name in ["Marvin Harrison Jr.", "Kenneth Walker III", "2025 Mid 1st"] {
            let (first, last) = split_name(name);
            assert_eq!(format!("{} {}", first, last), name);
        }
    }

    #[test]
    fn test_tail_and_char_from_end() {
        assert_eq!(tail("Jefferson", 3), Some("son"));
        assert_eq!(tail("Al", 3), None);
        assert_eq!(tail("Müller", 4), Some("ller"));
        assert_eq!(char_from_end("RATL", 4), Some('R'));
        assert_eq!(char_from_end("ATL", 4), None);
        assert_eq!(char_from_end("ATL", 0), None);
    }

    #[test]
    fn test_is_upper() {
        assert!(is_upper("MIN"));
        assert!(is_upper(" PI"));
        assert!(!is_upper("1st"));
        assert!(!is_upper(".01"));
        assert!(!is_upper("sON"));
    }

    #[test]
    fn test_first_chars() {
        assert_eq!(first_chars("WR12", 2), "WR");
        assert_eq!(first_chars("22.1 yo", 4), "22.1");
        assert_eq!(first_chars("Q", 2), "Q");
    }

    #[test]
    fn test_stripped_text_joins_trimmed_nodes() {
        let html = Html::parse_fragment(
            r#"<div class="player-name"> <a>Justin Jefferson</a>
               <span class="player-team">MIN</span> </div>"#,
        );
        let selector = Selector::parse(".player-name").unwrap();
        let root = html.root_element();
        assert_eq!(
            stripped_text(&root, &selector).as_deref(),
            Some("Justin JeffersonMIN")
        );
    }
}
