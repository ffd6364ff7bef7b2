use chrono::NaiveDate;

use crate::data::PatentRecord;

pub const CARD_DATE_FMT: &str = "%d %b %Y";
pub const DETAIL_DATE_FMT: &str = "%d %B %Y";

/// formats an ISO date ("2024-03-15") with a chrono format string.
///
/// Dates that don't parse are shown as given.
pub fn format_date(iso: &str, fmt: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(date) => date.format(fmt).to_string(),
        Err(_) => iso.to_owned(),
    }
}

/// first `max` chars of `s`, and whether anything was cut off.
pub fn truncate_chars(s: &str, max: usize) -> (&str, bool) {
    match s.char_indices().nth(max) {
        Some((idx, _)) => (&s[..idx], true),
        None => (s, false),
    }
}

/// Case-insensitive substring match of a query against the searchable
/// fields of a record (title, abstract, claims).
#[derive(Debug)]
pub struct QueryMatcher {
    needle: String,
}

impl QueryMatcher {
    pub fn new(query: &str) -> Self {
        Self { needle: query.to_lowercase() }
    }

    fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    pub fn is_match(&self, patent: &PatentRecord) -> bool {
        self.matches(&patent.title)
            || self.matches(&patent.abstract_text)
            || self.matches(&patent.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::mock_patents;

    #[test]
    fn dates_format_for_card_and_detail() {
        assert_eq!(format_date("2024-03-15", CARD_DATE_FMT), "15 Mar 2024");
        assert_eq!(format_date("2024-01-22", DETAIL_DATE_FMT), "22 January 2024");
        assert_eq!(format_date("sometime", CARD_DATE_FMT), "sometime");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("abc", 3), ("abc", false));
        assert_eq!(truncate_chars("abcd", 3), ("abc", true));
        assert_eq!(truncate_chars("ééé", 2), ("éé", true));
    }

    #[test]
    fn matcher_ignores_case_and_regex_syntax() {
        let p = &mock_patents()[0];
        assert!(QueryMatcher::new("MACHINE learning").is_match(p));
        assert!(QueryMatcher::new("x-rays, mris").is_match(p));
        assert!(!QueryMatcher::new("(.*)").is_match(p));
    }

    #[test]
    fn matcher_lowercases_non_ascii() {
        let mut p = mock_patents()[0].clone();
        p.title = "Über-Sensor für Ölpumpen".into();
        assert!(QueryMatcher::new("über-sensor").is_match(&p));
        assert!(QueryMatcher::new("ÖLPUMPEN").is_match(&p));
    }

    #[test]
    fn matcher_skips_description_and_people() {
        let p = &mock_patents()[0];
        assert!(!QueryMatcher::new("radiologists").is_match(p));
        assert!(!QueryMatcher::new("Sarah Chen").is_match(p));
        assert!(!QueryMatcher::new("MedTech").is_match(p));
    }
}
