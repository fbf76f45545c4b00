//! The per-record search surface and whole-word matching.
//!
//! Every condition rule looks at the same text: a fixed subset of the
//! record's fields, lower-cased and joined by single spaces. It is built
//! once per record per filter call.

use data_loader::{fields, BenefitRecord};
use regex::Regex;
use tracing::warn;

/// Fields that make up the joined text, in order.
pub const JOINED_FIELDS: [&str; 8] = [
    fields::CONTENT,
    fields::TARGET,
    fields::SELECTION_CRITERIA,
    fields::PURPOSE_SUMMARY,
    fields::APPLICATION_METHOD,
    fields::SERVICE_NAME,
    fields::ADMIN_AGENCY,
    fields::RECEIVING_AGENCY,
];

/// Lower-cased concatenation of a record's descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedText(String);

impl JoinedText {
    pub fn from_record(record: &BenefitRecord) -> Self {
        let parts: Vec<String> = JOINED_FIELDS
            .iter()
            .map(|name| record.field(name).to_lowercase())
            .collect();
        Self(parts.join(" "))
    }

    /// Wrap text that is already lower-cased (used by rule unit tests).
    pub fn from_lowercase(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Plain substring test
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.0.contains(n))
    }
}

// A word edge is the start/end of the text or any character that is not an
// ASCII word character. Hangul is not ASCII, so particles such as 자 in
// 구직자 do not block a match, while digits do ("50" never hits "350").
const WORD_EDGE_START: &str = "(?:^|[^0-9A-Za-z_])";
const WORD_EDGE_END: &str = "(?:$|[^0-9A-Za-z_])";

/// Matches any of a set of words, bounded by word edges.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Option<Regex>,
}

impl WordMatcher {
    /// Build a matcher over `words`. Words are lower-cased and escaped.
    /// An empty word list never matches.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(&w))
            .collect();

        if alternatives.is_empty() {
            return Self { regex: None };
        }

        let pattern = format!(
            "{}(?:{}){}",
            WORD_EDGE_START,
            alternatives.join("|"),
            WORD_EDGE_END
        );
        let regex = match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("Word matcher disabled, pattern failed to compile: {}", e);
                None
            }
        };
        Self { regex }
    }

    pub fn is_match(&self, text: &JoinedText) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_text_order_and_case() {
        let record = BenefitRecord::new()
            .with(fields::SERVICE_NAME, "Youth Rent")
            .with(fields::CONTENT, "Monthly SUPPORT")
            .with(fields::ADMIN_AGENCY, "국토교통부");

        let text = JoinedText::from_record(&record);
        // content first, service name sixth, agency seventh, empty slots kept
        let expected = format!("monthly support{}youth rent 국토교통부 ", " ".repeat(5));
        assert_eq!(text.as_str(), expected);
    }

    #[test]
    fn test_joined_text_ignores_other_fields() {
        let record = BenefitRecord::new().with(fields::SERVICE_TYPE, "현금");
        assert!(!JoinedText::from_record(&record).contains("현금"));
    }

    #[test]
    fn test_word_matcher_digit_boundaries() {
        let matcher = WordMatcher::new(["50"]);
        assert!(matcher.is_match(&JoinedText::from_lowercase("중위소득 50% 이하")));
        assert!(!matcher.is_match(&JoinedText::from_lowercase("350 가구")));
        assert!(!matcher.is_match(&JoinedText::from_lowercase("5000원")));
    }

    #[test]
    fn test_word_matcher_hangul_particles_do_not_block() {
        let matcher = WordMatcher::new(["구직"]);
        assert!(matcher.is_match(&JoinedText::from_lowercase("구직자 대상")));
        assert!(matcher.is_match(&JoinedText::from_lowercase("구직")));
    }

    #[test]
    fn test_word_matcher_ascii_words() {
        let matcher = WordMatcher::new(["Job"]);
        assert!(matcher.is_match(&JoinedText::from_lowercase("find a job today")));
        assert!(!matcher.is_match(&JoinedText::from_lowercase("jobseekers")));
    }

    #[test]
    fn test_word_matcher_escapes_metacharacters() {
        let matcher = WordMatcher::new(["a.b"]);
        assert!(matcher.is_match(&JoinedText::from_lowercase("x a.b y")));
        assert!(!matcher.is_match(&JoinedText::from_lowercase("x axb y")));
    }

    #[test]
    fn test_empty_word_list_never_matches() {
        let matcher = WordMatcher::new(Vec::<String>::new());
        assert!(!matcher.is_match(&JoinedText::from_lowercase("anything")));
    }
}
