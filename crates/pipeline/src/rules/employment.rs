//! Employment rule.
//!
//! Each status maps to a small synonym set. A record passes when any
//! synonym appears as a whole word, or the text says employment status is
//! unrestricted (제한없음 / 무관).

use crate::joined_text::{JoinedText, WordMatcher};
use crate::tables::{EMPLOYMENT_SYNONYMS, EMPLOYMENT_UNRESTRICTED_MARKERS};
use crate::traits::ConditionRule;
use data_loader::ConditionField;
use std::collections::HashMap;
use std::sync::RwLock;

pub struct EmploymentRule {
    matchers: HashMap<&'static str, WordMatcher>,
    /// Matchers for statuses outside the table, built on first use.
    /// An unknown status is its own single synonym.
    unknown: RwLock<HashMap<String, WordMatcher>>,
}

impl EmploymentRule {
    pub fn new() -> Self {
        let matchers = EMPLOYMENT_SYNONYMS
            .iter()
            .map(|&(status, synonyms)| (status, WordMatcher::new(synonyms)))
            .collect();
        Self {
            matchers,
            unknown: RwLock::new(HashMap::new()),
        }
    }

    fn unknown_status_hit(&self, text: &JoinedText, value: &str) -> bool {
        if let Ok(cache) = self.unknown.read() {
            if let Some(matcher) = cache.get(value) {
                return matcher.is_match(text);
            }
        }

        let matcher = WordMatcher::new([value]);
        let hit = matcher.is_match(text);
        if let Ok(mut cache) = self.unknown.write() {
            cache.entry(value.to_string()).or_insert(matcher);
        }
        hit
    }
}

impl Default for EmploymentRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionRule for EmploymentRule {
    fn name(&self) -> &str {
        "EmploymentRule"
    }

    fn field(&self) -> ConditionField {
        ConditionField::Employment
    }

    fn matches(&self, text: &JoinedText, value: &str) -> bool {
        let synonym_hit = match self.matchers.get(value) {
            Some(matcher) => matcher.is_match(text),
            None => self.unknown_status_hit(text, value),
        };
        synonym_hit || text.contains_any(&EMPLOYMENT_UNRESTRICTED_MARKERS)
    }
}
