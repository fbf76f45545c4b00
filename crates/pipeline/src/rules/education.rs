//! Education rule.
//!
//! A record passes when a synonym for the user's level (or 학력무관)
//! appears as a whole word. Without a synonym hit it still passes, unless
//! the text talks about schooling (학력 / 졸업 / 학위) at all.

use crate::joined_text::{JoinedText, WordMatcher};
use crate::tables::{EDUCATION_SYNONYMS, EDUCATION_TERMS, EDUCATION_UNRESTRICTED};
use crate::traits::ConditionRule;
use data_loader::ConditionField;
use std::collections::HashMap;

pub struct EducationRule {
    matchers: HashMap<&'static str, WordMatcher>,
    education_talk: WordMatcher,
}

impl EducationRule {
    pub fn new() -> Self {
        let matchers = EDUCATION_SYNONYMS
            .iter()
            .map(|&(level, synonyms)| {
                let words = synonyms.iter().copied().chain([EDUCATION_UNRESTRICTED]);
                (level, WordMatcher::new(words))
            })
            .collect();
        Self {
            matchers,
            education_talk: WordMatcher::new(EDUCATION_TERMS),
        }
    }
}

impl Default for EducationRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionRule for EducationRule {
    fn name(&self) -> &str {
        "EducationRule"
    }

    fn field(&self) -> ConditionField {
        ConditionField::Education
    }

    fn matches(&self, text: &JoinedText, value: &str) -> bool {
        // Unknown level: nothing to look for
        let Some(matcher) = self.matchers.get(value) else {
            return true;
        };
        matcher.is_match(text) || !self.education_talk.is_match(text)
    }
}
