//! Disability rule.
//!
//! - 해당: the text must mention disability (장애 / 장애인)
//! - 비해당: a mention of disabled persons (장애인) rejects, unless the
//!   text also mentions an exclusion (제외)

use crate::joined_text::{JoinedText, WordMatcher};
use crate::tables::{DISABILITY_TERMS, DISABLED_PERSON_TERM, EXCLUSION_MARKER};
use crate::traits::ConditionRule;
use data_loader::{ConditionField, DISABILITY_APPLICABLE, DISABILITY_NOT_APPLICABLE};

pub struct DisabilityRule {
    disability_terms: WordMatcher,
    disabled_person: WordMatcher,
}

impl DisabilityRule {
    pub fn new() -> Self {
        Self {
            disability_terms: WordMatcher::new(DISABILITY_TERMS),
            disabled_person: WordMatcher::new([DISABLED_PERSON_TERM]),
        }
    }
}

impl Default for DisabilityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionRule for DisabilityRule {
    fn name(&self) -> &str {
        "DisabilityRule"
    }

    fn field(&self) -> ConditionField {
        ConditionField::Disability
    }

    fn matches(&self, text: &JoinedText, value: &str) -> bool {
        match value {
            DISABILITY_APPLICABLE => self.disability_terms.is_match(text),
            DISABILITY_NOT_APPLICABLE => {
                !(self.disabled_person.is_match(text) && !text.contains(EXCLUSION_MARKER))
            }
            _ => true,
        }
    }
}
