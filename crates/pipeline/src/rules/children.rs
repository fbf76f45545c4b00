//! Has-children rule.
//!
//! - 있음: the text must mention children (자녀 / 아동 / 육아 / 양육)
//! - 없음: a child mention rejects, unless the text also mentions an
//!   exclusion (제외)
//!
//! Any other value does not constrain.

use crate::joined_text::{JoinedText, WordMatcher};
use crate::tables::{CHILD_TERMS, EXCLUSION_MARKER};
use crate::traits::ConditionRule;
use data_loader::{ConditionField, CHILDREN_HAS, CHILDREN_NONE};

pub struct ChildrenRule {
    child_terms: WordMatcher,
}

impl ChildrenRule {
    pub fn new() -> Self {
        Self {
            child_terms: WordMatcher::new(CHILD_TERMS),
        }
    }
}

impl Default for ChildrenRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionRule for ChildrenRule {
    fn name(&self) -> &str {
        "ChildrenRule"
    }

    fn field(&self) -> ConditionField {
        ConditionField::HasChildren
    }

    fn matches(&self, text: &JoinedText, value: &str) -> bool {
        match value {
            CHILDREN_HAS => self.child_terms.is_match(text),
            CHILDREN_NONE => {
                !(self.child_terms.is_match(text) && !text.contains(EXCLUSION_MARKER))
            }
            _ => true,
        }
    }
}
