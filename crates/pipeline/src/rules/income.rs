//! Income rule.
//!
//! Brackets map to a pattern. A bracket with a pattern passes when the
//! pattern matches or the text says income is unrestricted (소득무관 /
//! 제한없음). The "no income limit" choice and unknown brackets always pass.

use crate::joined_text::JoinedText;
use crate::tables::{
    median_income_pattern, IncomeBracket, INCOME_PATTERNS, INCOME_UNRESTRICTED_MARKERS,
};
use crate::traits::ConditionRule;
use data_loader::ConditionField;
use regex::Regex;
use std::collections::HashMap;

pub struct IncomeRule {
    /// `None` for brackets that never constrain
    patterns: HashMap<&'static str, Option<Regex>>,
}

impl IncomeRule {
    pub fn new() -> Self {
        let patterns = INCOME_PATTERNS
            .iter()
            .map(|&(bracket, rule)| (bracket, compile(rule)))
            .collect();
        Self { patterns }
    }
}

fn compile(bracket: IncomeBracket) -> Option<Regex> {
    let pattern = match bracket {
        IncomeBracket::Pattern(p) => p.to_string(),
        IncomeBracket::MedianIncome(percent) => median_income_pattern(percent),
        IncomeBracket::Unrestricted => return None,
    };
    Some(Regex::new(&pattern).expect("income table patterns are valid regexes"))
}

impl Default for IncomeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionRule for IncomeRule {
    fn name(&self) -> &str {
        "IncomeRule"
    }

    fn field(&self) -> ConditionField {
        ConditionField::Income
    }

    fn matches(&self, text: &JoinedText, value: &str) -> bool {
        match self.patterns.get(value) {
            Some(Some(pattern)) => {
                pattern.is_match(text.as_str())
                    || text.contains_any(&INCOME_UNRESTRICTED_MARKERS)
            }
            Some(None) | None => true,
        }
    }
}
