//! Age rule.
//!
//! Scans the text for age expressions ("만 19세 ~ 34세", "39세 이하",
//! "65세 이상", "만 18세"). If any are found, the user's age must satisfy at
//! least one of them. Text without any age expression is unconstrained.

use crate::joined_text::JoinedText;
use crate::tables::AGE_PATTERN;
use crate::traits::ConditionRule;
use data_loader::ConditionField;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static AGE_EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AGE_PATTERN).expect("age pattern is a valid regex"));

/// One age constraint found in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeExpression {
    /// Inclusive on both ends
    Range { min: u32, max: u32 },
    AtMost(u32),
    Below(u32),
    AtLeast(u32),
    Above(u32),
    Exact(u32),
}

impl AgeExpression {
    pub fn admits(&self, age: u32) -> bool {
        match *self {
            AgeExpression::Range { min, max } => age >= min && age <= max,
            AgeExpression::AtMost(n) => age <= n,
            AgeExpression::Below(n) => age < n,
            AgeExpression::AtLeast(n) => age >= n,
            AgeExpression::Above(n) => age > n,
            AgeExpression::Exact(n) => age == n,
        }
    }

    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        // "1세대", "2~3세대": household counts
        if caps.name("range_tail").is_some() || caps.name("exact_tail").is_some() {
            return None;
        }

        let number = |name: &str| caps.name(name)?.as_str().parse::<u32>().ok();

        if let (Some(lo), Some(hi)) = (number("lo"), number("hi")) {
            return Some(AgeExpression::Range {
                min: lo.min(hi),
                max: lo.max(hi),
            });
        }
        if let Some(n) = number("upper") {
            return match caps.name("upper_op")?.as_str() {
                "미만" => Some(AgeExpression::Below(n)),
                _ => Some(AgeExpression::AtMost(n)),
            };
        }
        if let Some(n) = number("lower") {
            return match caps.name("lower_op")?.as_str() {
                "초과" => Some(AgeExpression::Above(n)),
                _ => Some(AgeExpression::AtLeast(n)),
            };
        }
        number("exact").map(AgeExpression::Exact)
    }
}

/// Every age expression in `text`, in order of appearance.
pub fn age_expressions(text: &str) -> Vec<AgeExpression> {
    AGE_EXPRESSION
        .captures_iter(text)
        .filter_map(|caps| AgeExpression::from_captures(&caps))
        .collect()
}

/// Parse a user age. Anything that is not a plain non-negative integer
/// yields `None`, which satisfies no expression.
pub fn parse_age(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[derive(Debug, Default)]
pub struct AgeRule;

impl AgeRule {
    pub fn new() -> Self {
        Self
    }
}

impl ConditionRule for AgeRule {
    fn name(&self) -> &str {
        "AgeRule"
    }

    fn field(&self) -> ConditionField {
        ConditionField::Age
    }

    fn matches(&self, text: &JoinedText, value: &str) -> bool {
        let expressions = age_expressions(text.as_str());
        if expressions.is_empty() {
            return true;
        }
        match parse_age(value) {
            Some(age) => expressions.iter().any(|e| e.admits(age)),
            None => false,
        }
    }
}
