//! Static rule configuration.
//!
//! Keyed by the canonical condition values from `data_loader::conditions`.
//! The rules in `crate::rules` compile these into matchers once, at
//! registry construction.

/// Text marking a program as available in every region
pub const NATIONWIDE_MARKER: &str = "전국";

/// Text marking a group as excluded ("...는 제외")
pub const EXCLUSION_MARKER: &str = "제외";

// =============================================================================
// Age
// =============================================================================

/// Age expressions, each occurrence classified by exactly one named group:
/// `lo`/`hi` range, `upper` with `upper_op`, `lower` with `lower_op`, `exact`.
///
/// Either bound of a range may carry its own `만`. A `대` right after `세`
/// ("1세대", "세대주") means household, not age; `range_tail` and
/// `exact_tail` capture it so the match can be discarded.
pub const AGE_PATTERN: &str = concat!(
    r"(?:만\s*)?(?:",
    r"(?P<lo>[0-9]{1,3})\s*세?\s*[~\-–～]\s*(?:만\s*)?(?P<hi>[0-9]{1,3})\s*세(?P<range_tail>대)?",
    r"|(?P<upper>[0-9]{1,3})\s*세\s*(?P<upper_op>이하|미만)",
    r"|(?P<lower>[0-9]{1,3})\s*세\s*(?P<lower_op>이상|초과)",
    r"|(?P<exact>[0-9]{1,3})\s*세(?P<exact_tail>대)?",
    r")"
);

// =============================================================================
// Employment
// =============================================================================

pub const EMPLOYMENT_SYNONYMS: [(&str, &[&str]); 5] = [
    ("미취업", &["미취업", "실업", "구직"]),
    ("취업", &["취업", "재직", "근로"]),
    ("재직", &["재직", "근로자"]),
    ("구직", &["구직", "미취업", "실업"]),
    ("창업", &["창업", "사업자"]),
];

pub const EMPLOYMENT_UNRESTRICTED_MARKERS: [&str; 2] = ["제한없음", "무관"];

// =============================================================================
// Income
// =============================================================================

/// How an income bracket is recognised in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeBracket {
    /// A fixed regular expression
    Pattern(&'static str),
    /// "중위소득 ... P" or "P%", with P not part of a longer number
    MedianIncome(u32),
    /// The "no income limit" choice; every record is compatible
    Unrestricted,
}

pub const INCOME_PATTERNS: [(&str, IncomeBracket); 7] = [
    ("기초생활수급자", IncomeBracket::Pattern("기초생활수급|수급자|기초수급")),
    ("차상위", IncomeBracket::Pattern("차상위")),
    ("중위소득50", IncomeBracket::MedianIncome(50)),
    ("중위소득80", IncomeBracket::MedianIncome(80)),
    ("중위소득100", IncomeBracket::MedianIncome(100)),
    ("중위소득150", IncomeBracket::MedianIncome(150)),
    ("제한없음", IncomeBracket::Unrestricted),
];

pub const INCOME_UNRESTRICTED_MARKERS: [&str; 2] = ["소득무관", "제한없음"];

/// Regex for a median-income percentage bracket.
pub fn median_income_pattern(percent: u32) -> String {
    format!(
        r"중위소득(?:.*[^0-9])?{p}(?:[^0-9]|$)|(?:^|[^0-9]){p}\s*%",
        p = percent
    )
}

// =============================================================================
// Education
// =============================================================================

pub const EDUCATION_UNRESTRICTED: &str = "학력무관";

pub const EDUCATION_SYNONYMS: [(&str, &[&str]); 5] = [
    ("중졸이하", &["중졸"]),
    ("고졸", &["고졸", "고등학교"]),
    ("대학재학", &["대학", "재학"]),
    ("대졸", &["대졸", "대학교", "학사"]),
    ("대학원", &["대학원", "석사", "박사"]),
];

/// Words that show the text talks about schooling at all
pub const EDUCATION_TERMS: [&str; 3] = ["학력", "졸업", "학위"];

// =============================================================================
// Children and disability
// =============================================================================

pub const CHILD_TERMS: [&str; 4] = ["자녀", "아동", "육아", "양육"];

pub const DISABILITY_TERMS: [&str; 2] = ["장애", "장애인"];

pub const DISABLED_PERSON_TERM: &str = "장애인";
