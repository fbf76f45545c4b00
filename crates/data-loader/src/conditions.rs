//! User-supplied condition sets.
//!
//! Every condition is a plain string. The empty string means
//! "unconstrained"; anything else is expected to come from the closed
//! enumeration for that field (age is free-form).

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Closed enumerations
// =============================================================================

/// The 17 first-level administrative regions, by short name.
pub const REGIONS: [&str; 17] = [
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "세종", "경기", "강원", "충북",
    "충남", "전북", "전남", "경북", "경남", "제주",
];

pub const EMPLOYMENT_STATUSES: [&str; 5] = ["미취업", "취업", "재직", "구직", "창업"];

pub const INCOME_BRACKETS: [&str; 7] = [
    "기초생활수급자",
    "차상위",
    "중위소득50",
    "중위소득80",
    "중위소득100",
    "중위소득150",
    "제한없음",
];

pub const EDUCATION_LEVELS: [&str; 5] = ["중졸이하", "고졸", "대학재학", "대졸", "대학원"];

pub const CHILDREN_HAS: &str = "있음";
pub const CHILDREN_NONE: &str = "없음";

pub const DISABILITY_APPLICABLE: &str = "해당";
pub const DISABILITY_NOT_APPLICABLE: &str = "비해당";

// =============================================================================
// ConditionField
// =============================================================================

/// One of the seven condition slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionField {
    Age,
    Region,
    Employment,
    Income,
    Education,
    HasChildren,
    Disability,
}

impl ConditionField {
    pub const ALL: [ConditionField; 7] = [
        ConditionField::Age,
        ConditionField::Region,
        ConditionField::Employment,
        ConditionField::Income,
        ConditionField::Education,
        ConditionField::HasChildren,
        ConditionField::Disability,
    ];

    /// JSON key of this field in a serialized ConditionSet
    pub fn key(self) -> &'static str {
        match self {
            ConditionField::Age => "age",
            ConditionField::Region => "region",
            ConditionField::Employment => "employment",
            ConditionField::Income => "income",
            ConditionField::Education => "education",
            ConditionField::HasChildren => "hasChildren",
            ConditionField::Disability => "disability",
        }
    }

    /// Allowed values, or `None` for the free-form age field.
    pub fn allowed_values(self) -> Option<&'static [&'static str]> {
        match self {
            ConditionField::Age => None,
            ConditionField::Region => Some(&REGIONS),
            ConditionField::Employment => Some(&EMPLOYMENT_STATUSES),
            ConditionField::Income => Some(&INCOME_BRACKETS),
            ConditionField::Education => Some(&EDUCATION_LEVELS),
            ConditionField::HasChildren => Some(&[CHILDREN_HAS, CHILDREN_NONE]),
            ConditionField::Disability => {
                Some(&[DISABILITY_APPLICABLE, DISABILITY_NOT_APPLICABLE])
            }
        }
    }
}

impl fmt::Display for ConditionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// ConditionSet
// =============================================================================

/// The user's personal conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionSet {
    pub age: String,
    pub region: String,
    pub employment: String,
    pub income: String,
    pub education: String,
    pub has_children: String,
    pub disability: String,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: ConditionField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: ConditionField) -> &str {
        match field {
            ConditionField::Age => &self.age,
            ConditionField::Region => &self.region,
            ConditionField::Employment => &self.employment,
            ConditionField::Income => &self.income,
            ConditionField::Education => &self.education,
            ConditionField::HasChildren => &self.has_children,
            ConditionField::Disability => &self.disability,
        }
    }

    pub fn set(&mut self, field: ConditionField, value: impl Into<String>) {
        let slot = match field {
            ConditionField::Age => &mut self.age,
            ConditionField::Region => &mut self.region,
            ConditionField::Employment => &mut self.employment,
            ConditionField::Income => &mut self.income,
            ConditionField::Education => &mut self.education,
            ConditionField::HasChildren => &mut self.has_children,
            ConditionField::Disability => &mut self.disability,
        };
        *slot = value.into();
    }

    /// True when every condition is the empty string.
    pub fn is_unconstrained(&self) -> bool {
        ConditionField::ALL.iter().all(|&f| self.get(f).is_empty())
    }

    /// Fields that carry a non-empty value, in declaration order.
    pub fn active_fields(&self) -> Vec<ConditionField> {
        ConditionField::ALL
            .into_iter()
            .filter(|&f| !self.get(f).is_empty())
            .collect()
    }

    /// Check every non-empty value against its enumeration.
    ///
    /// Age must parse as a non-negative integer. The filter engine accepts
    /// anything, so this is only for front ends that want to reject typos.
    pub fn validate(&self) -> Result<()> {
        for field in self.active_fields() {
            let value = self.get(field);
            let ok = match field.allowed_values() {
                Some(allowed) => allowed.contains(&value),
                None => value.trim().parse::<u32>().is_ok(),
            };
            if !ok {
                return Err(DataLoadError::InvalidValue {
                    field: field.key().to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}
