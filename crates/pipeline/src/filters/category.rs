//! Category filter (일자리, 주거, 교육, 복지, 문화, ...).
//!
//! Matched against the purpose summary and the service type / policy field
//! columns, since the catalog has no dedicated category column.

use super::retain_containing;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{fields, BenefitRecord, ConditionSet};

const CATEGORY_FIELDS: [&str; 3] = [
    fields::PURPOSE_SUMMARY,
    fields::SERVICE_TYPE,
    fields::POLICY_FIELD,
];

/// Category names offered by the front end
pub const CATEGORIES: [&str; 5] = ["일자리", "주거", "교육", "복지", "문화"];

pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl AsRef<str>) -> Self {
        Self {
            category: category.as_ref().trim().to_lowercase(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn apply(
        &self,
        records: Vec<BenefitRecord>,
        _conditions: &ConditionSet,
    ) -> Result<Vec<BenefitRecord>> {
        Ok(retain_containing(records, &CATEGORY_FIELDS, &self.category))
    }
}
