//! Policy type filter (지원사업, 상담, 정책자금, ...), matched against the
//! service type and business type columns.

use super::retain_containing;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{fields, BenefitRecord, ConditionSet};

const POLICY_TYPE_FIELDS: [&str; 2] = [fields::SERVICE_TYPE, fields::BUSINESS_TYPE];

/// Policy types offered by the front end
pub const POLICY_TYPES: [&str; 5] = ["지원사업", "일자리", "상담", "정책자금", "시설"];

pub struct PolicyTypeFilter {
    policy_type: String,
}

impl PolicyTypeFilter {
    pub fn new(policy_type: impl AsRef<str>) -> Self {
        Self {
            policy_type: policy_type.as_ref().trim().to_lowercase(),
        }
    }
}

impl Filter for PolicyTypeFilter {
    fn name(&self) -> &str {
        "PolicyTypeFilter"
    }

    fn apply(
        &self,
        records: Vec<BenefitRecord>,
        _conditions: &ConditionSet,
    ) -> Result<Vec<BenefitRecord>> {
        Ok(retain_containing(records, &POLICY_TYPE_FIELDS, &self.policy_type))
    }
}
