//! Free-text search over a record's name, content, summary and agency.

use super::retain_containing;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{fields, BenefitRecord, ConditionSet};

const KEYWORD_FIELDS: [&str; 4] = [
    fields::SERVICE_NAME,
    fields::CONTENT,
    fields::PURPOSE_SUMMARY,
    fields::ADMIN_AGENCY,
];

/// Keeps records mentioning a search keyword (case-insensitive).
pub struct KeywordFilter {
    keyword: String,
}

impl KeywordFilter {
    pub fn new(keyword: impl AsRef<str>) -> Self {
        Self {
            keyword: keyword.as_ref().trim().to_lowercase(),
        }
    }
}

impl Filter for KeywordFilter {
    fn name(&self) -> &str {
        "KeywordFilter"
    }

    fn apply(
        &self,
        records: Vec<BenefitRecord>,
        _conditions: &ConditionSet,
    ) -> Result<Vec<BenefitRecord>> {
        Ok(retain_containing(records, &KEYWORD_FIELDS, &self.keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_filter() {
        let records = vec![
            BenefitRecord::new().with(fields::SERVICE_NAME, "청년 월세 지원"),
            BenefitRecord::new().with(fields::ADMIN_AGENCY, "국토교통부"),
            BenefitRecord::new().with(fields::TARGET, "월세 거주 청년"),
        ];

        let filter = KeywordFilter::new(" 월세 ");
        let filtered = filter.apply(records, &ConditionSet::new()).unwrap();

        // 지원대상 is not searched
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].service_name(), "청년 월세 지원");
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let records = vec![BenefitRecord::new().with(fields::CONTENT, "K-Startup 지원")];
        let filtered = KeywordFilter::new("k-startup")
            .apply(records, &ConditionSet::new())
            .unwrap();
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_empty_keyword_passes_through() {
        let records = vec![BenefitRecord::new(), BenefitRecord::new()];
        let filtered = KeywordFilter::new("").apply(records, &ConditionSet::new()).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
