//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! the condition engine and the substring stages together using the
//! builder pattern, and the match summary shown to the user.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{BenefitRecord, ConditionSet};
use std::fmt;

/// How many records survived out of how many went in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub total: usize,
    pub matched: usize,
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} matched", self.matched, self.total)
    }
}

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ConditionFilter::new())
///     .add_filter(KeywordFilter::new("월세"))
///     .add_filter(CategoryFilter::new("주거"));
///
/// let (matched, summary) = pipeline.apply_with_summary(records, &conditions)?;
/// println!("{}", summary);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the stages, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply(
        &self,
        records: Vec<BenefitRecord>,
        conditions: &ConditionSet,
    ) -> Result<Vec<BenefitRecord>> {
        let mut current = records;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, conditions)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }

    /// Apply the pipeline and report how many records matched.
    pub fn apply_with_summary(
        &self,
        records: Vec<BenefitRecord>,
        conditions: &ConditionSet,
    ) -> Result<(Vec<BenefitRecord>, MatchSummary)> {
        let total = records.len();
        let matched = self.apply(records, conditions)?;
        let summary = MatchSummary {
            total,
            matched: matched.len(),
        };
        tracing::info!("{}", summary);
        Ok((matched, summary))
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition_filter::ConditionFilter;
    use crate::filters::KeywordFilter;
    use data_loader::{fields, ConditionField};

    fn records() -> Vec<BenefitRecord> {
        vec![
            BenefitRecord::new()
                .with(fields::SERVICE_NAME, "서울 청년 월세")
                .with(fields::CONTENT, "서울 거주 청년"),
            BenefitRecord::new()
                .with(fields::SERVICE_NAME, "부산 청년 월세")
                .with(fields::CONTENT, "부산 거주 청년"),
            BenefitRecord::new()
                .with(fields::SERVICE_NAME, "전국 아동수당")
                .with(fields::CONTENT, "전국 아동"),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let filtered = pipeline.apply(records(), &ConditionSet::new()).unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(ConditionFilter::new());
        let conditions = ConditionSet::new().with(ConditionField::Region, "서울");

        let filtered = pipeline.apply(records(), &conditions).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].service_name(), "서울 청년 월세");
        assert_eq!(filtered[1].service_name(), "전국 아동수당");
    }

    #[test]
    fn test_stages_are_anded_with_summary() {
        let pipeline = FilterPipeline::new()
            .add_filter(ConditionFilter::new())
            .add_filter(KeywordFilter::new("월세"));
        let conditions = ConditionSet::new().with(ConditionField::Region, "서울");

        let (filtered, summary) = pipeline.apply_with_summary(records(), &conditions).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(summary, MatchSummary { total: 3, matched: 1 });
        assert_eq!(summary.to_string(), "1 of 3 matched");
        assert_eq!(pipeline.filter_names(), vec!["ConditionFilter", "KeywordFilter"]);
    }
}
