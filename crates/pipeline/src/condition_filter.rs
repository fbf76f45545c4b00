//! The condition filter.
//!
//! Keeps the records whose joined text is compatible with every non-empty
//! condition. Pure and total: it never fails and never mutates its input.
//!
//! ## Algorithm
//! 1. No records: return empty
//! 2. Every condition empty: return all records unchanged
//! 3. Otherwise, per record: build the joined text once, then require every
//!    registered rule whose condition is non-empty to match (logical AND)
//! 4. Survivors keep their input order
//!
//! Large inputs are scanned with Rayon. Records are independent, and an
//! indexed parallel collect preserves order.

use crate::joined_text::JoinedText;
use crate::rules::RuleRegistry;
use crate::traits::{ConditionRule, Filter};
use anyhow::Result;
use data_loader::{BenefitRecord, ConditionField, ConditionSet};
use rayon::prelude::*;
use std::sync::LazyLock;

/// Inputs at least this long are filtered in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// The result of one rule against one record, for explanations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: String,
    pub field: ConditionField,
    pub value: String,
    pub passed: bool,
}

pub struct ConditionFilter {
    registry: RuleRegistry,
    parallel_threshold: usize,
}

impl ConditionFilter {
    /// A filter with the standard seven rules.
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::standard())
    }

    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the input size at which filtering switches to Rayon.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Rules that apply under `conditions`, paired with their value.
    fn active_rules<'a>(
        &'a self,
        conditions: &'a ConditionSet,
    ) -> impl Iterator<Item = (&'a dyn ConditionRule, &'a str)> {
        self.registry.rules().iter().filter_map(move |rule| {
            let rule: &dyn ConditionRule = rule.as_ref();
            let value = conditions.get(rule.field());
            (!value.is_empty()).then_some((rule, value))
        })
    }

    /// Whether a single record satisfies every non-empty condition.
    pub fn is_match(&self, record: &BenefitRecord, conditions: &ConditionSet) -> bool {
        if conditions.is_unconstrained() {
            return true;
        }
        let text = JoinedText::from_record(record);
        self.active_rules(conditions)
            .all(|(rule, value)| rule.matches(&text, value))
    }

    /// Per-rule outcomes for one record. Rules whose condition is empty are
    /// left out.
    pub fn explain(
        &self,
        record: &BenefitRecord,
        conditions: &ConditionSet,
    ) -> Vec<RuleOutcome> {
        let text = JoinedText::from_record(record);
        self.active_rules(conditions)
            .map(|(rule, value)| RuleOutcome {
                rule: rule.name().to_string(),
                field: rule.field(),
                value: value.to_string(),
                passed: rule.matches(&text, value),
            })
            .collect()
    }

    /// Return the records compatible with `conditions`, in input order.
    pub fn filter(
        &self,
        records: &[BenefitRecord],
        conditions: &ConditionSet,
    ) -> Vec<BenefitRecord> {
        if records.is_empty() {
            return Vec::new();
        }
        if conditions.is_unconstrained() {
            return records.to_vec();
        }

        if records.len() >= self.parallel_threshold {
            records
                .par_iter()
                .filter(|record| self.is_match(record, conditions))
                .cloned()
                .collect()
        } else {
            records
                .iter()
                .filter(|record| self.is_match(record, conditions))
                .cloned()
                .collect()
        }
    }

    /// Like [`filter`](Self::filter), but consumes the input and avoids
    /// cloning survivors.
    pub fn retain(
        &self,
        records: Vec<BenefitRecord>,
        conditions: &ConditionSet,
    ) -> Vec<BenefitRecord> {
        if records.is_empty() || conditions.is_unconstrained() {
            return records;
        }

        if records.len() >= self.parallel_threshold {
            records
                .into_par_iter()
                .filter(|record| self.is_match(record, conditions))
                .collect()
        } else {
            records
                .into_iter()
                .filter(|record| self.is_match(record, conditions))
                .collect()
        }
    }

    /// Number of records that would survive `filter`.
    pub fn count(&self, records: &[BenefitRecord], conditions: &ConditionSet) -> usize {
        if conditions.is_unconstrained() {
            return records.len();
        }
        if records.len() >= self.parallel_threshold {
            records
                .par_iter()
                .filter(|record| self.is_match(record, conditions))
                .count()
        } else {
            records
                .iter()
                .filter(|record| self.is_match(record, conditions))
                .count()
        }
    }
}

impl Default for ConditionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for ConditionFilter {
    fn name(&self) -> &str {
        "ConditionFilter"
    }

    fn apply(
        &self,
        records: Vec<BenefitRecord>,
        conditions: &ConditionSet,
    ) -> Result<Vec<BenefitRecord>> {
        Ok(self.retain(records, conditions))
    }
}

static STANDARD_FILTER: LazyLock<ConditionFilter> = LazyLock::new(ConditionFilter::new);

/// Filter with the standard rules.
pub fn filter_services_by_conditions(
    records: &[BenefitRecord],
    conditions: &ConditionSet,
) -> Vec<BenefitRecord> {
    STANDARD_FILTER.filter(records, conditions)
}

/// Number of records the standard rules would keep.
pub fn filtered_count(records: &[BenefitRecord], conditions: &ConditionSet) -> usize {
    STANDARD_FILTER.count(records, conditions)
}
