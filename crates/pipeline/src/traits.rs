//! Core traits for the filtering pipeline.
//!
//! Two seams:
//! - [`Filter`]: a whole pipeline stage, records in and records out
//! - [`ConditionRule`]: one predicate over the joined text of a single
//!   record, for one condition field

use crate::joined_text::JoinedText;
use anyhow::Result;
use data_loader::{BenefitRecord, ConditionField, ConditionSet};

/// Core trait for filtering benefit records.
///
/// All stages must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<BenefitRecord> and return a filtered Vec
/// - Surviving records keep their relative order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to filter (takes ownership)
    /// * `conditions` - The user's condition set
    fn apply(
        &self,
        records: Vec<BenefitRecord>,
        conditions: &ConditionSet,
    ) -> Result<Vec<BenefitRecord>>;
}

/// A heuristic predicate for one condition field.
///
/// Rules are only consulted when the field's value is non-empty. They must
/// be total: unknown values and missing evidence resolve to a fixed answer.
pub trait ConditionRule: Send + Sync {
    fn name(&self) -> &str;

    /// The condition slot this rule reads
    fn field(&self) -> ConditionField;

    /// Whether `text` is plausibly compatible with `value`.
    fn matches(&self, text: &JoinedText, value: &str) -> bool;
}
