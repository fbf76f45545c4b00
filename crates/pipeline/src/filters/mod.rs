//! Substring filter stages.
//!
//! These are the simple search-box and drop-down filters that run next to
//! the condition engine. Each one lower-cases a handful of fields, joins
//! them, and keeps records containing the term. An empty term passes
//! everything through.

pub mod category;
pub mod keyword;
pub mod policy_type;

// Re-export for convenience
pub use category::{CategoryFilter, CATEGORIES};
pub use keyword::KeywordFilter;
pub use policy_type::{PolicyTypeFilter, POLICY_TYPES};

use data_loader::BenefitRecord;

/// Keep records whose joined `fields` contain `term` (already lower-cased).
pub(crate) fn retain_containing(
    records: Vec<BenefitRecord>,
    fields: &[&str],
    term: &str,
) -> Vec<BenefitRecord> {
    if term.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| {
            let text = fields
                .iter()
                .map(|name| record.field(name))
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            text.contains(term)
        })
        .collect()
}
