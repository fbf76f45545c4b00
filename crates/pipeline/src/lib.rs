//! Condition-matching pipeline for public-benefit records.
//!
//! This crate provides:
//! - ConditionFilter, a heuristic free-text matcher that narrows benefit
//!   records to those plausibly compatible with a user's conditions
//! - ConditionRule trait and one rule per condition field, held in a RuleRegistry
//! - Filter trait and substring stages (keyword, category, policy type)
//! - FilterPipeline for composing stages and reporting "N of M matched"
//!
//! ## Architecture
//! Every rule sees the same search surface, the record's [`JoinedText`]
//! (descriptive fields lower-cased and joined). A record survives the
//! condition filter when every rule whose condition is non-empty matches.
//! Absence of evidence is generally treated as "unconstrained"; see each
//! rule module for its fallback.
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::{ConditionField, ConditionSet};
//! use pipeline::{ConditionFilter, FilterPipeline};
//! use pipeline::filters::*;
//!
//! let conditions = ConditionSet::new()
//!     .with(ConditionField::Age, "25")
//!     .with(ConditionField::Region, "서울");
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(ConditionFilter::new())
//!     .add_filter(KeywordFilter::new("월세"));
//!
//! let (matched, summary) = pipeline.apply_with_summary(records, &conditions)?;
//! ```

pub mod traits;
pub mod joined_text;
pub mod tables;
pub mod rules;
pub mod condition_filter;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::{ConditionRule, Filter};
pub use joined_text::{JoinedText, WordMatcher};
pub use rules::RuleRegistry;
pub use condition_filter::{
    filter_services_by_conditions, filtered_count, ConditionFilter, RuleOutcome,
};
pub use filter_pipeline::{FilterPipeline, MatchSummary};
