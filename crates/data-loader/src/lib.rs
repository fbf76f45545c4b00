//! # Data Loader Crate
//!
//! Types and loading for public-benefit catalog data.
//!
//! ## Main Components
//!
//! - **types**: `BenefitRecord`, `ServicePage`, `ServiceIndex`, field names
//! - **conditions**: `ConditionSet`, `ConditionField` and the closed value lists
//! - **parser**: Parse saved API pages and condition files
//! - **index**: Build the id lookup over loaded records
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{ConditionField, ConditionSet, ServiceIndex};
//! use std::path::Path;
//!
//! let index = ServiceIndex::load_from_file(Path::new("data/services.json"))?;
//! let conditions = ConditionSet::new().with(ConditionField::Region, "서울");
//! conditions.validate()?;
//!
//! println!("{} services loaded", index.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod conditions;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{fields, BenefitRecord, ServiceId, ServiceIndex, ServicePage};
pub use conditions::{
    ConditionField,
    ConditionSet,
    // Closed value lists
    CHILDREN_HAS,
    CHILDREN_NONE,
    DISABILITY_APPLICABLE,
    DISABILITY_NOT_APPLICABLE,
    EDUCATION_LEVELS,
    EMPLOYMENT_STATUSES,
    INCOME_BRACKETS,
    REGIONS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_index_creation() {
        let index = ServiceIndex::new();
        assert!(index.is_empty());
        assert!(index.records().is_empty());
    }

    #[test]
    fn test_every_enumerated_field_has_values() {
        for field in ConditionField::ALL {
            match field {
                ConditionField::Age => assert!(field.allowed_values().is_none()),
                _ => assert!(!field.allowed_values().unwrap().is_empty()),
            }
        }
        assert_eq!(REGIONS.len(), 17);
    }
}
