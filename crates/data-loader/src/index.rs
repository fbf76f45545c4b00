//! ServiceIndex building.
//!
//! Loads a saved catalog page and indexes it by service id so that the
//! detail view can look a record up without another upstream request.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl ServiceIndex {
    /// Load a saved `serviceList` page (or bare record array) from disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let page = parser::parse_service_file(path)?;

        if let Some(total) = page.total_count {
            info!(
                "Loaded page {} ({} of {} services upstream)",
                page.page.unwrap_or(1),
                page.data.len(),
                total
            );
        } else {
            info!("Loaded {} services from {}", page.data.len(), path.display());
        }

        Ok(Self::from_records(page.data))
    }

    /// Build an index from records already in memory.
    pub fn from_records(records: Vec<BenefitRecord>) -> Self {
        let mut index = ServiceIndex::new();
        index.records.reserve(records.len());
        for record in records {
            index.insert_service(record);
        }
        index
    }

    /// Ids of every record that has one, in load order
    pub fn service_ids(&self) -> Vec<ServiceId> {
        self.records.iter().filter_map(BenefitRecord::service_id).collect()
    }
}
