//! Core domain types for government benefit listings.
//!
//! Records come from the public-service catalog API as loosely typed JSON
//! objects keyed by Korean field names. Nothing about their shape is
//! guaranteed, so a record keeps the raw object and exposes lookups that
//! degrade to the empty string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// =============================================================================
// Field names
// =============================================================================

/// Field names used by the upstream `serviceList` / `serviceDetail` API.
pub mod fields {
    pub const SERVICE_ID: &str = "서비스ID";
    pub const SERVICE_NAME: &str = "서비스명";
    pub const CONTENT: &str = "서비스내용";
    pub const TARGET: &str = "지원대상";
    pub const SELECTION_CRITERIA: &str = "선정기준";
    pub const PURPOSE_SUMMARY: &str = "서비스목적요약";
    pub const APPLICATION_METHOD: &str = "신청방법";
    pub const ADMIN_AGENCY: &str = "소관기관명";
    pub const RECEIVING_AGENCY: &str = "접수기관명";
    pub const SERVICE_TYPE: &str = "서비스유형";
    pub const POLICY_FIELD: &str = "정책분야";
    pub const BUSINESS_TYPE: &str = "사업유형";
}

/// Identifier of a service in the upstream catalog
pub type ServiceId = String;

// =============================================================================
// BenefitRecord
// =============================================================================

/// One government support-program entry.
///
/// Wraps the JSON object as received. Absent fields and non-string values
/// read as `""` through [`BenefitRecord::field`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenefitRecord {
    fields: Map<String, Value>,
}

impl BenefitRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// String value of a field, or `""` when absent or not a string.
    pub fn field(&self, name: &str) -> &str {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// The record's service id. The API sends strings, but older dumps
    /// carry plain numbers.
    pub fn service_id(&self) -> Option<ServiceId> {
        match self.fields.get(fields::SERVICE_ID)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn service_name(&self) -> &str {
        self.field(fields::SERVICE_NAME)
    }

    /// All fields in key order, for detail display.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// ServicePage
// =============================================================================

/// One page of the upstream listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePage {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub current_count: Option<u64>,
    #[serde(default)]
    pub match_count: Option<u64>,
    #[serde(default)]
    pub data: Vec<BenefitRecord>,
}

// =============================================================================
// ServiceIndex
// =============================================================================

/// Loaded records in upstream order, plus an id lookup.
#[derive(Debug, Default)]
pub struct ServiceIndex {
    pub(crate) records: Vec<BenefitRecord>,
    pub(crate) by_id: HashMap<ServiceId, usize>,
}

impl ServiceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in the order they were inserted
    pub fn records(&self) -> &[BenefitRecord] {
        &self.records
    }

    /// Per-id detail lookup
    pub fn get_service(&self, id: &str) -> Option<&BenefitRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// Append a record. A repeated id points the lookup at the newest copy;
    /// both copies stay in `records()`.
    pub fn insert_service(&mut self, record: BenefitRecord) {
        if let Some(id) = record.service_id() {
            self.by_id.insert(id, self.records.len());
        }
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
