//! Parser for saved catalog responses.
//!
//! Two document shapes are accepted:
//! - a `serviceList` page: `{"page":1,"perPage":100,"totalCount":..,"data":[...]}`
//! - a bare array of records: `[{...}, {...}]`
//!
//! Entries of `data` that are not JSON objects are skipped with a warning
//! rather than failing the whole page.

use crate::conditions::ConditionSet;
use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Read a whole file, mapping a missing file to `FileNotFound`.
fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

/// Turn a JSON array into records, dropping non-objects.
fn records_from_array(items: Vec<Value>) -> Vec<BenefitRecord> {
    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => records.push(BenefitRecord::from_map(map)),
            other => warn!("Skipping entry {} of type {}: not an object", idx, kind(&other)),
        }
    }
    records
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn counter<T: TryFrom<u64>>(page: &serde_json::Map<String, Value>, key: &str) -> Option<T> {
    page.get(key)?.as_u64().and_then(|n| T::try_from(n).ok())
}

/// Parse a page document (or a bare array) from a string.
pub fn parse_service_page(input: &str) -> Result<ServicePage> {
    let document: Value = serde_json::from_str(input)?;

    match document {
        Value::Array(items) => Ok(ServicePage {
            data: records_from_array(items),
            ..ServicePage::default()
        }),
        Value::Object(mut page) => {
            let data = match page.remove("data") {
                Some(Value::Array(items)) => records_from_array(items),
                // An upstream page with zero hits omits `data` or sends null
                None | Some(Value::Null) => Vec::new(),
                Some(other) => {
                    return Err(DataLoadError::UnexpectedShape(format!(
                        "`data` is a {}, expected an array",
                        kind(&other)
                    )));
                }
            };
            Ok(ServicePage {
                page: counter(&page, "page"),
                per_page: counter(&page, "perPage"),
                total_count: counter(&page, "totalCount"),
                current_count: counter(&page, "currentCount"),
                match_count: counter(&page, "matchCount"),
                data,
            })
        }
        other => Err(DataLoadError::UnexpectedShape(format!(
            "top-level {}, expected a page object or an array",
            kind(&other)
        ))),
    }
}

/// Parse a saved page from disk.
pub fn parse_service_file(path: &Path) -> Result<ServicePage> {
    let contents = read_file(path)?;
    parse_service_page(&contents)
}

/// Parse a ConditionSet JSON document (`{"age":"25","region":"서울",...}`).
pub fn parse_conditions(input: &str) -> Result<ConditionSet> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a ConditionSet file from disk.
pub fn parse_conditions_file(path: &Path) -> Result<ConditionSet> {
    let contents = read_file(path)?;
    parse_conditions(&contents)
}
