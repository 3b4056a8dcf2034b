//! Reading assessment records from JSON documents.
//!
//! A version document holds either one version object or an array of them.
//! Individual fields are decoded leniently and array elements that are not
//! version objects are skipped; only a document that is not JSON at all, or
//! not an object/array, is an error.

use crate::core::{
    lenient, Error, FrameEvaluationRecord, IterationBounds, RawVersionRecord, Result,
    VersionRecord,
};
use serde_json::Value;
use std::path::Path;

fn read_json(path: &Path) -> Result<Value> {
    let contents = super::read_file(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Decode versions from an already-parsed JSON document.
pub fn versions_from_json(value: Value, bounds: &IterationBounds) -> Result<Vec<VersionRecord>> {
    let raws: Vec<RawVersionRecord> = match value {
        Value::Array(items) => lenient::entries(items),
        object @ Value::Object(_) => vec![serde_json::from_value(object)?],
        other => {
            return Err(Error::Validation(format!(
                "expected a version object or array, found {}",
                other
            )))
        }
    };

    Ok(raws
        .into_iter()
        .map(|raw| VersionRecord::from_raw(raw, bounds))
        .collect())
}

/// Read every version record in a file, clamping iteration totals to `bounds`.
pub fn read_versions(path: &Path, bounds: &IterationBounds) -> Result<Vec<VersionRecord>> {
    let value = read_json(path)?;
    versions_from_json(value, bounds).map_err(|e| match e {
        Error::Validation(message) => Error::document(path, message),
        other => other,
    })
}

/// Read a single frame record.
pub fn read_frame(path: &Path) -> Result<FrameEvaluationRecord> {
    let value = read_json(path)?;
    if !value.is_object() {
        return Err(Error::document(path, "expected a frame object"));
    }
    Ok(serde_json::from_value(value)?)
}
