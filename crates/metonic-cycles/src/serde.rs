use std::collections::BTreeMap;

use metonic_core::{Cycle, ErrorInfo, MetonicError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::hash::cycle_set_digest;
use crate::rules::Rules;

fn serde_error(code: &str, err: impl ToString) -> MetonicError {
    MetonicError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, MetonicError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json_serialize", err))?;
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonicalize(value))
        .map_err(|err| serde_error("json_write", err))?;
    Ok(bytes)
}

/// Deserializes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, MetonicError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json_deserialize", err))
}

/// Listing of cycles together with the rules that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    /// Rules used for generation; absent for caller supplied listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Rules>,
    /// Number of cycles listed.
    pub count: usize,
    /// The cycles in output order.
    pub cycles: Vec<Cycle>,
    /// Digest of the listing, see [`cycle_set_digest`].
    pub digest: String,
}

impl CycleReport {
    /// Builds a report, computing the count and digest.
    pub fn new(rules: Option<Rules>, cycles: Vec<Cycle>) -> Self {
        Self {
            rules,
            count: cycles.len(),
            digest: cycle_set_digest(&cycles),
            cycles,
        }
    }
}
