use crate::domain::model::{ListResourceRecordSetsOutput, ResourceRecordSet};
use crate::utils::error::Result;
use serde_json::{Map, Value};

/// Field names of the listing schema, in their canonical spelling.
const KNOWN_KEYS: &[&str] = &[
    "ResourceRecordSets",
    "Name",
    "Type",
    "TTL",
    "ResourceRecords",
    "Value",
    "AliasTarget",
    "DNSName",
    "EvaluateTargetHealth",
    "HostedZoneId",
];

/// Decodes a record listing. Keys match case-insensitively and a `null`
/// document is an empty listing.
pub fn decode_record_sets(input: &[u8]) -> Result<Vec<ResourceRecordSet>> {
    let document: Value = serde_json::from_slice(input)?;
    if document.is_null() {
        return Ok(Vec::new());
    }

    let output: ListResourceRecordSetsOutput =
        serde_json::from_value(canonicalize_keys(document))?;
    Ok(output.record_sets)
}

fn canonical_key(key: String) -> String {
    match KNOWN_KEYS.iter().find(|known| known.eq_ignore_ascii_case(&key)) {
        Some(known) => known.to_string(),
        None => key,
    }
}

fn canonicalize_keys(value: Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut canonical = Map::with_capacity(object.len());
            // Exact spellings win over case-folded ones.
            let (exact, folded): (Vec<_>, Vec<_>) = object
                .into_iter()
                .partition(|(key, _)| KNOWN_KEYS.contains(&key.as_str()));
            for (key, value) in folded.into_iter().chain(exact) {
                canonical.insert(canonical_key(key), canonicalize_keys(value));
            }
            Value::Object(canonical)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize_keys).collect()),
        other => other,
    }
}
