use crate::domain::model::{RecordBody, RenderedRecord, ResourceRecordSet, TransformResult};
use std::collections::HashSet;

/// Removes trailing dots, so `example.com.` becomes `example.com`.
pub fn strip_trailing_dots(domain: &str) -> &str {
    domain.trim_end_matches('.')
}

/// Turns a domain into something usable as a Terraform block label.
pub fn dashify(with_dots: &str) -> String {
    with_dots.replace('.', "-")
}

/// Quotes are dropped rather than escaped.
pub fn clean_value(value: &str) -> String {
    value.replace('"', "")
}

pub fn reference_label(clean_name: &str, record_type: &str) -> String {
    format!("{}-{}", dashify(clean_name), record_type.to_lowercase())
}

pub fn render_record(record: &ResourceRecordSet) -> RenderedRecord {
    let name = strip_trailing_dots(&record.name).to_string();
    let reference = reference_label(&name, &record.record_type);

    let body = if record.is_alias() {
        RecordBody::Alias(record.alias_target.clone())
    } else {
        RecordBody::Standard {
            ttl: record.ttl,
            values: record
                .resource_records
                .iter()
                .map(|r| clean_value(&r.value))
                .collect(),
        }
    };

    RenderedRecord {
        reference,
        name,
        record_type: record.record_type.clone(),
        body,
    }
}

/// Renders every record in input order. Colliding labels are reported, not resolved.
pub fn render_records(records: &[ResourceRecordSet]) -> TransformResult {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicate_references = Vec::new();

    let records: Vec<RenderedRecord> = records.iter().map(render_record).collect();
    for record in &records {
        let reference = record.reference.as_str();
        if !seen.insert(reference) && reported.insert(reference) {
            duplicate_references.push(reference.to_string());
        }
    }

    TransformResult {
        records,
        duplicate_references,
    }
}
