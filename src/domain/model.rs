use serde::{Deserialize, Deserializer};

/// Top-level shape of `aws route53 list-resource-record-sets` output.
///
/// Every field tolerates being absent or `null`; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListResourceRecordSetsOutput {
    #[serde(
        rename = "ResourceRecordSets",
        default,
        deserialize_with = "null_as_default"
    )]
    pub record_sets: Vec<ResourceRecordSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecordSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Type", default, deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(rename = "TTL", default, deserialize_with = "null_as_default")]
    pub ttl: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_records: Vec<ResourceRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alias_target: AliasTarget,
}

impl ResourceRecordSet {
    /// A record set without literal values resolves through its alias target.
    pub fn is_alias(&self) -> bool {
        self.resource_records.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AliasTarget {
    #[serde(rename = "DNSName", default, deserialize_with = "null_as_default")]
    pub dns_name: String,
    #[serde(
        rename = "EvaluateTargetHealth",
        default,
        deserialize_with = "null_as_default"
    )]
    pub evaluate_target_health: bool,
    #[serde(rename = "HostedZoneId", default, deserialize_with = "null_as_default")]
    pub hosted_zone_id: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The zone being converted. Fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneContext {
    pub zone_id: Option<String>,
    pub domain: String,
}

impl ZoneContext {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            zone_id: None,
            domain: domain.into(),
        }
    }

    pub fn with_zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }
}

/// A record set after normalization, ready to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRecord {
    /// Dashified name plus lowercased type, e.g. `www-example-com-cname`.
    pub reference: String,
    /// Record name with trailing dots removed.
    pub name: String,
    pub record_type: String,
    pub body: RecordBody,
}

impl RenderedRecord {
    pub fn resource_label(&self) -> String {
        format!("record-{}", self.reference)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordBody {
    Alias(AliasTarget),
    Standard { ttl: i64, values: Vec<String> },
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub records: Vec<RenderedRecord>,
    /// Reference labels shared by more than one record, in first-seen order.
    pub duplicate_references: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub record_blocks: usize,
    pub import_statements: usize,
}
