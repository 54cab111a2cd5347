use crate::config::{ImportStyle, RunConfig, ZoneMode};
use crate::core::transform::{dashify, strip_trailing_dots};
use crate::domain::model::{RecordBody, RenderedRecord};
use crate::utils::error::{ConvertError, Result};
use std::io::Write;

const ZONE_LOCAL: &str = "zoneID";
const ZONE_RESOURCE: &str = "aws_route53_zone";
const RECORD_RESOURCE: &str = "aws_route53_record";

/// Pairs a configuration address with the real-world ID Terraform adopts it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub address: String,
    pub id: String,
}

/// Writes Terraform text for one run.
///
/// Blocks are separated by exactly one blank line and fields keep a fixed
/// order, so output is stable for downstream tooling that diffs it.
pub struct TextEmitter<'a, W: Write> {
    out: W,
    config: &'a RunConfig,
}

impl<'a, W: Write> TextEmitter<'a, W> {
    pub fn new(out: W, config: &'a RunConfig) -> Self {
        Self { out, config }
    }

    fn zone_label(&self) -> String {
        dashify(strip_trailing_dots(&self.config.zone.domain))
    }

    /// How record blocks point at their hosted zone.
    pub fn zone_reference(&self) -> String {
        match self.config.mode {
            ZoneMode::ZoneRelative => format!("local.{}", ZONE_LOCAL),
            ZoneMode::StandaloneZoneCreation => {
                format!("{}.{}.zone_id", ZONE_RESOURCE, self.zone_label())
            }
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        let written = match self.config.mode {
            ZoneMode::ZoneRelative => {
                let domain = &self.config.zone.domain;
                write!(self.out, "locals {{\n  {} = \"{}\"\n}}\n\n", ZONE_LOCAL, domain)
            }
            ZoneMode::StandaloneZoneCreation => {
                let label = self.zone_label();
                let name = strip_trailing_dots(&self.config.zone.domain);
                write!(
                    self.out,
                    "resource \"{}\" \"{}\" {{\n  name = \"{}\"\n}}\n\n",
                    ZONE_RESOURCE, label, name
                )
            }
        };
        written.map_err(ConvertError::output)
    }

    pub fn write_record(&mut self, record: &RenderedRecord) -> Result<()> {
        let zone_reference = self.zone_reference();
        self.write_record_block(record, &zone_reference)
            .map_err(ConvertError::output)
    }

    fn write_record_block(
        &mut self,
        record: &RenderedRecord,
        zone_reference: &str,
    ) -> std::io::Result<()> {
        let out = &mut self.out;
        writeln!(
            out,
            "resource \"{}\" \"{}\" {{",
            RECORD_RESOURCE,
            record.resource_label()
        )?;
        writeln!(out, "  name    = \"{}\"", record.name)?;
        writeln!(out, "  type    = \"{}\"", record.record_type)?;
        if let RecordBody::Standard { ttl, .. } = &record.body {
            writeln!(out, "  ttl     = {}", ttl)?;
        }
        writeln!(out, "  zone_id = {}", zone_reference)?;

        match &record.body {
            RecordBody::Alias(target) => {
                writeln!(out, "  alias {{")?;
                writeln!(out, "    name                   = \"{}\"", target.dns_name)?;
                writeln!(
                    out,
                    "    evaluate_target_health = {}",
                    target.evaluate_target_health
                )?;
                writeln!(out, "    zone_id                = \"{}\"", target.hosted_zone_id)?;
                write!(out, "  }}")?;
            }
            RecordBody::Standard { values, .. } => {
                write!(out, "  records = [")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(out, ", ")?;
                    }
                    write!(out, "\n    \"{}\"", value)?;
                }
                write!(out, "\n  ]")?;
            }
        }

        write!(out, "\n}}\n\n")
    }

    /// The zone first, then each record in declaration order. Empty unless the run imports.
    pub fn plan_imports(&self, records: &[RenderedRecord]) -> Vec<ImportStatement> {
        let zone_id = match (&self.config.zone.zone_id, self.config.imports_enabled()) {
            (Some(zone_id), true) => zone_id,
            _ => return Vec::new(),
        };

        let mut statements = Vec::with_capacity(records.len() + 1);
        statements.push(ImportStatement {
            address: format!("{}.{}", ZONE_RESOURCE, self.zone_label()),
            id: zone_id.clone(),
        });
        statements.extend(records.iter().map(|record| ImportStatement {
            address: format!("{}.{}", RECORD_RESOURCE, record.resource_label()),
            id: format!("{}_{}_{}", zone_id, record.name, record.record_type),
        }));
        statements
    }

    pub fn write_imports(&mut self, statements: &[ImportStatement]) -> Result<()> {
        for statement in statements {
            let written = match self.config.import_style {
                ImportStyle::Command => writeln!(
                    self.out,
                    "terraform import {} {}",
                    statement.address, statement.id
                ),
                ImportStyle::Block => write!(
                    self.out,
                    "import {{\n  to = {}\n  id = \"{}\"\n}}\n\n",
                    statement.address, statement.id
                ),
            };
            written.map_err(ConvertError::output)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush().map_err(ConvertError::output)?;
        Ok(self.out)
    }
}
