#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::ZoneContext;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_embeddable, validate_non_empty_string, validate_required_field, Validate,
};

/// Decides which header is written and how records point at their zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMode {
    /// Records reference `local.zoneID`; no zone resource, no imports.
    ZoneRelative,
    /// Declares `aws_route53_zone` and references its `zone_id` output.
    StandaloneZoneCreation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ImportStyle {
    /// `terraform import ADDRESS ID`
    #[default]
    Command,
    /// `import { to = ADDRESS, id = "ID" }` blocks
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: ZoneMode,
    pub zone: ZoneContext,
    pub emit_imports: bool,
    pub import_style: ImportStyle,
}

impl RunConfig {
    pub fn zone_relative(domain: impl Into<String>) -> Self {
        Self {
            mode: ZoneMode::ZoneRelative,
            zone: ZoneContext::new(domain),
            emit_imports: true,
            import_style: ImportStyle::default(),
        }
    }

    pub fn standalone(zone_id: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            mode: ZoneMode::StandaloneZoneCreation,
            zone: ZoneContext::new(domain).with_zone_id(zone_id),
            emit_imports: true,
            import_style: ImportStyle::default(),
        }
    }

    pub fn with_imports(mut self, emit_imports: bool) -> Self {
        self.emit_imports = emit_imports;
        self
    }

    pub fn with_import_style(mut self, import_style: ImportStyle) -> Self {
        self.import_style = import_style;
        self
    }

    /// Imports only exist for resources this run declares, so zone-relative runs never emit them.
    pub fn imports_enabled(&self) -> bool {
        self.emit_imports && self.mode == ZoneMode::StandaloneZoneCreation
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("domain", &self.zone.domain)?;
        validate_embeddable("domain", &self.zone.domain)?;

        if self.mode == ZoneMode::StandaloneZoneCreation {
            let zone_id = validate_required_field("zone_id", &self.zone.zone_id)?;
            validate_non_empty_string("zone_id", zone_id)?;
            validate_embeddable("zone_id", zone_id)?;
        }

        Ok(())
    }
}
