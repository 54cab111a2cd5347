use crate::config::{ImportStyle, RunConfig};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;
use clap::Parser;

pub const USAGE: &str = "Usage: zone2tf [OPTIONS] DOMAIN\n       zone2tf [OPTIONS] ZONE_ID DOMAIN";

#[derive(Debug, Clone, Parser)]
#[command(name = "zone2tf", version)]
#[command(about = "Convert a Route 53 record listing on stdin into Terraform configuration")]
pub struct CliConfig {
    /// DOMAIN for zone-relative output, or ZONE_ID DOMAIN to also declare and import the zone
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<String>,

    #[arg(long, help = "Do not emit import statements")]
    pub no_imports: bool,

    #[arg(long, value_enum, default_value_t = ImportStyle::Command)]
    pub import_style: ImportStyle,

    #[arg(short, long, help = "Read the record listing from a file instead of stdin")]
    pub input: Option<String>,

    #[arg(short, long, help = "Write configuration to a file instead of stdout")]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines on stderr")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn run_config(&self) -> Result<RunConfig> {
        let config = match self.targets.as_slice() {
            [domain] => RunConfig::zone_relative(domain.as_str()),
            [zone_id, domain] => RunConfig::standalone(zone_id.as_str(), domain.as_str()),
            other => {
                return Err(ConvertError::UsageError {
                    message: format!("expected 1 or 2 positional arguments, got {}", other.len()),
                })
            }
        };

        let config = config
            .with_imports(!self.no_imports)
            .with_import_style(self.import_style);
        config.validate()?;
        Ok(config)
    }
}
