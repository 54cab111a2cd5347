pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{open_sink, OutputSink, ReaderSource};
pub use crate::config::{ImportStyle, RunConfig, ZoneMode};
pub use crate::core::{etl::EtlEngine, pipeline::ZonePipeline};
pub use crate::domain::model::{LoadSummary, ZoneContext};
pub use crate::utils::error::{ConvertError, Result};
