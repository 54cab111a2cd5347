use crate::config::RunConfig;
use crate::core::decoder::decode_record_sets;
use crate::core::emitter::TextEmitter;
use crate::core::transform::render_records;
use crate::core::{LoadSummary, Pipeline, RecordSource, ResourceRecordSet, TransformResult};
use crate::utils::error::{ConvertError, Result};
use std::io::Write;

/// Reads a record listing from `source` and writes Terraform text to `sink`.
pub struct ZonePipeline<S: RecordSource, W: Write> {
    pub(crate) source: S,
    pub(crate) sink: Option<W>,
    pub(crate) config: RunConfig,
}

impl<S: RecordSource, W: Write> ZonePipeline<S, W> {
    pub fn new(source: S, sink: W, config: RunConfig) -> Self {
        Self {
            source,
            sink: Some(sink),
            config,
        }
    }

    /// Returns the sink, unless a failed `load` dropped it.
    pub fn into_sink(self) -> Option<W> {
        self.sink
    }
}

impl<S: RecordSource, W: Write> Pipeline for ZonePipeline<S, W> {
    fn extract(&mut self) -> Result<Vec<ResourceRecordSet>> {
        let input = self.source.read_all()?;
        tracing::debug!("Read {} bytes of input", input.len());

        let records = decode_record_sets(&input)?;
        if records.is_empty() {
            tracing::warn!("Input contains no record sets; only the zone header will be written");
        }
        tracing::debug!("Decoded {} record sets", records.len());
        Ok(records)
    }

    fn transform(&self, records: Vec<ResourceRecordSet>) -> Result<TransformResult> {
        let result = render_records(&records);

        for reference in &result.duplicate_references {
            tracing::warn!(
                "Multiple records share the resource name record-{}; Terraform will reject the duplicate",
                reference
            );
        }

        Ok(result)
    }

    fn load(&mut self, result: TransformResult) -> Result<LoadSummary> {
        let sink = self.sink.take().ok_or_else(|| {
            ConvertError::output(std::io::Error::new(
                std::io::ErrorKind::Other,
                "output already written",
            ))
        })?;

        let mut emitter = TextEmitter::new(sink, &self.config);
        emitter.write_header()?;
        for record in &result.records {
            emitter.write_record(record)?;
        }

        let imports = emitter.plan_imports(&result.records);
        emitter.write_imports(&imports)?;
        self.sink = Some(emitter.finish()?);

        Ok(LoadSummary {
            record_blocks: result.records.len(),
            import_statements: imports.len(),
        })
    }
}
