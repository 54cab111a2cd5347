use crate::core::{LoadSummary, Pipeline};
use crate::domain::model::RecordBody;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. Nothing is written if extraction fails.
    pub fn run(&mut self) -> Result<LoadSummary> {
        tracing::info!("Starting conversion");

        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} record sets", records.len());

        let result = self.pipeline.transform(records)?;
        let aliases = result
            .records
            .iter()
            .filter(|r| matches!(r.body, RecordBody::Alias(_)))
            .count();
        tracing::info!(
            "Transformed {} records ({} alias)",
            result.records.len(),
            aliases
        );

        let summary = self.pipeline.load(result)?;
        tracing::info!(
            "Wrote {} record blocks and {} import statements",
            summary.record_blocks,
            summary.import_statements
        );

        Ok(summary)
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ResourceRecordSet, TransformResult};
    use crate::utils::error::ConvertError;

    #[derive(Default)]
    struct MockPipeline {
        fail_extract: bool,
        loaded: bool,
    }

    impl Pipeline for MockPipeline {
        fn extract(&mut self) -> Result<Vec<ResourceRecordSet>> {
            if self.fail_extract {
                return Err(ConvertError::input(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "stream closed",
                )));
            }
            Ok(vec![ResourceRecordSet::default()])
        }

        fn transform(&self, records: Vec<ResourceRecordSet>) -> Result<TransformResult> {
            Ok(crate::core::transform::render_records(&records))
        }

        fn load(&mut self, result: TransformResult) -> Result<LoadSummary> {
            self.loaded = true;
            Ok(LoadSummary {
                record_blocks: result.records.len(),
                import_statements: 0,
            })
        }
    }

    #[test]
    fn test_run_passes_records_through_every_phase() {
        let mut engine = EtlEngine::new(MockPipeline::default());
        let summary = engine.run().unwrap();
        assert_eq!(summary.record_blocks, 1);
        assert!(engine.into_pipeline().loaded);
    }

    #[test]
    fn test_extract_failure_skips_load() {
        let mut engine = EtlEngine::new(MockPipeline {
            fail_extract: true,
            ..Default::default()
        });
        assert!(engine.run().is_err());
        assert!(!engine.into_pipeline().loaded);
    }
}
