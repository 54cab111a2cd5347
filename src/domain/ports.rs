use crate::domain::model::{LoadSummary, ResourceRecordSet, TransformResult};
use crate::utils::error::Result;

/// Where the raw record listing comes from.
pub trait RecordSource {
    /// Consumes the whole stream.
    fn read_all(&mut self) -> Result<Vec<u8>>;
}

pub trait Pipeline {
    fn extract(&mut self) -> Result<Vec<ResourceRecordSet>>;
    fn transform(&self, records: Vec<ResourceRecordSet>) -> Result<TransformResult>;
    fn load(&mut self, result: TransformResult) -> Result<LoadSummary>;
}
