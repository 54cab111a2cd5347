pub mod decoder;
pub mod emitter;
pub mod etl;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{LoadSummary, ResourceRecordSet, TransformResult};
pub use crate::domain::ports::{Pipeline, RecordSource};
pub use crate::utils::error::Result;
