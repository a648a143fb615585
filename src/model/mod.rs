pub mod record;
pub mod weights;

pub use record::{EnrichedRecord, RawRecord};
pub use weights::GradeWeights;
