pub mod analysis;
pub mod error;
pub mod recorder;
pub mod sample;
pub mod stats;
pub mod view_distance;

pub use analysis::{Analysis, PerformanceSummary};
pub use error::{PerfError, Result};
pub use recorder::Recorder;
pub use sample::PerformanceSample;
pub use view_distance::recommend_view_distance;
