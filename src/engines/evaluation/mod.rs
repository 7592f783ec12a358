pub mod progress;
pub mod samples;
pub mod sampling;

pub use progress::{ProgressListener, ProgressPublisher};
pub use samples::{ReferenceId, SampleData};
pub use sampling::{build_strategy, FixedSampling, NoNoise, SamplingStrategy, StandardErrorSampling};
