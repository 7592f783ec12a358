pub mod traits;
pub mod difference;
pub mod diversity;
pub mod selection;
pub mod sampling;
pub mod weights;
pub mod manager;

pub use manager::{ConfigManager, CoreConfig};
pub use traits::{ConfigManifest, ConfigSection, FieldManifest};
pub use difference::DifferenceConfig;
pub use diversity::{DiversityConfig, DiversitySpace};
pub use selection::SelectionConfig;
pub use sampling::{SamplingConfig, SamplingStrategyKind};
pub use weights::{WeightConfig, WeightStrategyKind};
