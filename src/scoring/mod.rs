pub mod component;
pub mod engine;
pub mod validation;
pub mod values;
pub mod weights;

pub use component::{Component, COMPONENT_COUNT};
pub use engine::{ComponentContribution, ScoreEngine, ScoreResult};
pub use validation::{clamp_value, validate_value, MAX_VALUE, MIN_VALUE};
pub use values::{Collector, ValueSet};
pub use weights::{WeightTable, STANDARD_WEIGHTS};
