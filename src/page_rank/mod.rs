mod traits;
pub use self::traits::*;
pub mod iterated;
pub mod sampled;
pub mod transition;
pub use self::transition::transition_model;

pub const DEFAULT_DAMPING: f64 = 0.85;
