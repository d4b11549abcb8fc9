pub mod indicators;
pub mod market;
pub mod prediction;
pub mod round;
pub mod stats;
pub mod tick;

pub use indicators::*;
pub use market::*;
pub use prediction::*;
pub use stats::*;
pub use tick::*;
