pub mod config;
pub mod fs;
pub mod math;
pub mod rng;

pub use config::*;
pub use fs::*;
pub use math::*;
pub use rng::*;
