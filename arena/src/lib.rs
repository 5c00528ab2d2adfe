pub mod evaluate;

mod match_persistance;
mod options;

pub use evaluate::*;
pub use match_persistance::*;
pub use options::*;
