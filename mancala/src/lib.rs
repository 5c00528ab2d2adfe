pub mod board;
pub mod error;
pub mod player;
pub mod score;

mod constants;

pub use board::*;
pub use constants::*;
pub use error::*;
pub use player::*;
pub use score::*;
