pub mod game_event;
pub mod logger;
pub mod move_source;
pub mod play_self_one;
pub mod self_play;
pub mod self_play_metrics;
pub mod self_play_persistance;

pub use game_event::*;
pub use logger::*;
pub use move_source::*;
pub use play_self_one::*;
pub use self_play::*;
pub use self_play_metrics::*;
pub use self_play_persistance::*;
