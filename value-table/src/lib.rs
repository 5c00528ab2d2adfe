pub mod builder;
pub mod file_store;
pub mod move_stats;
pub mod policy;
pub mod record;
pub mod state_key;
pub mod stats;
pub mod store;

pub use builder::*;
pub use file_store::*;
pub use move_stats::*;
pub use policy::*;
pub use record::*;
pub use state_key::*;
pub use stats::*;
pub use store::*;
