pub mod error;

pub use error::{PlanError, Result, ShardSpecError};
