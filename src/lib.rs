// ============================================================================
// connplan Library
// ============================================================================

pub mod core;
pub mod input;
pub mod plan;
pub mod render;
pub mod topology;

// Re-export the main types for convenience
pub use core::{PlanError, Result, ShardSpecError};
pub use input::{DeploymentRequest, DeploymentSpec, NumericValue, RequestParams};
pub use plan::{ConnectionPlan, ShardConnection};
pub use render::ConnectionString;
pub use topology::ShardingTopology;
