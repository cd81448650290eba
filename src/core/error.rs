use serde_json::Value;
use thiserror::Error;

/// The one recoverable failure class: a malformed `sharded` specification.
///
/// Everything else (bad JSON, non-numeric port) is a caller contract
/// violation and surfaces as a [`PlanError`] instead.
#[derive(Debug, Error)]
pub enum ShardSpecError {
    #[error("Invalid 'sharded' value (not null or list): {0}")]
    NotAList(Value),

    #[error("Invalid 'sharded' value: empty array")]
    EmptyList,

    #[error("Invalid 'sharded' value: list must contain only strings (got: {0})")]
    NonStringMembers(Value),

    #[error("Invalid shard count in 'sharded': {0:?}")]
    InvalidCount(String),
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    ShardSpec(#[from] ShardSpecError),

    #[error("Invalid numeric value for '{field}': {detail}")]
    Coercion { field: &'static str, detail: String },

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
