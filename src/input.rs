//! Input decoding and typed parameter extraction.
//!
//! The wire shape is one JSON object with a nested `parsed_args` mapping
//! in which every key is optional and the numeric keys may arrive as
//! integers or numeric strings. [`DeploymentRequest`] mirrors that shape
//! verbatim; [`DeploymentSpec::resolve`] turns it into typed, validated
//! fields exactly once, so the rest of the crate never touches loose JSON
//! (except for `sharded`, which stays raw until topology classification).

use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::core::{PlanError, Result};

pub const DEFAULT_HOSTNAME: &str = "localhost";
pub const DEFAULT_PORT: u16 = 27017;
pub const DEFAULT_NODES: u16 = 1;
pub const DEFAULT_MONGOS: u16 = 0;

/// Raw tool input: `{ "parsed_args": { ... } }`.
///
/// A missing `parsed_args` object is treated as an empty mapping; unknown
/// keys anywhere are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct DeploymentRequest {
    #[serde(default)]
    pub parsed_args: RequestParams,
}

/// The optional keys inside `parsed_args`, still untyped.
#[derive(Debug, Default, Deserialize)]
pub struct RequestParams {
    pub hostname: Option<String>,
    pub port: Option<NumericValue>,
    pub nodes: Option<NumericValue>,
    pub sharded: Option<Value>,
    pub mongos: Option<NumericValue>,
}

/// A field that may arrive as a JSON integer or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Int(i64),
    Text(String),
}

impl NumericValue {
    fn coerce_u16(&self, field: &'static str) -> Result<u16> {
        match self {
            NumericValue::Int(n) => u16::try_from(*n).map_err(|_| PlanError::Coercion {
                field,
                detail: format!("{n} is out of range 0..=65535"),
            }),
            NumericValue::Text(s) => s.parse::<u16>().map_err(|_| PlanError::Coercion {
                field,
                detail: format!("{s:?} is not an integer in 0..=65535"),
            }),
        }
    }
}

impl DeploymentRequest {
    /// Decode one JSON object.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read a stream to EOF and decode it.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json(&buf)
    }
}

/// Typed deployment parameters, resolved once at the input boundary.
#[derive(Debug, Clone)]
pub struct DeploymentSpec {
    pub hostname: String,
    pub port: u16,
    pub nodes: u16,
    pub mongos: u16,
    /// Raw sharding specification, classified later by
    /// [`crate::ShardingTopology`].
    pub sharded: Option<Value>,
}

impl DeploymentSpec {
    /// Apply defaults and coerce every numeric field, naming the field in
    /// the error when a value cannot be coerced.
    pub fn resolve(request: DeploymentRequest) -> Result<Self> {
        let params = request.parsed_args;
        Ok(Self {
            hostname: params
                .hostname
                .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
            port: coerce("port", params.port, DEFAULT_PORT)?,
            nodes: coerce("nodes", params.nodes, DEFAULT_NODES)?,
            mongos: coerce("mongos", params.mongos, DEFAULT_MONGOS)?,
            sharded: params.sharded,
        })
    }
}

fn coerce(field: &'static str, value: Option<NumericValue>, default: u16) -> Result<u16> {
    match value {
        Some(value) => value.coerce_u16(field),
        None => Ok(default),
    }
}
