//! Connection-plan composition: ties the typed spec, the classified
//! topology, and the renderers together into the final output value.
//!
//! Port layout for a sharded deployment: the mongos routers take
//! `port .. port+mongos`, then shard `i` takes the `nodes`-wide range
//! starting at `port + mongos + i * nodes`. Ranges never overlap.

use std::fmt;

use tracing::debug;

use crate::core::Result;
use crate::input::{DeploymentRequest, DeploymentSpec};
use crate::render::{ConnectionString, shard_names};
use crate::topology::ShardingTopology;

/// One shard's resolved name and connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardConnection {
    pub name: String,
    pub connection_string: ConnectionString,
}

/// Every connection string for one planned deployment.
///
/// `Display` renders the exact text the tool prints on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionPlan {
    ReplicaSet {
        connection_string: ConnectionString,
    },
    ShardedCluster {
        mongos: ConnectionString,
        shards: Vec<ShardConnection>,
    },
}

impl ConnectionPlan {
    /// Decode one JSON deployment request and compose its plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use connplan::ConnectionPlan;
    ///
    /// # fn main() -> connplan::Result<()> {
    /// let plan = ConnectionPlan::from_json(
    ///     r#"{"parsed_args": {"hostname": "db", "port": 27017, "nodes": 3}}"#,
    /// )?;
    /// assert_eq!(
    ///     plan.to_string(),
    ///     "Connection string:\nmongodb://db:27017,db:27018,db:27019"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json(input: &str) -> Result<Self> {
        let request = DeploymentRequest::from_json(input)?;
        let spec = DeploymentSpec::resolve(request)?;
        Self::compose(&spec)
    }

    /// Read a JSON deployment request from a stream and compose its plan.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        let request = DeploymentRequest::from_reader(reader)?;
        let spec = DeploymentSpec::resolve(request)?;
        Self::compose(&spec)
    }

    /// Compose the plan for an already-resolved spec.
    pub fn compose(spec: &DeploymentSpec) -> Result<Self> {
        let topology = ShardingTopology::classify(spec.sharded.as_ref())?;
        debug!("classified sharding topology: {:?}", topology);

        Ok(match topology {
            ShardingTopology::Unsharded => Self::replica_set(spec),
            ShardingTopology::ByCount(count) => Self::sharded_cluster(spec, shard_names(count)),
            ShardingTopology::ByName(names) => Self::sharded_cluster(spec, names),
        })
    }

    fn replica_set(spec: &DeploymentSpec) -> Self {
        ConnectionPlan::ReplicaSet {
            connection_string: ConnectionString::for_hosts(
                &spec.hostname,
                spec.port.into(),
                spec.nodes.into(),
            ),
        }
    }

    fn sharded_cluster(spec: &DeploymentSpec, names: Vec<String>) -> Self {
        let mongos =
            ConnectionString::for_hosts(&spec.hostname, spec.port.into(), spec.mongos.into());

        // Shard ports start immediately after the last mongos port.
        let first_shard_port = u64::from(spec.port) + u64::from(spec.mongos);
        let nodes = u64::from(spec.nodes);
        debug!(
            "laying out {} shard(s) of {} node(s) from port {}",
            names.len(),
            nodes,
            first_shard_port
        );

        let shards = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| ShardConnection {
                connection_string: ConnectionString::for_hosts(
                    &spec.hostname,
                    first_shard_port + i as u64 * nodes,
                    nodes,
                ),
                name,
            })
            .collect();

        ConnectionPlan::ShardedCluster { mongos, shards }
    }
}

impl fmt::Display for ConnectionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionPlan::ReplicaSet { connection_string } => {
                write!(f, "Connection string:\n{connection_string}")
            }
            ConnectionPlan::ShardedCluster { mongos, shards } => {
                write!(f, "Main connection string:\n{mongos}\n\nPer-shard connection strings:")?;
                for shard in shards {
                    write!(f, "\n{}: {}", shard.name, shard.connection_string)?;
                }
                Ok(())
            }
        }
    }
}
