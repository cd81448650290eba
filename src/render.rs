//! Host-list and connection-string rendering.
//!
//! Everything here is deterministic text formatting: given a hostname, a
//! starting port, and a count, produce the `host:port,host:port,...`
//! sequences that make up a `mongodb://` connection string.

use std::fmt;

/// Build a comma-separated host list like `db:27017,db:27018,db:27019`.
///
/// The i-th entry is `hostname:(start_port + i)`, in ascending port order.
/// A count of zero yields an empty string.
pub fn host_list(hostname: &str, start_port: u64, count: u64) -> String {
    (0..count)
        .map(|i| format!("{}:{}", hostname, start_port + i))
        .collect::<Vec<_>>()
        .join(",")
}

/// Synthesize 1-based shard names: `shard01`, `shard02`, ...
///
/// Indices are zero-padded to at least two digits, or to the number of
/// digits in the total count when that is wider (150 shards get
/// `shard001` through `shard150`).
pub fn shard_names(count: usize) -> Vec<String> {
    let width = count.to_string().len().max(2);
    (1..=count)
        .map(|i| format!("shard{:0width$}", i, width = width))
        .collect()
}

/// A rendered `mongodb://host:port,...` connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString(String);

impl ConnectionString {
    /// Render the connection string for `count` consecutive hosts starting
    /// at `start_port`. Zero hosts is legal and yields `mongodb://`.
    pub fn for_hosts(hostname: &str, start_port: u64, count: u64) -> Self {
        Self(format!("mongodb://{}", host_list(hostname, start_port, count)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
