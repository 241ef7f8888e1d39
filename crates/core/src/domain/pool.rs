// Worker Pool Configuration

use serde::Deserialize;

use crate::domain::constants::{DEFAULT_ALLOCATE_TIMEOUT_SECS, DEFAULT_DESTROY_TIMEOUT_SECS};

/// Sizing and supervision settings for the external worker pool.
///
/// Zero-valued fields are placeholders filled by [`PoolConfig::init_defaults`].
/// Nonsensical explicit values pass through unchecked; validating them
/// belongs to the pool manager, not the config layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of worker processes. Zero means size to the host
    /// (logical CPU count).
    pub num_workers: u64,

    /// Seconds to wait for a new worker process to allocate.
    pub allocate_timeout_secs: u64,

    /// Seconds to wait for a worker process to stop on destroy.
    pub destroy_timeout_secs: u64,
}

impl PoolConfig {
    /// Fill zero-valued fields. Total; no failure path.
    pub fn init_defaults(&mut self) {
        if self.num_workers == 0 {
            self.num_workers = logical_cpus();
        }

        if self.allocate_timeout_secs == 0 {
            self.allocate_timeout_secs = DEFAULT_ALLOCATE_TIMEOUT_SECS;
        }

        if self.destroy_timeout_secs == 0 {
            self.destroy_timeout_secs = DEFAULT_DESTROY_TIMEOUT_SECS;
        }
    }
}

fn logical_cpus() -> u64 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u64)
        .unwrap_or(1)
}
