// Broker Configuration & Defaulting
//
// `init_defaults` runs once, synchronously, before any broker activity
// begins. Afterwards the config is read-mostly shared state: pollers
// and the dispatch engine read it without further synchronization, and
// nothing mutates the bags after startup.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::domain::constants::{
    DEFAULT_PIPELINE_SIZE, DEFAULT_PRIORITY, DEFAULT_PUSH_TIMEOUT_SECS, PIPELINE_NAME_KEY,
    POLLER_SURPLUS, PRIORITY_KEY,
};
use crate::domain::pipeline::Pipeline;
use crate::domain::pool::PoolConfig;

/// Settings for the job broker, its worker pool, and the job-pipeline
/// mapping.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// Number of priority-queue pollers. Zero means derive from the
    /// defaulted pool: worker count plus [`POLLER_SURPLUS`].
    pub num_pollers: usize,

    /// Limit of the driver-side staging queue which feeds the main
    /// jobs queue. The driver pipeline may be much larger than the
    /// live dispatch queue.
    pub pipeline_size: u64,

    /// Per-push limit (seconds) to admit a job into its queue.
    pub timeout: u64,

    /// Worker pool settings; constructed empty when absent.
    pub pool: Option<PoolConfig>,

    /// Mapping from pipeline name to its property bag.
    pub pipelines: HashMap<String, Pipeline>,

    /// Names of pipelines to consume on service start, in order.
    /// Resolution against `pipelines` happens at startup, not here.
    pub consume: Vec<String>,
}

impl BrokerConfig {
    /// Normalize the raw config before broker startup.
    ///
    /// Fills zero-valued fields only, so explicit settings are never
    /// overridden and a second call is a no-op. Step order matters:
    /// the poller derivation reads the pool defaulted in the same pass.
    pub fn init_defaults(&mut self) {
        if self.pool.is_none() {
            self.pool = Some(PoolConfig::default());
        }

        if self.pipeline_size == 0 {
            self.pipeline_size = DEFAULT_PIPELINE_SIZE;
        }

        for (name, pipeline) in &mut self.pipelines {
            // The mapping key is the pipeline's identity; it overrides
            // whatever name the raw input carried.
            pipeline.insert(PIPELINE_NAME_KEY, name.as_str());

            // Re-read and write back to normalize string/narrow
            // integer priorities to i64.
            let priority = pipeline.int(PRIORITY_KEY, DEFAULT_PRIORITY);
            pipeline.insert(PRIORITY_KEY, priority);
        }

        if self.timeout == 0 {
            self.timeout = DEFAULT_PUSH_TIMEOUT_SECS;
        }

        if let Some(pool) = self.pool.as_mut() {
            pool.init_defaults();

            // Slightly more pollers than workers keeps every worker
            // loaded without tying the default to the host's core count.
            if self.num_pollers == 0 {
                self.num_pollers = pool.num_workers as usize + POLLER_SURPLUS;
            }
        }

        debug!(
            num_pollers = self.num_pollers,
            pipeline_size = self.pipeline_size,
            timeout = self.timeout,
            pipelines = self.pipelines.len(),
            "broker configuration defaulted"
        );
    }

    /// Lookup a pipeline by name.
    pub fn pipeline(&self, name: &str) -> Option<&Pipeline> {
        self.pipelines.get(name)
    }
}
