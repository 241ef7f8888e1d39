// Startup Resolution - consume list against declared pipelines
//
// The defaulting pass deliberately leaves the consume list unvalidated.
// The startup sequencer resolves it here and rejects startup on the
// first unknown name rather than silently skipping it.

use tracing::debug;

use crate::domain::{BrokerConfig, Pipeline};
use crate::error::{AppError, Result};

/// Resolve the consume list to its pipelines, in declared order.
///
/// Duplicate entries are allowed and resolve to the same pipeline.
pub fn resolve_consumed(config: &BrokerConfig) -> Result<Vec<&Pipeline>> {
    let mut resolved = Vec::with_capacity(config.consume.len());

    for name in &config.consume {
        match config.pipeline(name) {
            Some(pipeline) => resolved.push(pipeline),
            None => return Err(AppError::UnknownPipeline(name.clone())),
        }
    }

    debug!(count = resolved.len(), "consume list resolved");
    Ok(resolved)
}
