// Domain Layer - Configuration entities and defaulting rules

pub mod config;
pub mod constants;
pub mod pipeline;
pub mod pool;

// Re-exports
pub use config::BrokerConfig;
pub use pipeline::{Pipeline, Value};
pub use pool::PoolConfig;
