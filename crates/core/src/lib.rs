// Conveyor Core - Pipeline Configuration & Defaulting
// NO broker runtime dependencies: the config is normalized once, before startup

pub mod application;
pub mod domain;
pub mod error;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
