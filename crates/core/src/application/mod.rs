// Application Layer - Config loading and startup resolution

pub mod loader;
pub mod startup;

pub use loader::{load_from_path, load_from_str};
pub use startup::resolve_consumed;
