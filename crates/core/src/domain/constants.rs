// Configuration defaults (no magic values scattered through the defaulting pass)

/// Bag key carrying a pipeline's declared name.
/// Forced to match the pipeline's key in the owning mapping.
pub const PIPELINE_NAME_KEY: &str = "name";

/// Bag key carrying a pipeline's dispatch priority.
pub const PRIORITY_KEY: &str = "priority";

/// Default pipeline priority when none was supplied or the supplied
/// value does not read as an integer.
pub const DEFAULT_PRIORITY: i64 = 10;

/// Default limit for the driver-side staging queue feeding the main
/// jobs queue. A generous bound; the live in-memory dispatch queue is
/// expected to be much smaller.
pub const DEFAULT_PIPELINE_SIZE: u64 = 1_000_000;

/// Default per-push admission limit (seconds). Bounds how long a single
/// push may block waiting for queue admission before failing.
pub const DEFAULT_PUSH_TIMEOUT_SECS: u64 = 60;

/// Pollers provisioned beyond the worker count. Slightly more pollers
/// than workers keeps every worker loaded; a core-count default would
/// over- or under-shoot a small pool.
pub const POLLER_SURPLUS: usize = 2;

/// Default time to wait for a new worker process to allocate (seconds).
pub const DEFAULT_ALLOCATE_TIMEOUT_SECS: u64 = 60;

/// Default time to wait for a worker process to stop on destroy (seconds).
pub const DEFAULT_DESTROY_TIMEOUT_SECS: u64 = 60;
