//! `opsdesk-observability` — logging/tracing setup for panel hosts.

pub mod tracing;

pub use tracing::{init, init_with_filter};
