//! `opsdesk-accounting` — composed financial metrics.
//!
//! Composes the invoice and expense aggregates into the headline numbers of
//! the accounting page. Pure and snapshot-based; recomputed on every call.

pub mod metrics;

pub use metrics::{Metrics, compute_metrics};
