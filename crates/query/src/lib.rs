//! `opsdesk-query` — generic record filtering.
//!
//! Panel tables (services, clients, invoices) filter fully-loaded record
//! snapshots. Predicates are AND-combined; the input is never mutated and
//! its order is preserved.

pub mod filter;

pub use filter::{Predicate, filter, matching, search};
