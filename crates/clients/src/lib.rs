//! `opsdesk-clients` — client records.
//!
//! Clients are supplied read-only by the panel's REST boundary. A client has
//! zero-or-one linked user account; services are looked up by that user's id.

pub mod client;

pub use client::{Client, ClientId, ClientStatus};
