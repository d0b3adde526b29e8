//! `opsdesk-dashboard` — view-model assembly for the panel surfaces.
//!
//! Each surface (accounting overview, services table, client detail) takes
//! full record snapshots plus an explicit `now` and returns plain
//! serializable view models. Rendering, routing and data fetching live
//! outside this workspace.

pub mod accounting;
pub mod clients;
pub mod services;

pub use accounting::{AccountingOverview, ExpiringService, accounting_overview};
pub use clients::{ClientDetail, client_detail, search_clients};
pub use services::{ServiceFilter, ServiceRow, filter_service_rows, service_rows};
