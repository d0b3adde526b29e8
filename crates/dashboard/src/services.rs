//! Services table view models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use opsdesk_query as query;
use opsdesk_services::{Expiration, ExpirationBucket, Service, ServiceStatus, classify};

/// One row of the services table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceRow {
    pub service: Service,
    /// Full classification (`None` for non-active or lifetime services).
    pub expiry: Option<Expiration>,
    /// Badge variant: `ok` renders no badge.
    pub badge: Option<Expiration>,
}

/// Badge rule shared by every surface: a badge appears only when the
/// service needs attention.
fn badge_for(expiry: Option<Expiration>) -> Option<Expiration> {
    expiry.filter(|e| e.bucket != ExpirationBucket::Ok)
}

fn package_field(row: &ServiceRow) -> Option<&str> {
    Some(row.service.package.as_str())
}

fn notes_field(row: &ServiceRow) -> Option<&str> {
    row.service.notes.as_deref()
}

/// Build the services table rows from a full snapshot.
pub fn service_rows(services: &[Service], now: DateTime<Utc>) -> Vec<ServiceRow> {
    let rows: Vec<ServiceRow> = services
        .iter()
        .map(|service| {
            let expiry = classify(service, now);
            ServiceRow { service: service.clone(), expiry, badge: badge_for(expiry) }
        })
        .collect();

    debug!(total = rows.len(), "assembled service rows");
    rows
}

/// Filters applied by the services table (AND-combined).
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    pub status: Option<ServiceStatus>,
    pub search: Option<String>,
}

/// Apply the table filters over assembled rows. Row order is preserved.
pub fn filter_service_rows(rows: &[ServiceRow], filter: &ServiceFilter) -> Vec<ServiceRow> {
    let mut predicates: Vec<query::Predicate<ServiceRow>> = Vec::new();

    if let Some(status) = filter.status {
        predicates.push(query::matching(move |row: &ServiceRow| row.service.status == status));
    }
    if let Some(needle) = &filter.search {
        predicates.push(query::search(needle, vec![package_field, notes_field]));
    }

    query::filter(rows, &predicates)
}
