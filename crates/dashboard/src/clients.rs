//! Client detail view model and client search.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use opsdesk_clients::Client;
use opsdesk_query as query;
use opsdesk_services::Service;

use crate::services::{ServiceRow, service_rows};

/// Client page view model: the client plus the services reachable through
/// its linked user account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDetail {
    pub client: Client,
    pub services: Vec<ServiceRow>,
    /// Rows carrying an expiry badge (warning or worse).
    pub expiring_count: usize,
}

/// Assemble the client detail view.
///
/// A client without a linked user has no services; the full service
/// snapshot is filtered down by the linked user's id.
pub fn client_detail(client: &Client, services: &[Service], now: DateTime<Utc>) -> ClientDetail {
    let owned: Vec<Service> = match client.linked_user {
        Some(user) => services.iter().filter(|s| s.user == user).cloned().collect(),
        None => Vec::new(),
    };

    let rows = service_rows(&owned, now);
    let expiring_count = rows.iter().filter(|row| row.badge.is_some()).count();

    debug!(
        client = %client.id,
        services = rows.len(),
        expiring = expiring_count,
        "assembled client detail"
    );

    ClientDetail { client: client.clone(), services: rows, expiring_count }
}

fn name_field(client: &Client) -> Option<&str> {
    Some(client.name.as_str())
}

fn email_field(client: &Client) -> Option<&str> {
    client.email.as_deref()
}

/// Case-insensitive client search over name and email.
pub fn search_clients(clients: &[Client], needle: &str) -> Vec<Client> {
    let predicates = vec![query::search(needle, vec![name_field, email_field])];
    query::filter(clients, &predicates)
}
