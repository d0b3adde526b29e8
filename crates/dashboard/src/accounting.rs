//! Accounting page view model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use opsdesk_accounting::{Metrics, compute_metrics};
use opsdesk_expenses::Expense;
use opsdesk_invoicing::Invoice;
use opsdesk_services::{Expiration, ExpirationBucket, Service, classify};

/// A service surfaced on the accounting page's alert strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiringService {
    pub service: Service,
    pub expiry: Expiration,
}

/// Accounting page view model: headline metrics plus the services that need
/// attention right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountingOverview {
    pub metrics: Metrics,
    /// Services in the `critical` or `expired` buckets, most urgent first.
    pub expiring_soon: Vec<ExpiringService>,
}

/// Assemble the accounting overview from full snapshots.
pub fn accounting_overview(
    invoices: &[Invoice],
    expenses: &[Expense],
    services: &[Service],
    now: DateTime<Utc>,
) -> AccountingOverview {
    let metrics = compute_metrics(invoices, expenses);

    let mut expiring_soon: Vec<ExpiringService> = services
        .iter()
        .filter_map(|service| {
            classify(service, now).and_then(|expiry| match expiry.bucket {
                ExpirationBucket::Critical | ExpirationBucket::Expired => {
                    Some(ExpiringService { service: service.clone(), expiry })
                }
                _ => None,
            })
        })
        .collect();

    // Expired first (longest-expired leading), then soonest-to-expire.
    expiring_soon.sort_by_key(|e| match e.expiry.bucket {
        ExpirationBucket::Expired => (0, -e.expiry.days),
        _ => (1, e.expiry.days),
    });

    debug!(
        invoices = invoices.len(),
        expenses = expenses.len(),
        expiring = expiring_soon.len(),
        "assembled accounting overview"
    );

    AccountingOverview { metrics, expiring_soon }
}
