use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opsdesk_core::{RecordId, UserId};

/// Service identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub RecordId);

impl ServiceId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Service status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Active,
    Pending,
    Expired,
    Suspended,
    Cancelled,
}

/// Billing cycle of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

/// Service as supplied by the panel's REST boundary. Read-only to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    /// Owning user account (clients link to services through this id).
    pub user: UserId,
    pub package: String,
    pub status: ServiceStatus,
    pub start_date: DateTime<Utc>,
    /// Absent means lifetime: the service never expires.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price: f64,
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Service {
    /// Lifetime services have no end date and never expire.
    pub fn is_lifetime(&self) -> bool {
        self.end_date.is_none()
    }
}
