use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opsdesk_clients::ClientId;
use opsdesk_core::{DomainError, DomainResult, RecordId, money};

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub RecordId);

impl InvoiceId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Partial,
    Cancelled,
}

impl InvoiceStatus {
    /// Statuses that count toward outstanding receivables.
    pub fn is_outstanding(self) -> bool {
        matches!(self, Self::Sent | Self::Overdue | Self::Partial)
    }

    /// Statuses counted as "pending" in the panel headers.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Sent | Self::Partial)
    }
}

/// Recurrence period of an installment plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentPeriod {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
}

/// Installment arrangement: a down payment plus recurring installments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlan {
    #[serde(default)]
    pub is_installment: bool,
    /// Down payment in the invoice's own currency.
    #[serde(default)]
    pub down_payment: f64,
    #[serde(default)]
    pub installment_amount: f64,
    #[serde(default)]
    pub installments_count: u32,
    #[serde(default)]
    pub period: InstallmentPeriod,
}

/// Promotion applied to the invoice at issue time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Discount in the invoice's own currency.
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub code: Option<String>,
}

/// One line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

/// Invoice as supplied by the panel's REST boundary. Read-only to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub client: ClientId,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub tax_amount: f64,
    /// Total pre-converted to the base currency by the boundary, when known.
    #[serde(default)]
    pub total_in_base_currency: Option<f64>,
    /// Conversion rate from invoice currency to base. Absent means 1.
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,
    #[serde(default)]
    pub payment_plan: Option<PaymentPlan>,
    #[serde(default)]
    pub promotion: Option<Promotion>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

fn default_exchange_rate() -> f64 {
    1.0
}

impl Invoice {
    /// Total in the base currency.
    ///
    /// Prefers the boundary-supplied `totalInBaseCurrency`; otherwise
    /// converts `total` with the record's rate.
    pub fn base_total(&self) -> DomainResult<f64> {
        match self.total_in_base_currency {
            Some(v) if v.is_finite() => Ok(v),
            Some(v) => Err(DomainError::validation(format!(
                "totalInBaseCurrency must be finite, got {v}"
            ))),
            None => money::normalize(self.total, self.exchange_rate),
        }
    }

    /// Down payment converted to the base currency (0 without a plan).
    pub fn base_down_payment(&self) -> DomainResult<f64> {
        match &self.payment_plan {
            Some(plan) => money::normalize(plan.down_payment, self.exchange_rate),
            None => Ok(0.0),
        }
    }

    /// Whether an installment plan governs this invoice's payments.
    pub fn is_installment(&self) -> bool {
        self.payment_plan.as_ref().is_some_and(|p| p.is_installment)
    }

    /// Revenue contribution in the base currency (paid invoices only).
    ///
    /// A malformed record contributes 0 rather than aborting the batch.
    pub fn revenue_amount(&self) -> f64 {
        if self.status != InvoiceStatus::Paid {
            return 0.0;
        }
        self.base_total().unwrap_or(0.0)
    }

    /// Amount still owed on this invoice, in the base currency.
    ///
    /// Partial installment invoices owe the base total minus the converted
    /// down payment; every other outstanding status owes the full base
    /// total. Statuses outside the outstanding bucket owe 0.
    pub fn outstanding_amount(&self) -> f64 {
        if !self.status.is_outstanding() {
            return 0.0;
        }
        let total = self.base_total().unwrap_or(0.0);
        if self.status == InvoiceStatus::Partial && self.is_installment() {
            total - self.base_down_payment().unwrap_or(0.0)
        } else {
            total
        }
    }

    /// Promotion savings realized on this invoice, in the base currency.
    ///
    /// Only paid invoices realize savings; absent promotions mean 0.
    pub fn promotion_savings(&self) -> f64 {
        if self.status != InvoiceStatus::Paid {
            return 0.0;
        }
        match &self.promotion {
            Some(promo) => money::normalize(promo.discount_amount, self.exchange_rate).unwrap_or(0.0),
            None => 0.0,
        }
    }
}
