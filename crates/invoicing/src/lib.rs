//! `opsdesk-invoicing` — invoice records and revenue/outstanding aggregation.
//!
//! Invoices are supplied read-only by the panel's REST boundary; this crate
//! derives the revenue and outstanding-receivables buckets every financial
//! surface shares.

pub mod aggregate;
pub mod invoice;

pub use aggregate::{InvoiceTotals, aggregate};
pub use invoice::{
    InstallmentPeriod, Invoice, InvoiceId, InvoiceItem, InvoiceStatus, PaymentPlan, Promotion,
};
