//! Revenue/outstanding bucket aggregation over invoice snapshots.

use serde::Serialize;

use crate::invoice::{Invoice, InvoiceStatus};

/// Derived revenue and receivables buckets for a full invoice snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InvoiceTotals {
    /// Base-currency sum over paid invoices.
    pub revenue: f64,
    /// Base-currency sum still owed over sent/overdue/partial invoices.
    pub outstanding: f64,
    pub paid_count: usize,
    pub pending_count: usize,
}

/// Single pass over a full invoice snapshot.
///
/// Invoices matching no bucket (`draft`, `cancelled`) contribute 0 to both
/// sums. A record with a malformed rate keeps its status counts but
/// contributes 0 to the sums; the batch never aborts.
pub fn aggregate(invoices: &[Invoice]) -> InvoiceTotals {
    let mut totals = InvoiceTotals::default();

    for invoice in invoices {
        totals.revenue += invoice.revenue_amount();
        totals.outstanding += invoice.outstanding_amount();

        if invoice.status == InvoiceStatus::Paid {
            totals.paid_count += 1;
        }
        if invoice.status.is_pending() {
            totals.pending_count += 1;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{InstallmentPeriod, InvoiceId, InvoiceItem, PaymentPlan};
    use chrono::Utc;
    use opsdesk_clients::ClientId;
    use opsdesk_core::RecordId;
    use proptest::prelude::*;

    fn test_invoice(status: InvoiceStatus, total: f64) -> Invoice {
        Invoice {
            id: InvoiceId::new(RecordId::new()),
            client: ClientId::new(RecordId::new()),
            status,
            total,
            subtotal: total,
            tax_rate: 0.0,
            tax_amount: 0.0,
            total_in_base_currency: None,
            exchange_rate: 1.0,
            payment_plan: None,
            promotion: None,
            items: vec![InvoiceItem {
                description: "Retainer".to_string(),
                quantity: 1.0,
                unit_price: total,
            }],
            issue_date: Utc::now(),
            due_date: Utc::now(),
        }
    }

    #[test]
    fn buckets_paid_and_outstanding_invoices() {
        let mut partial = test_invoice(InvoiceStatus::Partial, 200.0);
        partial.total_in_base_currency = Some(200.0);
        partial.payment_plan = Some(PaymentPlan {
            is_installment: true,
            down_payment: 50.0,
            installment_amount: 25.0,
            installments_count: 6,
            period: InstallmentPeriod::Monthly,
        });

        let invoices = vec![
            test_invoice(InvoiceStatus::Paid, 100.0),
            partial,
            test_invoice(InvoiceStatus::Overdue, 75.0),
            test_invoice(InvoiceStatus::Draft, 999.0),
        ];

        let totals = aggregate(&invoices);
        assert_eq!(totals.revenue, 100.0);
        assert_eq!(totals.outstanding, 225.0);
        assert_eq!(totals.paid_count, 1);
        // Sent + partial are pending; overdue is not.
        assert_eq!(totals.pending_count, 1);
    }

    #[test]
    fn malformed_rate_keeps_counts_but_not_sums() {
        let mut bad = test_invoice(InvoiceStatus::Paid, 100.0);
        bad.exchange_rate = f64::INFINITY;

        let totals = aggregate(&[bad, test_invoice(InvoiceStatus::Paid, 40.0)]);
        assert_eq!(totals.revenue, 40.0);
        assert_eq!(totals.paid_count, 2);
    }

    #[test]
    fn empty_snapshot_aggregates_to_zero() {
        let totals = aggregate(&[]);
        assert_eq!(totals, InvoiceTotals::default());
    }

    fn non_bucket_status() -> impl Strategy<Value = InvoiceStatus> {
        prop_oneof![Just(InvoiceStatus::Draft), Just(InvoiceStatus::Cancelled)]
    }

    proptest! {
        /// Property: invoices outside every bucket contribute 0 to both sums
        /// and to both counts.
        #[test]
        fn non_bucket_statuses_contribute_nothing(
            rows in prop::collection::vec((non_bucket_status(), 0.0f64..1_000_000.0), 0..20)
        ) {
            let invoices: Vec<Invoice> = rows
                .into_iter()
                .map(|(status, total)| test_invoice(status, total))
                .collect();

            let totals = aggregate(&invoices);
            prop_assert_eq!(totals.revenue, 0.0);
            prop_assert_eq!(totals.outstanding, 0.0);
            prop_assert_eq!(totals.paid_count, 0);
            prop_assert_eq!(totals.pending_count, 0);
        }

        /// Property: with unit rates, revenue is exactly the sum of paid
        /// totals.
        #[test]
        fn revenue_sums_paid_totals_at_unit_rate(
            totals_in in prop::collection::vec(0.0f64..1_000.0, 0..20)
        ) {
            let invoices: Vec<Invoice> = totals_in
                .iter()
                .map(|&t| test_invoice(InvoiceStatus::Paid, t))
                .collect();

            let expected: f64 = totals_in.iter().sum();
            let totals = aggregate(&invoices);
            prop_assert!((totals.revenue - expected).abs() < 1e-9);
            prop_assert_eq!(totals.paid_count, invoices.len());
        }
    }
}
