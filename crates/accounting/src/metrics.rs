use serde::Serialize;

use opsdesk_core::money;
use opsdesk_expenses::Expense;
use opsdesk_invoicing::Invoice;

/// Headline financial metrics for the accounting page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Metrics {
    /// Base-currency revenue (paid invoices).
    pub revenue: f64,
    /// Base-currency receivables (sent/overdue/partial invoices).
    pub outstanding: f64,
    /// Paid expenses.
    pub total_expenses: f64,
    pub net_profit: f64,
    /// Percentage rounded to one decimal. Exactly 0 when revenue <= 0,
    /// never NaN or infinite.
    pub profit_margin: f64,
    /// Realized promotion discounts on paid invoices, in base currency.
    pub promotion_savings: f64,
    pub paid_invoices: usize,
    pub pending_invoices: usize,
    pub expense_count: usize,
}

/// Compose invoice and expense aggregates into the panel's headline metrics.
pub fn compute_metrics(invoices: &[Invoice], expenses: &[Expense]) -> Metrics {
    let invoice_totals = opsdesk_invoicing::aggregate(invoices);
    let expense_totals = opsdesk_expenses::aggregate(expenses);

    let revenue = invoice_totals.revenue;
    let total_expenses = expense_totals.total_paid;
    let net_profit = revenue - total_expenses;

    let profit_margin = if revenue > 0.0 {
        money::round1(net_profit / revenue * 100.0)
    } else {
        0.0
    };

    let promotion_savings = invoices.iter().map(Invoice::promotion_savings).sum();

    Metrics {
        revenue,
        outstanding: invoice_totals.outstanding,
        total_expenses,
        net_profit,
        profit_margin,
        promotion_savings,
        paid_invoices: invoice_totals.paid_count,
        pending_invoices: invoice_totals.pending_count,
        expense_count: expense_totals.count_all,
    }
}
