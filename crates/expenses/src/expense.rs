use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opsdesk_core::RecordId;

/// Expense identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub RecordId);

impl ExpenseId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Expense status: settled or awaiting payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Paid,
    Pending,
}

/// Recurrence of a recurring expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseFrequency {
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

/// Expense as supplied by the panel's REST boundary. Read-only to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub status: ExpenseStatus,
    /// Absent amounts count as 0 in every total.
    #[serde(default)]
    pub amount: Option<f64>,
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub frequency: Option<ExpenseFrequency>,
}

impl Expense {
    /// Contribution to the paid-expense total.
    ///
    /// Absent or non-finite amounts contribute 0 rather than erroring.
    pub fn paid_amount(&self) -> f64 {
        if self.status != ExpenseStatus::Paid {
            return 0.0;
        }
        match self.amount {
            Some(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }
}

/// Derived expense totals for a full snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ExpenseTotals {
    pub total_paid: f64,
    pub count_all: usize,
}

/// Single pass over a full expense snapshot.
pub fn aggregate(expenses: &[Expense]) -> ExpenseTotals {
    let mut totals = ExpenseTotals::default();
    for expense in expenses {
        totals.total_paid += expense.paid_amount();
        totals.count_all += 1;
    }
    totals
}
