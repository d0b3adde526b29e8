//! `opsdesk-expenses` — expense records and paid/pending totals.

pub mod expense;

pub use expense::{Expense, ExpenseFrequency, ExpenseId, ExpenseStatus, ExpenseTotals, aggregate};
