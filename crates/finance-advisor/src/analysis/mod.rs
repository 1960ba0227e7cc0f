//! Rule-Based Analysis
//!
//! Pure, deterministic computations over a `FinancialRecord`.

mod breakdown;
mod message;
mod rules;

pub use breakdown::{expense_breakdown, ExpenseShare, FinancialSummary};
pub use message::{AdvisoryMessage, MessageKind};
pub use rules::{analyze, EMERGENCY_FUND_MONTHS, RECOMMENDED_SAVINGS_RATE};
