//! # finance-advisor
//!
//! Household finance analysis: a deterministic rule engine over a single
//! month's income, expenses and savings, plus one short tip from an LLM.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────┐     ┌────────────────────┐
//! │ FinancialRecord  │──┬─▶│ analysis::analyze  │──▶ Vec<AdvisoryMessage>
//! │ income, expenses │  │  └────────────────────┘
//! │ savings, goal?   │  │  ┌────────────────────┐
//! └──────────────────┘  └─▶│ AdviceRequester    │──▶ Advice (text or fallback)
//!                          └────────────────────┘
//! ```
//!
//! ## Example: ₹30,000 income
//!
//! ```text
//! Rent/Mortgage  ████████████████████████  ₹12,000 (44.4%)
//! Groceries      ████████                  ₹4,000  (14.8%)
//! Transportation ██████                    ₹3,000  (11.1%)
//! ...
//! Net cash flow: ₹3,000  →  savings rate 10.0%  →  Tip
//! ```
//!
//! The rule engine never fails and never touches the network. The advice
//! requester never fails either: provider errors become a fixed fallback tip
//! plus a diagnostic for the operator.

pub mod advice;
pub mod analysis;
pub mod error;
pub mod model;
pub mod money;
pub mod report;

pub use advice::{Advice, AdviceRequester, FALLBACK_TIP};
pub use analysis::{analyze, AdvisoryMessage, ExpenseShare, FinancialSummary, MessageKind};
pub use error::{AdvisorError, Result};
pub use model::{ExpenseCategory, FinancialRecord, SavingsGoal, DEFAULT_CATEGORIES, MAX_AMOUNT};
pub use report::{AnalysisReport, Insights};
