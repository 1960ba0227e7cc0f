//! Summary figures and the proportional expense breakdown

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::FinancialRecord;
use crate::money::round_percent;

/// Headline numbers shown above the advice
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub income: Decimal,
    pub total_expenses: Decimal,
    pub net_cash_flow: Decimal,
    pub savings_rate_percent: Decimal,
}

impl FinancialSummary {
    pub fn from_record(record: &FinancialRecord) -> Self {
        Self {
            income: record.income,
            total_expenses: record.total_expenses(),
            net_cash_flow: record.net_cash_flow(),
            savings_rate_percent: round_percent(record.savings_rate_percent()),
        }
    }
}

/// One slice of the expense chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub category: String,
    pub amount: Decimal,
    /// Share of total expenses, one decimal place
    pub percent: Decimal,
}

/// Non-zero expenses with their share of the total, in canonical order
pub fn expense_breakdown(record: &FinancialRecord) -> Vec<ExpenseShare> {
    let total = record.total_expenses();
    if total <= Decimal::ZERO {
        return Vec::new();
    }

    record
        .expenses
        .iter()
        .filter(|e| e.amount > Decimal::ZERO)
        .map(|e| ExpenseShare {
            category: e.label.clone(),
            amount: e.amount,
            percent: round_percent(share_percent(e.amount, total)),
        })
        .collect()
}

fn share_percent(amount: Decimal, total: Decimal) -> Decimal {
    amount
        .checked_div(total)
        .map_or(Decimal::MAX, |share| share.saturating_mul(Decimal::ONE_HUNDRED))
}
