//! Domain Models
//!
//! One month's household finances as submitted by the user.
//! Uses `rust_decimal` for all monetary values.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Largest amount accepted for any single figure (one trillion)
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Category labels offered by the input form, in canonical order
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Rent/Mortgage",
    "Utilities",
    "Groceries",
    "Transportation",
    "Dining Out",
    "Entertainment",
    "Shopping",
    "Other",
];

/// One labelled monthly expense
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    #[serde(rename = "category")]
    pub label: String,

    pub amount: Decimal,
}

impl ExpenseCategory {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Savings target to reach within a number of months
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub target: Decimal,
    pub timeline_months: u32,
}

/// A single submission: monthly income, ordered expenses, savings, goal
///
/// Expenses are an ordered sequence, not a map. Their order is the display
/// order and decides ties when looking for the largest category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub income: Decimal,

    #[serde(default)]
    pub expenses: Vec<ExpenseCategory>,

    pub savings: Decimal,

    #[serde(default)]
    pub goal: Option<SavingsGoal>,
}

impl FinancialRecord {
    pub const fn new(income: Decimal, savings: Decimal) -> Self {
        Self {
            income,
            expenses: Vec::new(),
            savings,
            goal: None,
        }
    }

    /// Append an expense after the existing ones
    #[must_use]
    pub fn with_expense(mut self, label: impl Into<String>, amount: Decimal) -> Self {
        self.expenses.push(ExpenseCategory::new(label, amount));
        self
    }

    #[must_use]
    pub fn with_goal(mut self, target: Decimal, timeline_months: u32) -> Self {
        self.goal = Some(SavingsGoal {
            target,
            timeline_months,
        });
        self
    }

    /// Sum of all expense amounts, saturating at the `Decimal` range
    pub fn total_expenses(&self) -> Decimal {
        self.expenses
            .iter()
            .fold(Decimal::ZERO, |total, e| total.saturating_add(e.amount))
    }

    /// Income minus total expenses (negative when overspending)
    pub fn net_cash_flow(&self) -> Decimal {
        self.income.saturating_sub(self.total_expenses())
    }

    /// Net cash flow as a fraction of income, zero when there is no income
    pub fn savings_rate(&self) -> Decimal {
        if self.income.is_zero() {
            return Decimal::ZERO;
        }
        let net = self.net_cash_flow();
        net.checked_div(self.income).unwrap_or_else(|| {
            if net.is_sign_negative() == self.income.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
    }

    pub fn savings_rate_percent(&self) -> Decimal {
        self.savings_rate().saturating_mul(Decimal::ONE_HUNDRED)
    }

    /// Boundary checks the input form is expected to enforce
    pub fn validate(&self) -> Result<()> {
        within_bounds("income", self.income)?;
        within_bounds("savings", self.savings)?;

        for (i, expense) in self.expenses.iter().enumerate() {
            if expense.label.trim().is_empty() {
                return Err(AdvisorError::EmptyCategory(i));
            }
            within_bounds(&expense.label, expense.amount)?;
        }

        if let Some(goal) = &self.goal {
            within_bounds("goal target", goal.target)?;
            if goal.target <= Decimal::ZERO {
                return Err(AdvisorError::InvalidGoal(format!(
                    "target must be positive (got {})",
                    goal.target
                )));
            }
            if goal.timeline_months == 0 {
                return Err(AdvisorError::InvalidGoal(
                    "timeline must be at least one month".into(),
                ));
            }
        }

        Ok(())
    }
}

fn within_bounds(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(AdvisorError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    if value > MAX_AMOUNT {
        return Err(AdvisorError::AmountTooLarge {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
