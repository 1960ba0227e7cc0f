//! Rule Engine
//!
//! Four rules evaluated in a fixed order. The order is part of the output
//! contract: callers render messages exactly as returned.
//!
//! 1. Budget balance (always one message)
//! 2. Largest expense category (skipped when there are no expenses)
//! 3. Savings goal (only when a goal is set)
//! 4. Emergency fund (always one message)

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::message::AdvisoryMessage;
use crate::model::{FinancialRecord, SavingsGoal};
use crate::money::{currency, percent};

/// Savings rate (percent of income) at or above which budgeting is on track
pub const RECOMMENDED_SAVINGS_RATE: Decimal = dec!(20);

/// Months of income the emergency fund should cover
// Message text speaks of expenses, but the target is computed from income.
pub const EMERGENCY_FUND_MONTHS: Decimal = dec!(3);

/// Analyze a record and return observations in rule order
///
/// Pure and total: arithmetic saturates at the `Decimal` range, so even a
/// record that never went through `validate` cannot make it panic.
pub fn analyze(record: &FinancialRecord) -> Vec<AdvisoryMessage> {
    let net_cash = record.net_cash_flow();

    let mut messages = Vec::with_capacity(4);
    messages.push(budget_balance(record, net_cash));
    messages.extend(largest_expense(record));
    messages.extend(record.goal.as_ref().map(|goal| savings_goal(record.savings, goal, net_cash)));
    messages.push(emergency_fund(record));
    messages
}

fn budget_balance(record: &FinancialRecord, net_cash: Decimal) -> AdvisoryMessage {
    if net_cash < Decimal::ZERO {
        return AdvisoryMessage::warning(format!(
            "🚨 You're spending {} more than you earn each month. \
             Focus on reducing expenses immediately.",
            currency(net_cash.abs())
        ));
    }

    let rate = record.savings_rate_percent();
    if rate < RECOMMENDED_SAVINGS_RATE {
        AdvisoryMessage::tip(format!(
            "💡 Your savings rate is {}% - below the recommended 20%. \
             Try to increase savings by reducing discretionary spending.",
            percent(rate)
        ))
    } else {
        AdvisoryMessage::success(format!(
            "✅ Great job! Your savings rate is {}% - meeting the recommended 20%.",
            percent(rate)
        ))
    }
}

fn largest_expense(record: &FinancialRecord) -> Option<AdvisoryMessage> {
    let mut expenses = record.expenses.iter();
    let first = expenses.next()?;
    // Strict comparison: the earliest category wins a tie
    let largest = expenses.fold(first, |best, e| if e.amount > best.amount { e } else { best });

    Some(AdvisoryMessage::tip(format!(
        "🔍 Your largest expense is '{}' ({}). Review this category for potential savings.",
        largest.label,
        currency(largest.amount)
    )))
}

fn savings_goal(savings: Decimal, goal: &SavingsGoal, net_cash: Decimal) -> AdvisoryMessage {
    if savings >= goal.target {
        return AdvisoryMessage::success(format!(
            "🎉 Congratulations! You've already reached your savings goal of {}.",
            currency(goal.target)
        ));
    }

    let needed = goal.target.saturating_sub(savings);
    let monthly_needed = if goal.timeline_months > 0 {
        needed / Decimal::from(goal.timeline_months)
    } else {
        needed
    };

    if monthly_needed <= net_cash {
        AdvisoryMessage::success(format!(
            "⏱️ You're on track to reach your goal! Save {}/month to meet {} target in {} months.",
            currency(monthly_needed),
            currency(goal.target),
            goal.timeline_months
        ))
    } else {
        let shortfall = monthly_needed.saturating_sub(net_cash);
        AdvisoryMessage::warning(format!(
            "⚠️ To reach your {} goal in {} months, you need to save {}/month. \
             Current deficit: {}/month.",
            currency(goal.target),
            goal.timeline_months,
            currency(monthly_needed),
            currency(shortfall)
        ))
    }
}

fn emergency_fund(record: &FinancialRecord) -> AdvisoryMessage {
    let emergency_target = record.income.saturating_mul(EMERGENCY_FUND_MONTHS);

    if record.savings < emergency_target {
        AdvisoryMessage::tip(format!(
            "🛡️ Consider building an emergency fund (3-6 months of expenses). \
             Aim for at least {} based on your income.",
            currency(emergency_target)
        ))
    } else {
        AdvisoryMessage::success(
            "🛡️✅ Great! Your savings cover at least 3 months of income (emergency fund minimum).",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::MessageKind;

    /// Record with a single expense so net cash flow is `income - spent`
    fn record(income: Decimal, spent: Decimal, savings: Decimal) -> FinancialRecord {
        FinancialRecord::new(income, savings).with_expense("Rent/Mortgage", spent)
    }

    fn kinds(messages: &[AdvisoryMessage]) -> Vec<MessageKind> {
        messages.iter().map(|m| m.kind).collect()
    }

    #[test]
    fn test_deficit_warning_carries_magnitude() {
        let messages = analyze(&record(dec!(1000), dec!(1234.567), dec!(0)));

        let warnings: Vec<_> = messages[..1]
            .iter()
            .filter(|m| m.kind == MessageKind::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].text.contains("₹234.57"));
    }

    #[test]
    fn test_savings_rate_below_recommendation_is_tip() {
        // 19.9% savings rate
        let messages = analyze(&record(dec!(1000), dec!(801), dec!(0)));
        assert_eq!(messages[0].kind, MessageKind::Tip);
        assert!(messages[0].text.contains("19.9%"));
    }

    #[test]
    fn test_savings_rate_at_recommendation_is_success() {
        let messages = analyze(&record(dec!(1000), dec!(800), dec!(0)));
        assert_eq!(messages[0].kind, MessageKind::Success);
        assert!(messages[0].text.contains("20.0%"));
    }

    #[test]
    fn test_zero_income_zero_spend_is_tip() {
        let messages = analyze(&FinancialRecord::new(Decimal::ZERO, Decimal::ZERO));
        assert_eq!(messages[0].kind, MessageKind::Tip);
        assert!(messages[0].text.contains("0.0%"));
    }

    #[test]
    fn test_largest_category_first_wins_ties() {
        let record = FinancialRecord::new(dec!(1000), dec!(0))
            .with_expense("A", dec!(100))
            .with_expense("B", dec!(100));

        let messages = analyze(&record);
        assert_eq!(messages[1].kind, MessageKind::Tip);
        assert!(messages[1].text.contains("'A' (₹100.00)"));
    }

    #[test]
    fn test_largest_category_picks_maximum() {
        let record = FinancialRecord::new(dec!(30000), dec!(0))
            .with_expense("Groceries", dec!(4000))
            .with_expense("Rent/Mortgage", dec!(12000))
            .with_expense("Shopping", dec!(12000));

        let messages = analyze(&record);
        assert!(messages[1].text.contains("'Rent/Mortgage' (₹12000.00)"));
    }

    #[test]
    fn test_no_expenses_skips_largest_category() {
        let messages = analyze(&FinancialRecord::new(dec!(1000), dec!(0)));
        assert_eq!(messages.len(), 2);
        assert_eq!(kinds(&messages), vec![MessageKind::Success, MessageKind::Tip]);
    }

    #[test]
    fn test_goal_on_track() {
        // net cash flow 2000
        let record = record(dec!(3000), dec!(1000), dec!(5000)).with_goal(dec!(10000), 12);

        let messages = analyze(&record);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].kind, MessageKind::Success);
        assert!(messages[2].text.contains("416.67"));
        assert!(messages[2].text.contains("12 months"));
    }

    #[test]
    fn test_goal_shortfall() {
        // net cash flow 100
        let record = record(dec!(1100), dec!(1000), dec!(5000)).with_goal(dec!(10000), 12);

        let messages = analyze(&record);
        assert_eq!(messages[2].kind, MessageKind::Warning);
        assert!(messages[2].text.contains("₹416.67/month"));
        assert!(messages[2].text.contains("Current deficit: ₹316.67/month"));
    }

    #[test]
    fn test_goal_already_reached() {
        let record = record(dec!(1000), dec!(500), dec!(10000)).with_goal(dec!(10000), 12);

        let messages = analyze(&record);
        assert_eq!(messages[2].kind, MessageKind::Success);
        assert!(messages[2].text.contains("already reached"));
        assert!(messages[2].text.contains("₹10000.00"));
    }

    #[test]
    fn test_goal_zero_timeline_uses_full_amount() {
        let record = record(dec!(1000), dec!(900), dec!(0)).with_goal(dec!(500), 0);

        let messages = analyze(&record);
        assert_eq!(messages[2].kind, MessageKind::Warning);
        assert!(messages[2].text.contains("₹500.00/month"));
        assert!(messages[2].text.contains("₹400.00/month"));
    }

    #[test]
    fn test_emergency_fund_boundary() {
        let short = analyze(&record(dec!(30000), dec!(0), dec!(5000)));
        let last = short.last().unwrap();
        assert_eq!(last.kind, MessageKind::Tip);
        assert!(last.text.contains("₹90000.00"));

        let exact = analyze(&record(dec!(30000), dec!(0), dec!(90000)));
        assert_eq!(exact.last().unwrap().kind, MessageKind::Success);
    }

    #[test]
    fn test_rule_order_with_goal() {
        let record = record(dec!(30000), dec!(27000), dec!(5000)).with_goal(dec!(10000), 12);
        assert_eq!(
            kinds(&analyze(&record)),
            vec![MessageKind::Tip, MessageKind::Tip, MessageKind::Success, MessageKind::Tip]
        );
    }

    #[test]
    fn test_extreme_income_saturates_emergency_target() {
        let messages = analyze(&FinancialRecord::new(Decimal::MAX, Decimal::ZERO));

        assert_eq!(kinds(&messages), vec![MessageKind::Success, MessageKind::Tip]);
        assert!(messages[1].text.contains("₹7922816251426433759354395033"));
    }

    #[test]
    fn test_extreme_expenses_and_goal_do_not_overflow() {
        let record = FinancialRecord::new(Decimal::ZERO, Decimal::MAX)
            .with_expense("Rent/Mortgage", Decimal::MAX)
            .with_expense("Other", Decimal::MAX)
            .with_goal(Decimal::MAX, 1);
        let messages = analyze(&record);
        assert_eq!(messages[0].kind, MessageKind::Warning);
        assert_eq!(messages[2].kind, MessageKind::Success);

        let behind = FinancialRecord::new(Decimal::ZERO, Decimal::MIN)
            .with_expense("Other", Decimal::MAX)
            .with_goal(Decimal::MAX, 1);
        let messages = analyze(&behind);
        assert_eq!(messages[2].kind, MessageKind::Warning);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let record = record(dec!(30000), dec!(31000), dec!(5000)).with_goal(dec!(10000), 7);
        assert_eq!(analyze(&record), analyze(&record));
    }
}
