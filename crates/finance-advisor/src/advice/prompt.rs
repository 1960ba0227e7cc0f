//! Advice prompt

use crate::model::FinancialRecord;
use crate::money::currency;

/// Render the single user prompt sent to the provider
///
/// Expenses appear in canonical order; the goal line only when a goal is set.
pub fn build_advice_prompt(record: &FinancialRecord) -> String {
    let expenses = record
        .expenses
        .iter()
        .map(|e| format!("{} ({})", e.label, currency(e.amount)))
        .collect::<Vec<_>>()
        .join(", ");

    let goal_line = record
        .goal
        .as_ref()
        .map(|g| {
            format!(
                "- Savings goal: {} in {} months\n",
                currency(g.target),
                g.timeline_months
            )
        })
        .unwrap_or_default();

    format!(
        "As a friendly financial advisor, provide one concise, actionable tip \
         based on these details:\n\
         - Monthly income: {income}\n\
         - Main expenses: {expenses}\n\
         - Current savings: {savings}\n\
         {goal_line}\n\
         Focus on one practical budgeting or saving strategy. \
         Use plain language and avoid financial jargon. \
         Keep it to 1-2 sentences maximum. Start with an emoji.",
        income = currency(record.income),
        savings = currency(record.savings),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_prompt_lists_expenses_in_order() {
        let record = FinancialRecord::new(dec!(30000), dec!(5000))
            .with_expense("Rent/Mortgage", dec!(12000))
            .with_expense("Dining Out", dec!(2000.5));

        let prompt = build_advice_prompt(&record);
        assert!(prompt.contains("- Monthly income: ₹30000.00\n"));
        assert!(prompt.contains("- Main expenses: Rent/Mortgage (₹12000.00), Dining Out (₹2000.50)\n"));
        assert!(prompt.contains("- Current savings: ₹5000.00\n"));
        assert!(prompt.contains("Start with an emoji."));
        assert!(prompt.contains("avoid financial jargon"));
        assert!(!prompt.contains("Savings goal"));
    }

    #[test]
    fn test_prompt_includes_goal_when_set() {
        let record = FinancialRecord::new(dec!(30000), dec!(5000)).with_goal(dec!(10000), 12);

        let prompt = build_advice_prompt(&record);
        assert!(prompt.contains("- Savings goal: ₹10000.00 in 12 months\n"));
    }
}
