use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::expenses::db_types::ExpenseRecord;

/// Aggregated spend for a set of expenses against a budget threshold.
///
/// `per_category` keeps categories in first-occurrence order of the input
/// sequence. Amounts are summed as-is; the per-user currency is a label only
/// and is never normalized across records.
#[derive(Debug, Clone, Serialize)]
pub struct SpendingSummary {
    pub total_spent: BigDecimal,
    pub per_category: Vec<(String, BigDecimal)>,
    pub over_budget: bool,
}

/// Sum a user's expenses overall and per category, and flag spend strictly
/// above `budget`. Spend exactly equal to the budget is not flagged.
pub fn aggregate(expenses: &[ExpenseRecord], budget: &BigDecimal) -> SpendingSummary {
    let mut total_spent = BigDecimal::from(0);
    let mut per_category: Vec<(String, BigDecimal)> = Vec::new();

    for expense in expenses {
        total_spent += &expense.amount;

        match per_category
            .iter_mut()
            .find(|(name, _)| *name == expense.category)
        {
            Some((_, bucket)) => *bucket += &expense.amount,
            None => per_category.push((expense.category.clone(), expense.amount.clone())),
        }
    }

    let over_budget = &total_spent > budget;

    SpendingSummary {
        total_spent,
        per_category,
        over_budget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;
    use uuid::Uuid;

    fn expense(category: &str, amount: &str) -> ExpenseRecord {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        ExpenseRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date,
            category: category.to_string(),
            amount: BigDecimal::from_str(amount).unwrap(),
            description: None,
            created_at: date.and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_expenses() {
        let summary = aggregate(&[], &BigDecimal::from(500));

        assert_eq!(summary.total_spent, BigDecimal::from(0));
        assert!(summary.per_category.is_empty());
        assert!(!summary.over_budget);
    }

    #[test]
    fn test_totals_and_buckets() {
        let expenses = vec![
            expense("food", "30"),
            expense("food", "20"),
            expense("transport", "25"),
        ];

        let summary = aggregate(&expenses, &BigDecimal::from(50));

        assert_eq!(summary.total_spent, BigDecimal::from(75));
        assert_eq!(
            summary.per_category,
            vec![
                ("food".to_string(), BigDecimal::from(50)),
                ("transport".to_string(), BigDecimal::from(25)),
            ]
        );
        assert!(summary.over_budget);
    }

    #[test]
    fn test_budget_boundary_is_strict() {
        let expenses = vec![expense("food", "50")];

        let summary = aggregate(&expenses, &BigDecimal::from(50));

        assert_eq!(summary.total_spent, BigDecimal::from(50));
        assert!(!summary.over_budget);
    }

    #[test]
    fn test_category_order_is_first_occurrence() {
        let expenses = vec![
            expense("transport", "5"),
            expense("food", "10"),
            expense("transport", "15"),
            expense("rent", "700"),
        ];

        let summary = aggregate(&expenses, &BigDecimal::from(1000));

        let order: Vec<&str> = summary
            .per_category
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(order, vec!["transport", "food", "rent"]);
    }

    #[test]
    fn test_negative_amounts_are_summed() {
        // Sign is unconstrained on purpose; refunds entered as negatives
        // reduce the total.
        let expenses = vec![expense("food", "30"), expense("food", "-10.50")];

        let summary = aggregate(&expenses, &BigDecimal::from(15));

        assert_eq!(summary.total_spent, BigDecimal::from_str("19.50").unwrap());
        assert!(summary.over_budget);
    }
}
