use anyhow::{Result, anyhow};
use csv::Writer;

use crate::expenses::db_types::ExpenseRecord;

/// Render expenses as CSV bytes, one row per record in the given order.
///
/// The writer quotes any field containing the delimiter, a quote, or a
/// newline, so free-text descriptions survive a round trip.
pub fn to_csv(expenses: &[ExpenseRecord]) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(["Date", "Category", "Amount", "Description"])?;

    for expense in expenses {
        writer.write_record([
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.clone(),
            expense.amount.to_string(),
            expense.description.clone().unwrap_or_default(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV output: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use std::str::FromStr;
    use uuid::Uuid;

    fn expense(date: (i32, u32, u32), category: &str, amount: &str, description: Option<&str>) -> ExpenseRecord {
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        ExpenseRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date,
            category: category.to_string(),
            amount: BigDecimal::from_str(amount).unwrap(),
            description: description.map(str::to_string),
            created_at: date.and_hms_opt(9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_header_only_for_empty_input() {
        let bytes = to_csv(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Date,Category,Amount,Description\n"
        );
    }

    #[test]
    fn test_rows_follow_input_order() {
        let expenses = vec![
            expense((2025, 3, 1), "food", "12.40", Some("lunch")),
            expense((2025, 2, 1), "transport", "3", None),
        ];

        let text = String::from_utf8(to_csv(&expenses).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Date,Category,Amount,Description");
        assert_eq!(lines[1], "2025-03-01,food,12.40,lunch");
        assert_eq!(lines[2], "2025-02-01,transport,3,");
    }

    #[test]
    fn test_round_trip_with_comma_in_description() {
        let expenses = vec![
            expense((2025, 1, 5), "food", "8.99", Some("coffee, croissant")),
            expense((2025, 1, 6), "books", "24", Some("said \"keep the change\"")),
        ];

        let bytes = to_csv(&expenses).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();

        assert_eq!(
            rows,
            vec![
                vec!["2025-01-05", "food", "8.99", "coffee, croissant"],
                vec!["2025-01-06", "books", "24", "said \"keep the change\""],
            ]
        );
    }
}
