use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::category::domain::expense_category::ExpenseCategory;

/// A recorded expense as handed over by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub created_at: NaiveDateTime,
    pub euro_amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub memo: String,
}

impl Expense {
    pub fn converted_amount(&self, rate: f64) -> f64 {
        self.euro_amount * rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn test_converted_amount_uses_rate() {
        let expense = Expense {
            created_at: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            euro_amount: 12.5,
            category: ExpenseCategory::Food,
            memo: String::new(),
        };
        assert_relative_eq!(expense.converted_amount(160.0), 2000.0);
    }

    #[test]
    fn test_deserializes_without_memo() {
        let json = r#"{"created_at": "2024-06-01T08:15:00", "euro_amount": 3.2, "category": "transport"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, ExpenseCategory::Transport);
        assert!(expense.memo.is_empty());
    }
}
