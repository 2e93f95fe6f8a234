use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};

use super::expense::Expense;
use crate::category::domain::expense_category::ExpenseCategory;

/// Totals shown on the expenses screen, all in euros.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub today_total: f64,
    /// Total since the trip start, or of everything when no start is set.
    pub trip_total: f64,
    /// Largest spend first.
    pub category_totals: Vec<(ExpenseCategory, f64)>,
}

impl ExpenseSummary {
    pub fn from_expenses(
        expenses: &[Expense],
        today: NaiveDate,
        trip_start: Option<NaiveDateTime>,
    ) -> Self {
        let today_total: f64 = expenses
            .iter()
            .filter(|e| e.created_at.date() == today)
            .map(|e| e.euro_amount)
            .sum();

        let trip_total: f64 = expenses
            .iter()
            .filter(|e| trip_start.map_or(true, |start| e.created_at >= start))
            .map(|e| e.euro_amount)
            .sum();

        let mut totals: HashMap<ExpenseCategory, f64> = HashMap::new();
        for e in expenses {
            *totals.entry(e.category).or_default() += e.euro_amount;
        }
        let mut category_totals: Vec<(ExpenseCategory, f64)> = totals.into_iter().collect();
        category_totals.sort_by(|(ca, a), (cb, b)| b.total_cmp(a).then(ca.cmp(cb)));

        Self {
            today_total,
            trip_total,
            category_totals,
        }
    }
}

/// Groups expenses by calendar day, newest day first and newest expense
/// first within a day.
pub fn group_by_day(expenses: &[Expense]) -> Vec<(NaiveDate, Vec<Expense>)> {
    let mut days: BTreeMap<NaiveDate, Vec<Expense>> = BTreeMap::new();
    for e in expenses {
        days.entry(e.created_at.date()).or_default().push(e.clone());
    }
    days.into_iter()
        .rev()
        .map(|(day, mut items)| {
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            (day, items)
        })
        .collect()
}
