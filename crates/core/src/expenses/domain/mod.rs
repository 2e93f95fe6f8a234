pub mod expense;
pub mod expense_summary;
