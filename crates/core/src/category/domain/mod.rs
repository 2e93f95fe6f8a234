pub mod category_classifier;
pub mod category_suggestion;
pub mod expense_category;
pub mod nearby_place;
