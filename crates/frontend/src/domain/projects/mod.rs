pub mod actuals;
pub mod api;
pub mod ui;
