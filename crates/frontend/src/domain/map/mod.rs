pub mod geocode;
pub mod ui;
