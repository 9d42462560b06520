pub mod dashboard;
pub mod forecasting;
pub mod inventory;
pub mod map;
pub mod notifications;
pub mod orders;
pub mod projects;
pub mod teams;
