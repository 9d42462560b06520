pub mod forecast;
pub mod inventory;
pub mod material_actual;
pub mod notification;
pub mod order;
pub mod project;
pub mod team;
