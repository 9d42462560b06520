pub mod metrics;
pub mod months;
pub mod numeric;
