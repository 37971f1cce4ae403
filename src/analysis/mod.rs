pub mod copper;
pub mod resilience;
