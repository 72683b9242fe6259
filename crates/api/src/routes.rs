pub mod availability;
pub mod booking;
pub mod clinic;
pub mod health;
