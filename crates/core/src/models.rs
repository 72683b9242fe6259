pub mod booking;
pub mod clinic;
pub mod interval;
