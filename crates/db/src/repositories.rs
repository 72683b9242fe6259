pub mod booked_slot;
pub mod professional;
pub mod specialty;
