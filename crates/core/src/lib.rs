//! # CareBook Core
//!
//! Domain model and slot scheduling engine for the CareBook appointment service.
//!
//! Everything in this crate is pure and synchronous: no I/O, no global state.
//! Callers resolve configuration (such as the inter-appointment buffer) once
//! and pass it in explicitly.
//!
//! - [`scheduling::generator`]: enumerate fixed-length candidate slots in a working window
//! - [`scheduling::conflict`]: buffered overlap pre-check against booked slots
//! - [`scheduling::buffer`]: resolve the buffer from a raw configuration value
//! - [`scheduling::availability`]: generator and checker composed for availability queries

/// Error taxonomy shared by the storage and HTTP layers
pub mod errors;
/// Time intervals, booked slots and request/response payloads
pub mod models;
/// The slot scheduling engine
pub mod scheduling;

pub use errors::{BookingError, BookingResult};
pub use models::interval::{TimeInterval, Timespan};
pub use scheduling::buffer::{DEFAULT_BUFFER_MINUTES, resolve_buffer_minutes};
pub use scheduling::conflict::{conflicting, has_conflict};
pub use scheduling::generator::generate_slots;
