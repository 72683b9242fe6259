/// Domain error to HTTP response mapping
pub mod error_handling;
