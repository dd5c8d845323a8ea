/// Records submitted to the Symphony API
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Symphony API client
pub mod symphony;

pub use symphony::{ApiResponse, Endpoint, SymphonyClient};
