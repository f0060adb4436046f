//! Application layer - Use cases and orchestration
//!
//! Contains the dashboard's services (forecast aggregation, trend shaping,
//! insights, translation, orchestration) and the port definitions its
//! external collaborators implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
