//! Application layer - Use cases and orchestration
//!
//! Contains the tenant and user application services, the tenant query
//! service, DTOs and the port definitions implemented by infrastructure
//! adapters.

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use dto::*;
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
