//! Domain layer for the IAM service
//!
//! Contains the Tenant and User aggregates, their value objects, the
//! tenant-registered event and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod events;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use events::TenantRegisteredEvent;
pub use value_objects::*;
