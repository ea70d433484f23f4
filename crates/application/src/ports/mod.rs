//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod event_sink;
mod identity_provider_port;
mod tenant_read_model;
mod tenant_repository;
mod user_repository;

pub use event_sink::EventSink;
#[cfg(test)]
pub use event_sink::MockEventSink;
pub use identity_provider_port::IdentityProviderPort;
#[cfg(test)]
pub use identity_provider_port::MockIdentityProviderPort;
#[cfg(test)]
pub use tenant_read_model::MockTenantReadModelPort;
pub use tenant_read_model::{MembershipRow, TenantReadModelPort, TenantRow};
#[cfg(test)]
pub use tenant_repository::MockTenantRepository;
pub use tenant_repository::TenantRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
