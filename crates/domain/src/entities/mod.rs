//! Domain entities - Aggregates with identity and lifecycle

mod membership;
mod tenant;
mod user;

pub use membership::TenantMembership;
pub use tenant::{Tenant, TenantStatus};
pub use user::User;
