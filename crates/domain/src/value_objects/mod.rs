//! Value Objects - Immutable, identity-less domain primitives

mod email_address;
mod role;
mod tenant_id;
mod user_id;

pub use email_address::EmailAddress;
pub use role::{ROLE_SEPARATOR, Role, decode_roles, encode_roles};
pub use tenant_id::TenantId;
pub use user_id::UserId;
