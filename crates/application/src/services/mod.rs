//! Application services - Use case implementations

mod tenant_query_service;
mod tenant_service;
mod user_service;

pub use tenant_query_service::TenantQueryService;
pub use tenant_service::TenantApplicationService;
pub use user_service::UserApplicationService;
