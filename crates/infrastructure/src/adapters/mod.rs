//! Infrastructure adapters
//!
//! Adapters connect application ports to external systems.

mod keycloak_identity_adapter;

pub use keycloak_identity_adapter::KeycloakIdentityAdapter;
