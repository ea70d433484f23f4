//! Role value object
//!
//! A role is a named permission grant held inside a tenant membership. Any
//! non-blank name is legal as long as it does not contain
//! [`ROLE_SEPARATOR`], which is reserved for the flattened storage form.
//!
//! # Examples
//!
//! ```
//! use domain::Role;
//!
//! let role = Role::new("BILLING").unwrap();
//! assert_eq!(role.name(), "BILLING");
//! assert_eq!(Role::ADMIN.name(), "ADMIN");
//!
//! assert!(Role::new("   ").is_err());
//! assert!(Role::new("READ,WRITE").is_err());
//! ```

use std::{borrow::Cow, collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Separator used when a role set is flattened into a single string
pub const ROLE_SEPARATOR: char = ',';

/// A named role inside a tenant membership
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Tenant administrator
    pub const ADMIN: Self = Self(Cow::Borrowed("ADMIN"));

    /// Regular tenant member
    pub const MEMBER: Self = Self(Cow::Borrowed("MEMBER"));

    /// Create a role, validating the name
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or contains [`ROLE_SEPARATOR`].
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("Role name cannot be empty"));
        }
        if name.contains(ROLE_SEPARATOR) {
            return Err(DomainError::validation(format!(
                "Role name cannot contain '{ROLE_SEPARATOR}': {name}"
            )));
        }

        Ok(Self(Cow::Owned(name)))
    }

    /// Get the role name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Role {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0.into_owned()
    }
}

/// Flatten a role set into its storage form
///
/// Roles are joined with [`ROLE_SEPARATOR`]. The order carries no meaning.
pub fn encode_roles<'a>(roles: impl IntoIterator<Item = &'a Role>) -> String {
    let mut encoded = String::new();
    for role in roles {
        if !encoded.is_empty() {
            encoded.push(ROLE_SEPARATOR);
        }
        encoded.push_str(role.name());
    }
    encoded
}

/// Rebuild a role set from its storage form
///
/// Blank tokens are discarded, so an empty string yields an empty set.
pub fn decode_roles(encoded: &str) -> BTreeSet<Role> {
    encoded
        .split(ROLE_SEPARATOR)
        .filter(|token| !token.trim().is_empty())
        .map(|token| Role(Cow::Owned(token.to_owned())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_roles() {
        assert_eq!(Role::ADMIN.name(), "ADMIN");
        assert_eq!(Role::MEMBER.name(), "MEMBER");
        assert_eq!(Role::new("ADMIN").unwrap(), Role::ADMIN);
    }

    #[test]
    fn blank_role_is_rejected() {
        assert!(Role::new("").is_err());
        assert!(Role::new(" \t").is_err());
    }

    #[test]
    fn separator_is_rejected() {
        let err = Role::new("A,B").unwrap_err();
        assert!(err.to_string().contains("cannot contain"));
    }

    #[test]
    fn any_other_name_is_legal() {
        let role = Role::new("billing-viewer").unwrap();
        assert_eq!(role.to_string(), "billing-viewer");
    }

    #[test]
    fn encode_joins_with_separator() {
        let roles: BTreeSet<Role> = [Role::MEMBER, Role::ADMIN].into_iter().collect();
        assert_eq!(encode_roles(&roles), "ADMIN,MEMBER");
    }

    #[test]
    fn decode_discards_blank_tokens() {
        let roles = decode_roles(",ADMIN,, ,MEMBER,");
        assert_eq!(roles.len(), 2);
        assert!(roles.contains(&Role::ADMIN));
        assert!(roles.contains(&Role::MEMBER));
    }

    #[test]
    fn decode_empty_string_is_empty_set() {
        assert!(decode_roles("").is_empty());
    }

    #[test]
    fn decode_collapses_duplicates() {
        assert_eq!(decode_roles("ADMIN,ADMIN").len(), 1);
    }

    #[test]
    fn serde_validates_name() {
        let role: Role = serde_json::from_str("\"MEMBER\"").unwrap();
        assert_eq!(role, Role::MEMBER);
        assert!(serde_json::from_str::<Role>("\"\"").is_err());
        assert_eq!(serde_json::to_string(&Role::ADMIN).unwrap(), "\"ADMIN\"");
    }
}
