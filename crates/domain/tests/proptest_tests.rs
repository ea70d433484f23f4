//! Property-based tests for domain value objects and aggregates
//!
//! These tests use proptest to verify invariants across many random inputs.

use std::collections::{BTreeSet, HashMap};

use domain::{
    EmailAddress, Role, TenantId, User, UserId,
    value_objects::{decode_roles, encode_roles},
};
use proptest::prelude::*;

// ============================================================================
// EmailAddress Property Tests
// ============================================================================

mod email_tests {
    use super::*;

    proptest! {
        #[test]
        fn matching_emails_are_kept_verbatim(
            local in "[A-Za-z0-9+_.-]{1,16}",
            domain in "[A-Za-z0-9-]{1,10}",
            tld in "[A-Za-z]{2,6}"
        ) {
            let input = format!("{local}@{domain}.{tld}");
            let email = EmailAddress::new(&input);
            prop_assert!(email.is_ok());
            let email = email.unwrap();
            prop_assert_eq!(email.as_str(), input.as_str());
        }

        #[test]
        fn strings_without_at_are_rejected(s in "[a-zA-Z0-9.]+") {
            prop_assert!(EmailAddress::new(&s).is_err());
        }

        #[test]
        fn single_letter_tld_is_rejected(
            local in "[a-z]{1,8}",
            domain in "[a-z]{1,8}",
            tld in "[a-z]"
        ) {
            let input = format!("{local}@{domain}.{tld}");
            prop_assert!(EmailAddress::new(&input).is_err());
        }
    }
}

// ============================================================================
// Role Property Tests
// ============================================================================

mod role_tests {
    use super::*;

    fn role_name() -> impl Strategy<Value = String> {
        "[A-Za-z_][A-Za-z0-9_ -]{0,12}"
    }

    proptest! {
        #[test]
        fn names_without_separator_are_accepted(name in role_name()) {
            let role = Role::new(name.clone()).unwrap();
            prop_assert_eq!(role.name(), name.as_str());
        }

        #[test]
        fn whitespace_only_names_are_rejected(name in "[ \t]{0,8}") {
            prop_assert!(Role::new(name).is_err());
        }

        #[test]
        fn codec_preserves_role_sets(names in prop::collection::btree_set(role_name(), 0..6)) {
            let roles: BTreeSet<Role> = names
                .into_iter()
                .map(|n| Role::new(n).unwrap())
                .collect();

            let decoded = decode_roles(&encode_roles(&roles));
            prop_assert_eq!(decoded, roles);
        }
    }
}

// ============================================================================
// User Aggregate Property Tests
// ============================================================================

mod user_tests {
    use super::*;

    proptest! {
        #[test]
        fn role_sets_match_distinct_grants(
            grants in prop::collection::vec((0usize..3, "[A-Z]{1,3}"), 0..20)
        ) {
            let tenants = [TenantId::new(), TenantId::new(), TenantId::new()];
            let email = EmailAddress::new("prop@example.com").unwrap();
            let mut user = User::register(UserId::new(), "ext-prop", email);
            let mut expected: HashMap<TenantId, BTreeSet<Role>> = HashMap::new();

            for (idx, name) in grants {
                let role = Role::new(name).unwrap();
                user.add_to_tenant(tenants[idx], role.clone());
                expected.entry(tenants[idx]).or_default().insert(role);
            }

            for tenant in &tenants {
                let want = expected.get(tenant).cloned().unwrap_or_default();
                prop_assert_eq!(user.roles_for_tenant(tenant), want);
            }
            prop_assert_eq!(user.memberships().count(), expected.len());
        }
    }
}
