//! User Service - Registration through the identity provider and tenant
//! invitations

use std::sync::Arc;

use domain::{EmailAddress, Role, TenantId, User, UserId};
use tracing::{error, info, instrument, warn};

use crate::{
    dto::{InviteUserCommand, RegisterUserCommand, UserResponse},
    error::ApplicationError,
    ports::{IdentityProviderPort, TenantRepository, UserRepository},
};

/// Service for user use cases
pub struct UserApplicationService {
    users: Arc<dyn UserRepository>,
    tenants: Arc<dyn TenantRepository>,
    identity_provider: Arc<dyn IdentityProviderPort>,
}

impl std::fmt::Debug for UserApplicationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserApplicationService").finish_non_exhaustive()
    }
}

impl UserApplicationService {
    /// Create a new user service
    pub fn new(
        users: Arc<dyn UserRepository>,
        tenants: Arc<dyn TenantRepository>,
        identity_provider: Arc<dyn IdentityProviderPort>,
    ) -> Self {
        Self {
            users,
            tenants,
            identity_provider,
        }
    }

    /// Register a user at the identity provider, then store it locally
    ///
    /// The provider is only called once the email is known to be free. If
    /// the local save fails after the provider accepted the account, the
    /// provider keeps an account without a local user; this is logged with
    /// the external reference and the save error is returned.
    #[instrument(skip(self, command), fields(username = %command.username))]
    pub async fn register_user(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserResponse, ApplicationError> {
        let email = EmailAddress::new(command.email)?;

        if self.users.find_by_email(&email).await?.is_some() {
            warn!("Email already registered");
            return Err(ApplicationError::Conflict(format!(
                "Email already in use: {email}"
            )));
        }

        let external_id = self
            .identity_provider
            .register_user(&command.username, &email, &command.password)
            .await?;

        let user = User::register(UserId::new(), external_id, email);
        if let Err(e) = self.users.save(&user).await {
            error!(
                external_id = %user.external_id(),
                error = %e,
                "Identity provider account created but user could not be saved"
            );
            return Err(e);
        }

        info!(user_id = %user.id(), external_id = %user.external_id(), "User registered");
        Ok(UserResponse::from(&user))
    }

    /// Grant a role in a tenant to an existing user
    ///
    /// Granting a role the user already holds succeeds without changes to
    /// the role set.
    #[instrument(skip(self, command), fields(tenant_id = %command.tenant_id, role = %command.role))]
    pub async fn invite_user_to_tenant(
        &self,
        command: InviteUserCommand,
    ) -> Result<(), ApplicationError> {
        let tenant_id = TenantId::parse(&command.tenant_id)?;
        if self.tenants.find_by_id(&tenant_id).await?.is_none() {
            warn!("Invitation to unknown tenant");
            return Err(ApplicationError::NotFound(format!(
                "Tenant not found: {tenant_id}"
            )));
        }

        let email = EmailAddress::new(command.email)?;
        let Some(mut user) = self.users.find_by_email(&email).await? else {
            warn!("Invitation for unknown user");
            return Err(ApplicationError::NotFound(format!(
                "User not found: {email}"
            )));
        };

        let role = Role::new(command.role)?;
        user.add_to_tenant(tenant_id, role);
        self.users.save(&user).await?;

        info!(user_id = %user.id(), "User invited to tenant");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::Tenant;
    use secrecy::{ExposeSecret, SecretString};

    use super::*;
    use crate::ports::{MockIdentityProviderPort, MockTenantRepository, MockUserRepository};

    fn register_command(email: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            username: "john".to_string(),
            email: email.to_string(),
            password: SecretString::from("s3cret"),
        }
    }

    fn existing_user() -> User {
        User::register(
            UserId::new(),
            "ext-1",
            EmailAddress::new("john@example.com").unwrap(),
        )
    }

    fn service(
        users: MockUserRepository,
        tenants: MockTenantRepository,
        provider: MockIdentityProviderPort,
    ) -> UserApplicationService {
        UserApplicationService::new(Arc::new(users), Arc::new(tenants), Arc::new(provider))
    }

    #[tokio::test]
    async fn register_user_keeps_provider_reference() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_save()
            .withf(|user| user.external_id() == "ext-999" && user.memberships().count() == 0)
            .times(1)
            .returning(|_| Ok(()));

        let mut provider = MockIdentityProviderPort::new();
        provider
            .expect_register_user()
            .withf(|username, email, credential| {
                username == "john"
                    && email.as_str() == "john@example.com"
                    && credential.expose_secret() == "s3cret"
            })
            .times(1)
            .returning(|_, _, _| Ok("ext-999".to_string()));

        let service = service(users, MockTenantRepository::new(), provider);
        let response = service
            .register_user(register_command("john@example.com"))
            .await
            .unwrap();

        assert_eq!(response.external_id, "ext-999");
        assert_eq!(response.email, "john@example.com");
    }

    #[tokio::test]
    async fn duplicate_email_never_reaches_provider() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(existing_user())));
        users.expect_save().never();

        let mut provider = MockIdentityProviderPort::new();
        provider.expect_register_user().never();

        let service = service(users, MockTenantRepository::new(), provider);
        let err = service
            .register_user(register_command("john@example.com"))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(
            err.to_string(),
            "Conflict: Email already in use: john@example.com"
        );
    }

    #[tokio::test]
    async fn malformed_email_fails_before_lookup() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().never();
        let mut provider = MockIdentityProviderPort::new();
        provider.expect_register_user().never();

        let service = service(users, MockTenantRepository::new(), provider);
        let err = service
            .register_user(register_command("not-an-email"))
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn provider_failure_persists_nothing() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_save().never();

        let mut provider = MockIdentityProviderPort::new();
        provider
            .expect_register_user()
            .returning(|_, _, _| Err(ApplicationError::ExternalProvider("HTTP 409".into())));

        let service = service(users, MockTenantRepository::new(), provider);
        let err = service
            .register_user(register_command("john@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ExternalProvider(msg) if msg == "HTTP 409"));
    }

    #[tokio::test]
    async fn save_failure_after_provider_is_returned() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_save()
            .returning(|_| Err(ApplicationError::Conflict("users.email".into())));

        let mut provider = MockIdentityProviderPort::new();
        provider
            .expect_register_user()
            .times(1)
            .returning(|_, _, _| Ok("ext-orphan".to_string()));

        let service = service(users, MockTenantRepository::new(), provider);
        let err = service
            .register_user(register_command("john@example.com"))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
    }

    fn invite(tenant_id: &str, email: &str, role: &str) -> InviteUserCommand {
        InviteUserCommand {
            tenant_id: tenant_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn invite_adds_role_and_saves() {
        let tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();
        let tenant_id = tenant.id();

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(existing_user())));
        users
            .expect_save()
            .withf(move |user| {
                let roles = user.roles_for_tenant(&tenant_id);
                roles.len() == 1 && roles.contains(&Role::ADMIN)
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = service(users, tenants, MockIdentityProviderPort::new());
        service
            .invite_user_to_tenant(invite(
                &tenant_id.to_string(),
                "john@example.com",
                "ADMIN",
            ))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn invite_to_unknown_tenant_is_not_found() {
        let mut tenants = MockTenantRepository::new();
        tenants.expect_find_by_id().returning(|_| Ok(None));

        let mut users = MockUserRepository::new();
        users.expect_save().never();

        let service = service(users, tenants, MockIdentityProviderPort::new());
        let err = service
            .invite_user_to_tenant(invite(
                &TenantId::new().to_string(),
                "john@example.com",
                "ADMIN",
            ))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn invite_unknown_email_is_not_found() {
        let tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();
        let tenant_id = tenant.id();

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));

        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_save().never();

        let service = service(users, tenants, MockIdentityProviderPort::new());
        let err = service
            .invite_user_to_tenant(invite(
                &tenant_id.to_string(),
                "ghost@example.com",
                "ADMIN",
            ))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("ghost@example.com"));
    }

    #[tokio::test]
    async fn invite_with_malformed_tenant_id_is_a_validation_error() {
        let mut tenants = MockTenantRepository::new();
        tenants.expect_find_by_id().never();

        let service = service(
            MockUserRepository::new(),
            tenants,
            MockIdentityProviderPort::new(),
        );
        let err = service
            .invite_user_to_tenant(invite("not-a-uuid", "john@example.com", "ADMIN"))
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn invite_with_blank_role_does_not_save() {
        let tenant = Tenant::register(TenantId::new(), "Acme Corp").unwrap();
        let tenant_id = tenant.id();

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(existing_user())));
        users.expect_save().never();

        let service = service(users, tenants, MockIdentityProviderPort::new());
        let err = service
            .invite_user_to_tenant(invite(&tenant_id.to_string(), "john@example.com", " "))
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }
}
