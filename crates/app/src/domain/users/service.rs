//! Users service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::users::{
    data::NewUser, errors::UsersServiceError, records::UserRecord, records::UserUuid,
    repository::PgUsersRepository,
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgUsersRepository::new(pool),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        self.repository.create_user(user).await.map_err(Into::into)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        self.repository.get_user(user).await.map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// User persistence operations.
pub trait UsersService: Send + Sync {
    /// Creates a new user.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieves a user by UUID.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_user_returns_persisted_record() -> TestResult {
        let ctx = TestContext::new().await;
        let svc = PgUsersService::new(ctx.db.pool().clone());

        let uuid = UserUuid::new();

        let user = svc
            .create_user(NewUser {
                uuid,
                email: "ops@example.com".to_string(),
                workspace_uuid: Some(ctx.workspace_uuid),
                superuser: false,
            })
            .await?;

        assert_eq!(user.uuid, uuid);
        assert_eq!(user.email, "ops@example.com");
        assert_eq!(user.workspace_uuid, Some(ctx.workspace_uuid));
        assert!(!user.superuser);

        Ok(())
    }

    #[tokio::test]
    async fn create_user_duplicate_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let svc = PgUsersService::new(ctx.db.pool().clone());

        svc.create_user(NewUser {
            uuid: UserUuid::new(),
            email: "dup@example.com".to_string(),
            workspace_uuid: None,
            superuser: true,
        })
        .await?;

        let result = svc
            .create_user(NewUser {
                uuid: UserUuid::new(),
                email: "dup@example.com".to_string(),
                workspace_uuid: None,
                superuser: true,
            })
            .await;

        assert!(
            matches!(result, Err(UsersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_user_unknown_workspace_returns_invalid_reference() {
        let ctx = TestContext::new().await;
        let svc = PgUsersService::new(ctx.db.pool().clone());

        let result = svc
            .create_user(NewUser {
                uuid: UserUuid::new(),
                email: "stray@example.com".to_string(),
                workspace_uuid: Some(crate::domain::workspaces::records::WorkspaceUuid::new()),
                superuser: false,
            })
            .await;

        assert!(
            matches!(result, Err(UsersServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_user_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;
        let svc = PgUsersService::new(ctx.db.pool().clone());

        let result = svc.get_user(UserUuid::new()).await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
