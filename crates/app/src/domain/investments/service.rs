//! Investments service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    actor::Actor,
    audit::PgAuditRepository,
    database::{Db, Visibility},
    domain::{
        investments::{
            data::{InvestmentUpdate, NewInvestment},
            errors::InvestmentsServiceError,
            records::{InvestmentRecord, InvestmentUuid},
            repository::PgInvestmentsRepository,
        },
        workspaces::records::WorkspaceUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgInvestmentsService {
    db: Db,
    repository: PgInvestmentsRepository,
    audit: PgAuditRepository,
}

impl PgInvestmentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgInvestmentsRepository::new(),
            audit: PgAuditRepository::new(),
        }
    }
}

#[async_trait]
impl InvestmentsService for PgInvestmentsService {
    async fn list_investments(
        &self,
        workspace: WorkspaceUuid,
        visibility: Visibility,
    ) -> Result<Vec<InvestmentRecord>, InvestmentsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let investments = self.repository.list_investments(&mut tx, visibility).await?;

        tx.commit().await?;

        Ok(investments)
    }

    async fn get_investment(
        &self,
        workspace: WorkspaceUuid,
        investment: InvestmentUuid,
    ) -> Result<InvestmentRecord, InvestmentsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let investment = self.repository.get_investment(&mut tx, investment).await?;

        tx.commit().await?;

        Ok(investment)
    }

    async fn create_investment(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        investment: NewInvestment,
    ) -> Result<InvestmentRecord, InvestmentsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let created = self
            .repository
            .create_investment(&mut tx, investment)
            .await?;

        self.audit.record_created(&mut tx, &actor, &created).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_investment(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        investment: InvestmentUuid,
        update: InvestmentUpdate,
    ) -> Result<InvestmentRecord, InvestmentsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let before = self.repository.get_investment(&mut tx, investment).await?;
        let updated = self
            .repository
            .update_investment(&mut tx, investment, update)
            .await?;

        self.audit
            .record_updated(&mut tx, &actor, &before, &updated)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_investment(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        investment: InvestmentUuid,
    ) -> Result<(), InvestmentsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let before = self.repository.get_investment(&mut tx, investment).await?;
        let rows_affected = self
            .repository
            .soft_delete_investment(&mut tx, investment)
            .await?;

        if rows_affected == 0 {
            return Err(InvestmentsServiceError::NotFound);
        }

        self.audit.record_deleted(&mut tx, &actor, &before).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn restore_investment(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        investment: InvestmentUuid,
    ) -> Result<InvestmentRecord, InvestmentsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let restored = self
            .repository
            .restore_investment(&mut tx, investment)
            .await?
            .ok_or(InvestmentsServiceError::NotFound)?;

        self.audit
            .record_restored(&mut tx, &actor, &restored)
            .await?;

        tx.commit().await?;

        Ok(restored)
    }
}

#[automock]
#[async_trait]
pub trait InvestmentsService: Send + Sync {
    /// Retrieves the workspace's investments under the given visibility.
    async fn list_investments(
        &self,
        workspace: WorkspaceUuid,
        visibility: Visibility,
    ) -> Result<Vec<InvestmentRecord>, InvestmentsServiceError>;

    /// Retrieves a single active investment.
    async fn get_investment(
        &self,
        workspace: WorkspaceUuid,
        investment: InvestmentUuid,
    ) -> Result<InvestmentRecord, InvestmentsServiceError>;

    /// Creates a new investment in the workspace.
    async fn create_investment(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        investment: NewInvestment,
    ) -> Result<InvestmentRecord, InvestmentsServiceError>;

    /// Replaces the mutable fields of an investment.
    async fn update_investment(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        investment: InvestmentUuid,
        update: InvestmentUpdate,
    ) -> Result<InvestmentRecord, InvestmentsServiceError>;

    /// Soft-deletes an investment.
    async fn delete_investment(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        investment: InvestmentUuid,
    ) -> Result<(), InvestmentsServiceError>;

    /// Clears an investment's deletion timestamp.
    async fn restore_investment(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        investment: InvestmentUuid,
    ) -> Result<InvestmentRecord, InvestmentsServiceError>;
}
