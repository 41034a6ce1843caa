//! Leads service.
//!
//! Mutations write their audit entries inside the same transaction, so a
//! failed audit write rolls the mutation back.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    actor::Actor,
    audit::PgAuditRepository,
    database::{Db, Visibility},
    domain::{
        leads::{
            data::{LeadUpdate, NewLead},
            errors::LeadsServiceError,
            records::{LeadRecord, LeadUuid},
            repository::PgLeadsRepository,
        },
        workspaces::records::WorkspaceUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgLeadsService {
    db: Db,
    repository: PgLeadsRepository,
    audit: PgAuditRepository,
}

impl PgLeadsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgLeadsRepository::new(),
            audit: PgAuditRepository::new(),
        }
    }
}

#[async_trait]
impl LeadsService for PgLeadsService {
    async fn list_leads(
        &self,
        workspace: WorkspaceUuid,
        visibility: Visibility,
    ) -> Result<Vec<LeadRecord>, LeadsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let leads = self.repository.list_leads(&mut tx, visibility).await?;

        tx.commit().await?;

        Ok(leads)
    }

    async fn get_lead(
        &self,
        workspace: WorkspaceUuid,
        lead: LeadUuid,
    ) -> Result<LeadRecord, LeadsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let lead = self.repository.get_lead(&mut tx, lead).await?;

        tx.commit().await?;

        Ok(lead)
    }

    async fn create_lead(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        lead: NewLead,
    ) -> Result<LeadRecord, LeadsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let created = self.repository.create_lead(&mut tx, lead).await?;

        self.audit.record_created(&mut tx, &actor, &created).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_lead(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        lead: LeadUuid,
        update: LeadUpdate,
    ) -> Result<LeadRecord, LeadsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let before = self.repository.get_lead(&mut tx, lead).await?;
        let updated = self.repository.update_lead(&mut tx, lead, update).await?;

        self.audit
            .record_updated(&mut tx, &actor, &before, &updated)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_lead(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        lead: LeadUuid,
    ) -> Result<(), LeadsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let before = self.repository.get_lead(&mut tx, lead).await?;
        let rows_affected = self.repository.soft_delete_lead(&mut tx, lead).await?;

        if rows_affected == 0 {
            return Err(LeadsServiceError::NotFound);
        }

        self.audit.record_deleted(&mut tx, &actor, &before).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn restore_lead(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        lead: LeadUuid,
    ) -> Result<LeadRecord, LeadsServiceError> {
        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let restored = self
            .repository
            .restore_lead(&mut tx, lead)
            .await?
            .ok_or(LeadsServiceError::NotFound)?;

        self.audit
            .record_restored(&mut tx, &actor, &restored)
            .await?;

        tx.commit().await?;

        Ok(restored)
    }
}

#[automock]
#[async_trait]
pub trait LeadsService: Send + Sync {
    /// Retrieves the workspace's leads under the given visibility.
    async fn list_leads(
        &self,
        workspace: WorkspaceUuid,
        visibility: Visibility,
    ) -> Result<Vec<LeadRecord>, LeadsServiceError>;

    /// Retrieves a single active lead.
    async fn get_lead(
        &self,
        workspace: WorkspaceUuid,
        lead: LeadUuid,
    ) -> Result<LeadRecord, LeadsServiceError>;

    /// Creates a new lead in the workspace.
    async fn create_lead(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        lead: NewLead,
    ) -> Result<LeadRecord, LeadsServiceError>;

    /// Replaces the mutable fields of a lead.
    async fn update_lead(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        lead: LeadUuid,
        update: LeadUpdate,
    ) -> Result<LeadRecord, LeadsServiceError>;

    /// Soft-deletes a lead; the row is retained with a deletion timestamp.
    async fn delete_lead(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        lead: LeadUuid,
    ) -> Result<(), LeadsServiceError>;

    /// Clears a lead's deletion timestamp.
    async fn restore_lead(
        &self,
        workspace: WorkspaceUuid,
        actor: Actor,
        lead: LeadUuid,
    ) -> Result<LeadRecord, LeadsServiceError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        audit::{
            AuditService, data::AuditLogFilter, records::AuditAction,
            schema::Auditable,
        },
        domain::leads::records::LeadStatus,
        test::TestContext,
    };

    use super::*;

    fn new_lead(uuid: LeadUuid) -> NewLead {
        NewLead {
            uuid,
            name: "Ana Souza".to_string(),
            email: Some("ana@example.com".to_string()),
            phone: None,
            status: LeadStatus::New,
        }
    }

    async fn audit_entries_for(
        ctx: &TestContext,
        workspace: WorkspaceUuid,
        lead: LeadUuid,
    ) -> Vec<crate::audit::records::AuditLogEntry> {
        ctx.audit
            .list_entries(
                workspace,
                AuditLogFilter {
                    entity_kind: Some(LeadRecord::ENTITY_KIND.to_string()),
                    entity_uuid: Some(lead.into_uuid()),
                    ..AuditLogFilter::default()
                },
            )
            .await
            .expect("Failed to list audit entries")
    }

    #[tokio::test]
    async fn create_lead_returns_persisted_record() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        let lead = ctx
            .leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        assert_eq!(lead.uuid, uuid);
        assert_eq!(lead.name, "Ana Souza");
        assert_eq!(lead.status, LeadStatus::New);
        assert!(lead.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_lead_stamps_resolved_workspace() -> TestResult {
        let ctx = TestContext::new().await;

        let lead = ctx
            .leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(LeadUuid::new()))
            .await?;

        // The workspace comes from the transaction binding, never from the
        // payload.
        assert_eq!(lead.workspace_uuid, ctx.workspace_uuid);

        Ok(())
    }

    #[tokio::test]
    async fn create_lead_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        let result = ctx
            .leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await;

        assert!(
            matches!(result, Err(LeadsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_lead_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.leads.get_lead(ctx.workspace_uuid, LeadUuid::new()).await;

        assert!(
            matches!(result, Err(LeadsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn lead_not_visible_to_other_workspace() -> TestResult {
        let ctx = TestContext::new().await;

        let lead = ctx
            .leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(LeadUuid::new()))
            .await?;

        let workspace_b = ctx.create_workspace("workspace-b", "Workspace B").await;

        let result = ctx.leads.get_lead(workspace_b, lead.uuid).await;

        assert!(
            matches!(result, Err(LeadsServiceError::NotFound)),
            "cross-workspace access must look like a missing row, got {result:?}"
        );

        let listed = ctx.leads.list_leads(workspace_b, Visibility::All).await?;
        assert!(listed.is_empty(), "other workspace's list must be empty");

        Ok(())
    }

    #[tokio::test]
    async fn deleted_lead_hidden_from_default_listing() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        ctx.leads
            .delete_lead(ctx.workspace_uuid, ctx.actor(), uuid)
            .await?;

        let active = ctx
            .leads
            .list_leads(ctx.workspace_uuid, Visibility::Active)
            .await?;
        assert!(
            !active.iter().any(|lead| lead.uuid == uuid),
            "deleted lead must not appear in the default listing"
        );

        let all = ctx
            .leads
            .list_leads(ctx.workspace_uuid, Visibility::All)
            .await?;
        let deleted = all
            .iter()
            .find(|lead| lead.uuid == uuid)
            .expect("deleted lead must appear under Visibility::All");
        assert!(
            deleted.deleted_at.is_some(),
            "the retained row carries its deletion timestamp"
        );

        let only_deleted = ctx
            .leads
            .list_leads(ctx.workspace_uuid, Visibility::DeletedOnly)
            .await?;
        assert!(only_deleted.iter().all(|lead| lead.deleted_at.is_some()));
        assert!(only_deleted.iter().any(|lead| lead.uuid == uuid));

        Ok(())
    }

    #[tokio::test]
    async fn restore_lead_round_trips_through_default_listing() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        ctx.leads
            .delete_lead(ctx.workspace_uuid, ctx.actor(), uuid)
            .await?;

        let restored = ctx
            .leads
            .restore_lead(ctx.workspace_uuid, ctx.actor(), uuid)
            .await?;
        assert!(restored.deleted_at.is_none());

        let active = ctx
            .leads
            .list_leads(ctx.workspace_uuid, Visibility::Active)
            .await?;
        assert!(
            active.iter().any(|lead| lead.uuid == uuid),
            "restored lead must reappear in the default listing"
        );

        Ok(())
    }

    #[tokio::test]
    async fn restore_active_lead_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        let result = ctx
            .leads
            .restore_lead(ctx.workspace_uuid, ctx.actor(), uuid)
            .await;

        assert!(
            matches!(result, Err(LeadsServiceError::NotFound)),
            "restoring an active lead has nothing to clear, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_deleted_lead_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        ctx.leads
            .delete_lead(ctx.workspace_uuid, ctx.actor(), uuid)
            .await?;

        let result = ctx
            .leads
            .update_lead(
                ctx.workspace_uuid,
                ctx.actor(),
                uuid,
                LeadUpdate {
                    name: "Ana Souza".to_string(),
                    email: None,
                    phone: None,
                    status: LeadStatus::Contacted,
                },
            )
            .await;

        assert!(
            matches!(result, Err(LeadsServiceError::NotFound)),
            "the default manager must not mutate deleted rows, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_lead_records_audit_entries_without_old_values() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        let entries = audit_entries_for(&ctx, ctx.workspace_uuid, uuid).await;

        assert_eq!(entries.len(), 4, "one entry per schema field");
        assert!(entries.iter().all(|e| e.action == AuditAction::Create));
        assert!(entries.iter().all(|e| e.old_value.is_none()));
        assert!(
            entries
                .iter()
                .all(|e| e.actor_uuid == Some(ctx.user_uuid)),
            "entries must carry the acting user"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_lead_records_exactly_the_changed_field() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        ctx.leads
            .update_lead(
                ctx.workspace_uuid,
                ctx.actor(),
                uuid,
                LeadUpdate {
                    name: "Ana Souza".to_string(),
                    email: Some("ana@example.com".to_string()),
                    phone: None,
                    status: LeadStatus::Contacted,
                },
            )
            .await?;

        let entries = audit_entries_for(&ctx, ctx.workspace_uuid, uuid).await;
        let updates: Vec<_> = entries
            .iter()
            .filter(|e| e.action == AuditAction::Update)
            .collect();

        assert_eq!(updates.len(), 1, "unchanged fields must emit nothing");
        assert_eq!(updates[0].field_name, "status");
        assert_eq!(updates[0].old_value, Some(json!("new")));
        assert_eq!(updates[0].new_value, Some(json!("contacted")));

        Ok(())
    }

    #[tokio::test]
    async fn update_lead_without_changes_records_nothing() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        ctx.leads
            .update_lead(
                ctx.workspace_uuid,
                ctx.actor(),
                uuid,
                LeadUpdate {
                    name: "Ana Souza".to_string(),
                    email: Some("ana@example.com".to_string()),
                    phone: None,
                    status: LeadStatus::New,
                },
            )
            .await?;

        let entries = audit_entries_for(&ctx, ctx.workspace_uuid, uuid).await;

        assert!(
            entries.iter().all(|e| e.action != AuditAction::Update),
            "a no-op update must not add audit entries"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_lead_records_final_state_as_old_values() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        ctx.leads
            .delete_lead(ctx.workspace_uuid, ctx.actor(), uuid)
            .await?;

        let entries = audit_entries_for(&ctx, ctx.workspace_uuid, uuid).await;
        let deletes: Vec<_> = entries
            .iter()
            .filter(|e| e.action == AuditAction::Delete)
            .collect();

        assert_eq!(deletes.len(), 4, "one entry per schema field");
        assert!(deletes.iter().all(|e| e.new_value.is_none()));

        let name = deletes
            .iter()
            .find(|e| e.field_name == "name")
            .expect("the name field must be captured");
        assert_eq!(name.old_value, Some(json!("Ana Souza")));

        Ok(())
    }

    #[tokio::test]
    async fn audit_entries_flag_personal_data_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        let entries = audit_entries_for(&ctx, ctx.workspace_uuid, uuid).await;

        let email = entries
            .iter()
            .find(|e| e.field_name == "email")
            .expect("email entry must exist");
        let status = entries
            .iter()
            .find(|e| e.field_name == "status")
            .expect("status entry must exist");

        assert!(email.personal_data, "email is designated personal data");
        assert!(!status.personal_data, "status is not personal data");

        Ok(())
    }

    #[tokio::test]
    async fn audit_entries_scoped_to_their_workspace() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = LeadUuid::new();

        ctx.leads
            .create_lead(ctx.workspace_uuid, ctx.actor(), new_lead(uuid))
            .await?;

        let workspace_b = ctx.create_workspace("audit-b", "Audit B").await;

        let entries = audit_entries_for(&ctx, workspace_b, uuid).await;

        assert!(
            entries.is_empty(),
            "another workspace must not see these audit entries"
        );

        Ok(())
    }
}
