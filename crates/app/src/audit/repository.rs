//! Audit Recorder Repository
//!
//! Append-only: this repository exposes no update or delete operation, and
//! the schema enforces the same through row-level security.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    actor::Actor,
    audit::{
        data::AuditLogFilter,
        records::{AuditAction, AuditEntryUuid, AuditLogEntry},
        schema::{self, Auditable, FieldChange},
    },
    domain::users::records::UserUuid,
    domain::workspaces::records::WorkspaceUuid,
};

const APPEND_AUDIT_ENTRY_SQL: &str = include_str!("sql/append_audit_entry.sql");
const LIST_AUDIT_ENTRIES_SQL: &str = include_str!("sql/list_audit_entries.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAuditRepository;

impl PgAuditRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn record_created<E: Auditable>(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        actor: &Actor,
        entity: &E,
    ) -> Result<(), sqlx::Error> {
        self.append(
            tx,
            actor,
            AuditAction::Create,
            E::ENTITY_KIND,
            entity.audit_uuid(),
            schema::creation_changes(entity.audit_fields()),
        )
        .await
    }

    pub(crate) async fn record_updated<E: Auditable>(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        actor: &Actor,
        before: &E,
        after: &E,
    ) -> Result<(), sqlx::Error> {
        self.append(
            tx,
            actor,
            AuditAction::Update,
            E::ENTITY_KIND,
            after.audit_uuid(),
            schema::diff(&before.audit_fields(), &after.audit_fields()),
        )
        .await
    }

    pub(crate) async fn record_deleted<E: Auditable>(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        actor: &Actor,
        entity: &E,
    ) -> Result<(), sqlx::Error> {
        self.append(
            tx,
            actor,
            AuditAction::Delete,
            E::ENTITY_KIND,
            entity.audit_uuid(),
            schema::removal_changes(entity.audit_fields()),
        )
        .await
    }

    pub(crate) async fn record_restored<E: Auditable>(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        actor: &Actor,
        entity: &E,
    ) -> Result<(), sqlx::Error> {
        self.append(
            tx,
            actor,
            AuditAction::Restore,
            E::ENTITY_KIND,
            entity.audit_uuid(),
            schema::creation_changes(entity.audit_fields()),
        )
        .await
    }

    pub(crate) async fn list_entries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &AuditLogFilter,
        limit: i64,
    ) -> Result<Vec<AuditLogEntry>, sqlx::Error> {
        query_as::<Postgres, AuditLogEntry>(LIST_AUDIT_ENTRIES_SQL)
            .bind(filter.entity_kind.as_deref())
            .bind(filter.entity_uuid)
            .bind(filter.actor_uuid.map(UserUuid::into_uuid))
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    async fn append(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        actor: &Actor,
        action: AuditAction,
        entity_kind: &'static str,
        entity_uuid: Uuid,
        changes: Vec<FieldChange>,
    ) -> Result<(), sqlx::Error> {
        for change in changes {
            query(APPEND_AUDIT_ENTRY_SQL)
                .bind(AuditEntryUuid::new().into_uuid())
                .bind(actor.user_uuid.map(UserUuid::into_uuid))
                .bind(action.as_str())
                .bind(entity_kind)
                .bind(entity_uuid)
                .bind(change.name)
                .bind(change.old_value)
                .bind(change.new_value)
                .bind(change.personal_data)
                .bind(actor.ip.as_deref())
                .bind(actor.user_agent.as_deref())
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for AuditLogEntry {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let action: String = row.try_get("action")?;
        let action = action
            .parse::<AuditAction>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "action".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: AuditEntryUuid::from_uuid(row.try_get("uuid")?),
            workspace_uuid: WorkspaceUuid::from_uuid(row.try_get("workspace_uuid")?),
            actor_uuid: row
                .try_get::<Option<Uuid>, _>("actor_uuid")?
                .map(UserUuid::from_uuid),
            action,
            entity_kind: row.try_get("entity_kind")?,
            entity_uuid: row.try_get("entity_uuid")?,
            field_name: row.try_get("field_name")?,
            old_value: row.try_get("old_value")?,
            new_value: row.try_get("new_value")?,
            personal_data: row.try_get("personal_data")?,
            ip: row.try_get("ip")?,
            user_agent: row.try_get("user_agent")?,
            recorded_at: row.try_get::<SqlxTimestamp, _>("recorded_at")?.to_jiff(),
        })
    }
}
