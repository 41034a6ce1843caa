//! Audit service.
//!
//! Read-only: entries are written by the recorder inside domain-service
//! transactions; this service only answers compliance queries.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    audit::{
        PgAuditRepository, data::AuditLogFilter, errors::AuditServiceError,
        records::AuditLogEntry,
    },
    database::Db,
    domain::workspaces::records::WorkspaceUuid,
};

const DEFAULT_LIMIT: i64 = 200;
const MAX_LIMIT: i64 = 500;

#[derive(Debug, Clone)]
pub struct PgAuditService {
    db: Db,
    repository: PgAuditRepository,
}

impl PgAuditService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuditRepository::new(),
        }
    }
}

#[async_trait]
impl AuditService for PgAuditService {
    async fn list_entries(
        &self,
        workspace: WorkspaceUuid,
        filter: AuditLogFilter,
    ) -> Result<Vec<AuditLogEntry>, AuditServiceError> {
        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let mut tx = self.db.begin_workspace_transaction(workspace).await?;

        let entries = self.repository.list_entries(&mut tx, &filter, limit).await?;

        tx.commit().await?;

        Ok(entries)
    }
}

#[automock]
#[async_trait]
/// Compliance queries over recorded audit entries.
pub trait AuditService: Send + Sync {
    /// Lists entries of the given workspace, newest first.
    async fn list_entries(
        &self,
        workspace: WorkspaceUuid,
        filter: AuditLogFilter,
    ) -> Result<Vec<AuditLogEntry>, AuditServiceError>;
}
