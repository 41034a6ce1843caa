//! Audit Log Index Handler
//!
//! Read-only compliance listing; entries are written exclusively by domain
//! mutations and cannot be modified through any endpoint.

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_app::audit::{data::AuditLogFilter, records::AuditLogEntry};

use crate::{extensions::*, state::State};

/// Audit Log Entry Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuditLogEntryResponse {
    /// The unique identifier of the entry
    pub uuid: Uuid,

    /// User that performed the mutation, when known
    pub actor_uuid: Option<Uuid>,

    /// Mutation kind: create, update, delete, or restore
    pub action: String,

    /// Kind of the audited entity, e.g. `lead`
    pub entity_kind: String,

    /// Identifier of the audited entity
    pub entity_uuid: Uuid,

    /// Name of the changed field
    pub field_name: String,

    /// JSON-serialized value before the mutation
    pub old_value: Option<String>,

    /// JSON-serialized value after the mutation
    pub new_value: Option<String>,

    /// Whether the field is designated personal data
    pub personal_data: bool,

    /// Client address the mutation arrived from
    pub ip: Option<String>,

    /// Client user agent
    pub user_agent: Option<String>,

    /// When the entry was recorded
    pub recorded_at: String,
}

impl From<AuditLogEntry> for AuditLogEntryResponse {
    fn from(entry: AuditLogEntry) -> Self {
        AuditLogEntryResponse {
            uuid: entry.uuid.into(),
            actor_uuid: entry.actor_uuid.map(Into::into),
            action: entry.action.as_str().to_string(),
            entity_kind: entry.entity_kind,
            entity_uuid: entry.entity_uuid,
            field_name: entry.field_name,
            old_value: entry.old_value.map(|value| value.to_string()),
            new_value: entry.new_value.map(|value| value.to_string()),
            personal_data: entry.personal_data,
            ip: entry.ip,
            user_agent: entry.user_agent,
            recorded_at: entry.recorded_at.to_string(),
        }
    }
}

/// Audit Log Entries Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuditLogEntriesResponse {
    /// Entries of the resolved workspace, newest first
    pub entries: Vec<AuditLogEntryResponse>,
}

/// Audit Log Index Handler
#[endpoint(
    tags("audit"),
    summary = "List Audit Log Entries",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    entity_kind: QueryParam<String, false>,
    entity_uuid: QueryParam<Uuid, false>,
    actor: QueryParam<Uuid, false>,
    limit: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<AuditLogEntriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;

    let entries = state
        .app
        .audit
        .list_entries(
            workspace,
            AuditLogFilter {
                entity_kind: entity_kind.into_inner(),
                entity_uuid: entity_uuid.into_inner(),
                actor_uuid: actor.into_inner().map(Into::into),
                limit: limit.into_inner(),
            },
        )
        .await
        .or_500("failed to fetch audit log entries")?;

    Ok(Json(AuditLogEntriesResponse {
        entries: entries.into_iter().map(Into::into).collect(),
    }))
}
