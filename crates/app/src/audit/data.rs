//! Audit Query Data

use uuid::Uuid;

use crate::domain::users::records::UserUuid;

/// Compliance listing filter.
///
/// All criteria are optional and combine conjunctively; the workspace scope
/// is always applied on top by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLogFilter {
    /// Restrict to entries for one entity kind, e.g. `lead`.
    pub entity_kind: Option<String>,

    /// Restrict to entries for one entity instance.
    pub entity_uuid: Option<Uuid>,

    /// Restrict to entries recorded for one acting user.
    pub actor_uuid: Option<UserUuid>,

    /// Maximum number of entries returned; clamped by the service.
    pub limit: Option<i64>,
}
