//! Lead Records

use std::str::FromStr;

use jiff::Timestamp;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    audit::schema::{Auditable, FieldValue},
    domain::workspaces::records::WorkspaceUuid,
    uuids::TypedUuid,
};

/// Lead UUID
pub type LeadUuid = TypedUuid<LeadRecord>;

/// Lead pipeline status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Lost,
}

impl LeadStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Lost => "lost",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown lead status \"{0}\"")]
pub struct UnknownLeadStatus(String);

impl FromStr for LeadStatus {
    type Err = UnknownLeadStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "lost" => Ok(Self::Lost),
            other => Err(UnknownLeadStatus(other.to_string())),
        }
    }
}

/// Lead Record
#[derive(Debug, Clone)]
pub struct LeadRecord {
    pub uuid: LeadUuid,
    pub workspace_uuid: WorkspaceUuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: LeadStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Auditable for LeadRecord {
    const ENTITY_KIND: &'static str = "lead";

    fn audit_uuid(&self) -> Uuid {
        self.uuid.into_uuid()
    }

    fn audit_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::personal("name", json!(self.name)),
            FieldValue::personal("email", json!(self.email)),
            FieldValue::personal("phone", json!(self.phone)),
            FieldValue::new("status", json!(self.status.as_str())),
        ]
    }
}
