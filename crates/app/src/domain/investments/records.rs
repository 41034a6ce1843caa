//! Investment Records

use jiff::Timestamp;
use serde_json::json;
use uuid::Uuid;

use crate::{
    audit::schema::{Auditable, FieldValue},
    domain::workspaces::records::WorkspaceUuid,
    uuids::TypedUuid,
};

/// Investment UUID
pub type InvestmentUuid = TypedUuid<InvestmentRecord>;

/// Investment Record
#[derive(Debug, Clone)]
pub struct InvestmentRecord {
    pub uuid: InvestmentUuid,
    pub workspace_uuid: WorkspaceUuid,
    /// Instrument ticker symbol.
    pub ticker: String,
    pub quantity: u64,
    /// Amount invested in cents.
    pub invested_cents: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Auditable for InvestmentRecord {
    const ENTITY_KIND: &'static str = "investment";

    fn audit_uuid(&self) -> Uuid {
        self.uuid.into_uuid()
    }

    fn audit_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::new("ticker", json!(self.ticker)),
            FieldValue::new("quantity", json!(self.quantity)),
            FieldValue::new("invested_cents", json!(self.invested_cents)),
        ]
    }
}
