//! Get Lead Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_app::domain::leads::records::LeadRecord;

use crate::{extensions::*, leads::errors::into_status_error, state::State};

/// Lead Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LeadResponse {
    /// The unique identifier of the lead
    pub uuid: Uuid,

    /// Contact name
    pub name: String,

    /// Contact email
    pub email: Option<String>,

    /// Contact phone
    pub phone: Option<String>,

    /// Pipeline status
    pub status: String,

    /// The date and time the lead was created
    pub created_at: String,

    /// The date and time the lead was last updated
    pub updated_at: String,

    /// The date and time the lead was deleted
    pub deleted_at: Option<String>,
}

impl From<LeadRecord> for LeadResponse {
    fn from(lead: LeadRecord) -> Self {
        LeadResponse {
            uuid: lead.uuid.into(),
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            status: lead.status.as_str().to_string(),
            created_at: lead.created_at.to_string(),
            updated_at: lead.updated_at.to_string(),
            deleted_at: lead.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Lead Handler
///
/// Returns a lead of the resolved workspace.
#[endpoint(tags("leads"), summary = "Get Lead", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<LeadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;

    let lead = state
        .app
        .leads
        .get_lead(workspace, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(lead.into()))
}
