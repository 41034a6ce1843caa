//! Update Lead Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_app::domain::leads::{data::LeadUpdate, records::LeadStatus};

use crate::{
    extensions::*,
    leads::{errors::into_status_error, get::LeadResponse},
    state::State,
};

/// Update Lead Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateLeadRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: String,
}

/// Update Lead Handler
///
/// Replaces the mutable fields of a lead; every changed field is audited.
#[endpoint(tags("leads"), summary = "Update Lead", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateLeadRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LeadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    let request = json.into_inner();

    let status = request
        .status
        .parse::<LeadStatus>()
        .or_400("could not parse lead status")?;

    let lead = state
        .app
        .leads
        .update_lead(
            workspace,
            actor,
            uuid.into_inner().into(),
            LeadUpdate {
                name: request.name,
                email: request.email,
                phone: request.phone,
                status,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(lead.into()))
}
