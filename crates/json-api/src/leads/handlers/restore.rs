//! Restore Lead Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    leads::{errors::into_status_error, get::LeadResponse},
    state::State,
};

/// Restore Lead Handler
///
/// Clears the deletion timestamp of a soft-deleted lead.
#[endpoint(tags("leads"), summary = "Restore Lead", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LeadResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    let lead = state
        .app
        .leads
        .restore_lead(workspace, actor, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(lead.into()))
}
