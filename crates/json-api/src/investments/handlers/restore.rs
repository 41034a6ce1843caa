//! Restore Investment Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    investments::{errors::into_status_error, get::InvestmentResponse},
    state::State,
};

/// Restore Investment Handler
#[endpoint(
    tags("investments"),
    summary = "Restore Investment",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<InvestmentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    let investment = state
        .app
        .investments
        .restore_investment(workspace, actor, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(investment.into()))
}
