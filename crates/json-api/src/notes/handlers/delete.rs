//! Delete Note Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, notes::errors::into_status_error, state::State};

/// Delete Note Handler
#[endpoint(
    tags("notes"),
    summary = "Delete Note",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Note deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Note not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    state
        .app
        .notes
        .delete_note(workspace, actor, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
