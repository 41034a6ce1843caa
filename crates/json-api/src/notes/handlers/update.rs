//! Update Note Handler

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

use atrium_app::domain::notes::data::NoteUpdate;

use crate::{
    extensions::*,
    notes::{errors::into_status_error, get::NoteResponse},
    state::State,
};

/// Update Note Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateNoteRequest {
    pub title: String,
    pub body: String,
    pub pinned: bool,
}

/// Update Note Handler
#[endpoint(tags("notes"), summary = "Update Note", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateNoteRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<NoteResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    let request = json.into_inner();

    let note = state
        .app
        .notes
        .update_note(
            workspace,
            actor,
            uuid.into_inner().into(),
            NoteUpdate {
                title: request.title,
                body: request.body,
                pinned: request.pinned,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(note.into()))
}
