//! Restore Note Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    notes::{errors::into_status_error, get::NoteResponse},
    state::State,
};

/// Restore Note Handler
#[endpoint(tags("notes"), summary = "Restore Note", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<NoteResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    let note = state
        .app
        .notes
        .restore_note(workspace, actor, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(note.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use atrium_app::domain::notes::{MockNotesService, records::NoteUuid};

    use crate::test_helpers::{make_note, notes_service};

    use super::*;

    #[tokio::test]
    async fn test_restore_note_success() -> TestResult {
        let uuid = NoteUuid::new();
        let note = make_note(uuid);

        let mut notes = MockNotesService::new();

        notes
            .expect_restore_note()
            .once()
            .withf(move |_, _, u| *u == uuid)
            .return_once(move |_, _, _| Ok(note));

        let service = notes_service(
            notes,
            Router::with_path("notes/{uuid}/restore").post(handler),
        );

        let res = TestClient::post(format!("http://example.com/notes/{uuid}/restore"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
