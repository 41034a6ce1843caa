//! Get Note Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_app::domain::notes::records::NoteRecord;

use crate::{extensions::*, notes::errors::into_status_error, state::State};

/// Note Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NoteResponse {
    /// The unique identifier of the note
    pub uuid: Uuid,

    pub title: String,

    pub body: String,

    pub pinned: bool,

    /// The date and time the note was created
    pub created_at: String,

    /// The date and time the note was last updated
    pub updated_at: String,

    /// The date and time the note was deleted
    pub deleted_at: Option<String>,
}

impl From<NoteRecord> for NoteResponse {
    fn from(note: NoteRecord) -> Self {
        NoteResponse {
            uuid: note.uuid.into(),
            title: note.title,
            body: note.body,
            pinned: note.pinned,
            created_at: note.created_at.to_string(),
            updated_at: note.updated_at.to_string(),
            deleted_at: note.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Note Handler
#[endpoint(tags("notes"), summary = "Get Note", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<NoteResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;

    let note = state
        .app
        .notes
        .get_note(workspace, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(note.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use atrium_app::domain::notes::{
        MockNotesService, NotesServiceError, records::NoteUuid,
    };

    use crate::test_helpers::{TEST_WORKSPACE_UUID, make_note, notes_service};

    use super::*;

    fn make_service(notes: MockNotesService) -> Service {
        notes_service(notes, Router::with_path("notes/{uuid}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut notes = MockNotesService::new();
        let uuid = NoteUuid::new();
        let note = make_note(uuid);

        notes
            .expect_get_note()
            .once()
            .withf(move |workspace, u| *workspace == TEST_WORKSPACE_UUID && *u == uuid)
            .return_once(move |_, _| Ok(note));

        let res = TestClient::get(format!("http://example.com/notes/{uuid}"))
            .send(&make_service(notes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_note_returns_404() -> TestResult {
        let mut notes = MockNotesService::new();
        let uuid = NoteUuid::new();

        notes
            .expect_get_note()
            .once()
            .return_once(|_, _| Err(NotesServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/notes/{uuid}"))
            .send(&make_service(notes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
