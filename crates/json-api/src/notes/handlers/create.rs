//! Create Note Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_app::domain::notes::data::NewNote;

use crate::{extensions::*, notes::errors::into_status_error, state::State};

/// Create Note Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateNoteRequest {
    pub uuid: Uuid,
    pub title: String,
    pub body: String,
    /// Defaults to unpinned
    pub pinned: Option<bool>,
}

/// Note Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NoteCreatedResponse {
    /// Created note UUID
    pub uuid: Uuid,
}

/// Create Note Handler
#[endpoint(
    tags("notes"),
    summary = "Create Note",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Note created"),
        (status_code = StatusCode::CONFLICT, description = "Note already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateNoteRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<NoteCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    let request = json.into_inner();

    let uuid = state
        .app
        .notes
        .create_note(
            workspace,
            actor,
            NewNote {
                uuid: request.uuid.into(),
                title: request.title,
                body: request.body,
                pinned: request.pinned.unwrap_or(false),
            },
        )
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/notes/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(NoteCreatedResponse { uuid: uuid.into() }))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use atrium_app::domain::notes::{
        MockNotesService, NotesServiceError, records::NoteUuid,
    };

    use crate::test_helpers::{TEST_WORKSPACE_UUID, make_note, notes_service};

    use super::*;

    fn make_service(notes: MockNotesService) -> Service {
        notes_service(notes, Router::with_path("notes").post(handler))
    }

    #[tokio::test]
    async fn test_create_note_success() -> TestResult {
        let uuid = NoteUuid::new();
        let note = make_note(uuid);

        let mut notes = MockNotesService::new();

        notes
            .expect_create_note()
            .once()
            .withf(move |workspace, _, new| {
                *workspace == TEST_WORKSPACE_UUID && new.uuid == uuid && !new.pinned
            })
            .return_once(move |_, _, _| Ok(note));

        let res = TestClient::post("http://example.com/notes")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "title": "Kickoff",
                "body": "Client prefers calls after 14h",
            }))
            .send(&make_service(notes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_note_conflict_returns_409() -> TestResult {
        let mut notes = MockNotesService::new();

        notes
            .expect_create_note()
            .once()
            .return_once(|_, _, _| Err(NotesServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/notes")
            .json(&json!({
                "uuid": Uuid::now_v7(),
                "title": "Kickoff",
                "body": "dup",
            }))
            .send(&make_service(notes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
