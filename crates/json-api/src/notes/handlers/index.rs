//! Note Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, notes::get::NoteResponse, state::State};

/// Notes Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotesResponse {
    /// The list of notes
    pub notes: Vec<NoteResponse>,
}

/// Note Index Handler
#[endpoint(tags("notes"), summary = "List Notes", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    visibility: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<NotesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let visibility = visibility.into_visibility()?;

    let notes = state
        .app
        .notes
        .list_notes(workspace, visibility)
        .await
        .or_500("failed to fetch notes")?;

    Ok(Json(NotesResponse {
        notes: notes.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use atrium_app::database::Visibility;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use atrium_app::domain::notes::{MockNotesService, records::NoteUuid};

    use crate::test_helpers::{make_note, notes_service};

    use super::*;

    fn make_service(notes: MockNotesService) -> Service {
        notes_service(notes, Router::with_path("notes").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_notes() -> TestResult {
        let uuid = NoteUuid::new();

        let mut notes = MockNotesService::new();

        notes
            .expect_list_notes()
            .once()
            .withf(|_, visibility| *visibility == Visibility::Active)
            .return_once(move |_, _| Ok(vec![make_note(uuid)]));

        let response: NotesResponse = TestClient::get("http://example.com/notes")
            .send(&make_service(notes))
            .await
            .take_json()
            .await?;

        assert_eq!(response.notes.len(), 1, "expected one note");
        assert_eq!(response.notes[0].uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_deleted_visibility() -> TestResult {
        let mut notes = MockNotesService::new();

        notes
            .expect_list_notes()
            .once()
            .withf(|_, visibility| *visibility == Visibility::DeletedOnly)
            .return_once(|_, _| Ok(vec![]));

        let res = TestClient::get("http://example.com/notes?visibility=deleted")
            .send(&make_service(notes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
