//! Note Errors

use salvo::http::StatusError;
use tracing::error;

use atrium_app::domain::notes::NotesServiceError;

pub(crate) fn into_status_error(error: NotesServiceError) -> StatusError {
    match error {
        NotesServiceError::AlreadyExists => StatusError::conflict().brief("Note already exists"),
        NotesServiceError::InvalidReference
        | NotesServiceError::MissingRequiredData
        | NotesServiceError::InvalidData => StatusError::bad_request().brief("Invalid note payload"),
        NotesServiceError::NotFound => StatusError::not_found(),
        NotesServiceError::Sql(source) => {
            error!("notes storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
