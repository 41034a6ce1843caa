//! Lead Errors

use salvo::http::StatusError;
use tracing::error;

use atrium_app::domain::leads::LeadsServiceError;

pub(crate) fn into_status_error(error: LeadsServiceError) -> StatusError {
    match error {
        LeadsServiceError::AlreadyExists => StatusError::conflict().brief("Lead already exists"),
        LeadsServiceError::InvalidReference
        | LeadsServiceError::MissingRequiredData
        | LeadsServiceError::InvalidData => StatusError::bad_request().brief("Invalid lead payload"),
        LeadsServiceError::NotFound => StatusError::not_found(),
        LeadsServiceError::Sql(source) => {
            error!("leads storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
