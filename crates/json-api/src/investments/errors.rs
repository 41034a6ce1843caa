//! Investment Errors

use salvo::http::StatusError;
use tracing::error;

use atrium_app::domain::investments::InvestmentsServiceError;

pub(crate) fn into_status_error(error: InvestmentsServiceError) -> StatusError {
    match error {
        InvestmentsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Investment already exists")
        }
        InvestmentsServiceError::InvalidReference
        | InvestmentsServiceError::MissingRequiredData
        | InvestmentsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid investment payload")
        }
        InvestmentsServiceError::NotFound => StatusError::not_found(),
        InvestmentsServiceError::Sql(source) => {
            error!("investments storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
