//! Create Lead Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_app::domain::leads::{data::NewLead, records::LeadStatus};

use crate::{extensions::*, leads::errors::into_status_error, state::State};

/// Create Lead Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateLeadRequest {
    pub uuid: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Pipeline status; defaults to `new`
    pub status: Option<String>,
}

/// Lead Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LeadCreatedResponse {
    /// Created lead UUID
    pub uuid: Uuid,
}

/// Create Lead Handler
///
/// The lead is always created in the resolved workspace; any workspace
/// reference in the payload is ignored.
#[endpoint(
    tags("leads"),
    summary = "Create Lead",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Lead created"),
        (status_code = StatusCode::CONFLICT, description = "Lead already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateLeadRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<LeadCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    let request = json.into_inner();

    let status = request
        .status
        .as_deref()
        .map(str::parse::<LeadStatus>)
        .transpose()
        .or_400("could not parse lead status")?
        .unwrap_or_default();

    let uuid = state
        .app
        .leads
        .create_lead(
            workspace,
            actor,
            NewLead {
                uuid: request.uuid.into(),
                name: request.name,
                email: request.email,
                phone: request.phone,
                status,
            },
        )
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/leads/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(LeadCreatedResponse { uuid: uuid.into() }))
}
