//! Create Investment Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_app::domain::investments::data::NewInvestment;

use crate::{extensions::*, investments::errors::into_status_error, state::State};

/// Create Investment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateInvestmentRequest {
    pub uuid: Uuid,
    pub ticker: String,
    pub quantity: u64,
    /// Amount invested in cents
    pub invested_cents: u64,
}

/// Investment Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InvestmentCreatedResponse {
    /// Created investment UUID
    pub uuid: Uuid,
}

/// Create Investment Handler
#[endpoint(
    tags("investments"),
    summary = "Create Investment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Investment created"),
        (status_code = StatusCode::CONFLICT, description = "Investment already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateInvestmentRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<InvestmentCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    let request = json.into_inner();

    let uuid = state
        .app
        .investments
        .create_investment(
            workspace,
            actor,
            NewInvestment {
                uuid: request.uuid.into(),
                ticker: request.ticker,
                quantity: request.quantity,
                invested_cents: request.invested_cents,
            },
        )
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/investments/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(InvestmentCreatedResponse { uuid: uuid.into() }))
}
