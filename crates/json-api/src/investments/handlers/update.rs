//! Update Investment Handler

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

use atrium_app::domain::investments::data::InvestmentUpdate;

use crate::{
    extensions::*,
    investments::{errors::into_status_error, get::InvestmentResponse},
    state::State,
};

/// Update Investment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateInvestmentRequest {
    pub ticker: String,
    pub quantity: u64,
    /// Amount invested in cents
    pub invested_cents: u64,
}

/// Update Investment Handler
#[endpoint(
    tags("investments"),
    summary = "Update Investment",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateInvestmentRequest>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<InvestmentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let actor = req.actor(depot.auth_user_or_401()?);

    let request = json.into_inner();

    let investment = state
        .app
        .investments
        .update_investment(
            workspace,
            actor,
            uuid.into_inner().into(),
            InvestmentUpdate {
                ticker: request.ticker,
                quantity: request.quantity,
                invested_cents: request.invested_cents,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(investment.into()))
}
