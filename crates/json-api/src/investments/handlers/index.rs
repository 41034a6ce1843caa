//! Investment Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, investments::get::InvestmentResponse, state::State};

/// Investments Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InvestmentsResponse {
    /// The list of investments
    pub investments: Vec<InvestmentResponse>,
}

/// Investment Index Handler
#[endpoint(
    tags("investments"),
    summary = "List Investments",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    visibility: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<InvestmentsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let visibility = visibility.into_visibility()?;

    let investments = state
        .app
        .investments
        .list_investments(workspace, visibility)
        .await
        .or_500("failed to fetch investments")?;

    Ok(Json(InvestmentsResponse {
        investments: investments.into_iter().map(Into::into).collect(),
    }))
}
