//! Lead Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, leads::get::LeadResponse, state::State};

/// Leads Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LeadsResponse {
    /// The list of leads
    pub leads: Vec<LeadResponse>,
}

/// Lead Index Handler
///
/// Returns the leads of the resolved workspace. The optional `visibility`
/// parameter (`active`, `all`, `deleted`) controls whether soft-deleted rows
/// are included; the default excludes them.
#[endpoint(tags("leads"), summary = "List Leads", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    visibility: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<LeadsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;
    let visibility = visibility.into_visibility()?;

    let leads = state
        .app
        .leads
        .list_leads(workspace, visibility)
        .await
        .or_500("failed to fetch leads")?;

    Ok(Json(LeadsResponse {
        leads: leads.into_iter().map(Into::into).collect(),
    }))
}
