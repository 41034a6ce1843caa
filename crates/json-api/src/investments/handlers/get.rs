//! Get Investment Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atrium_app::domain::investments::records::InvestmentRecord;

use crate::{extensions::*, investments::errors::into_status_error, state::State};

/// Investment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InvestmentResponse {
    /// The unique identifier of the investment
    pub uuid: Uuid,

    /// Instrument ticker symbol
    pub ticker: String,

    pub quantity: u64,

    /// Amount invested in cents
    pub invested_cents: u64,

    /// The date and time the investment was created
    pub created_at: String,

    /// The date and time the investment was last updated
    pub updated_at: String,

    /// The date and time the investment was deleted
    pub deleted_at: Option<String>,
}

impl From<InvestmentRecord> for InvestmentResponse {
    fn from(investment: InvestmentRecord) -> Self {
        InvestmentResponse {
            uuid: investment.uuid.into(),
            ticker: investment.ticker,
            quantity: investment.quantity,
            invested_cents: investment.invested_cents,
            created_at: investment.created_at.to_string(),
            updated_at: investment.updated_at.to_string(),
            deleted_at: investment.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Investment Handler
#[endpoint(
    tags("investments"),
    summary = "Get Investment",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<InvestmentResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let workspace = depot.workspace_uuid_or_403()?;

    let investment = state
        .app
        .investments
        .get_investment(workspace, uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(investment.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use atrium_app::domain::investments::{
        InvestmentsServiceError, MockInvestmentsService, records::InvestmentUuid,
    };

    use crate::test_helpers::{TEST_WORKSPACE_UUID, investments_service, make_investment};

    use super::*;

    fn make_service(investments: MockInvestmentsService) -> Service {
        investments_service(
            investments,
            Router::with_path("investments/{uuid}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut investments = MockInvestmentsService::new();
        let uuid = InvestmentUuid::new();
        let investment = make_investment(uuid);

        investments
            .expect_get_investment()
            .once()
            .withf(move |workspace, u| *workspace == TEST_WORKSPACE_UUID && *u == uuid)
            .return_once(move |_, _| Ok(investment));

        let res = TestClient::get(format!("http://example.com/investments/{uuid}"))
            .send(&make_service(investments))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_investment_returns_404() -> TestResult {
        let mut investments = MockInvestmentsService::new();

        investments
            .expect_get_investment()
            .once()
            .return_once(|_, _| Err(InvestmentsServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/investments/{}",
            InvestmentUuid::new()
        ))
        .send(&make_service(investments))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
