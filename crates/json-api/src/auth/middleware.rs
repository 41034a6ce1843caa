//! Auth middleware.
//!
//! Resolves the `Authorization: Bearer` token to a user before any scoped
//! route runs; everything downstream can assume an authenticated identity.

use std::sync::Arc;

use atrium_app::auth::AuthServiceError;
use salvo::prelude::*;
use tracing::error;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = req.bearer_token() else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(status) => {
            res.render(status);

            return;
        }
    };

    match state.app.auth.authenticate_bearer(token).await {
        Ok(user) => {
            depot.insert_auth_user(user);

            ctrl.call_next(req, depot, res).await;
        }
        Err(AuthServiceError::UnknownToken) => {
            res.render(StatusError::unauthorized().brief("Unrecognized API token"));
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate api token: {source}");

            res.render(StatusError::internal_server_error());
        }
    }
}
