//! Throttle guard.
//!
//! Counts mutating requests against the per-workspace/user/operation window
//! and rejects the overflow with retry guidance. Reads pass through
//! unthrottled.

use std::sync::Arc;

use atrium_app::throttle::{ThrottleDecision, ThrottleKey};
use salvo::{
    http::{Method, header::RETRY_AFTER},
    prelude::*,
};
use tracing::error;

use crate::{extensions::*, state::State};

/// Builds a guard counting mutations under the given operation scope.
pub(crate) fn guard(scope: &'static str) -> ThrottleGuard {
    ThrottleGuard { scope }
}

pub(crate) struct ThrottleGuard {
    scope: &'static str,
}

#[salvo::async_trait]
impl Handler for ThrottleGuard {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        if !is_mutation(req.method()) {
            ctrl.call_next(req, depot, res).await;

            return;
        }

        let operation = format!("{}:{}", self.scope, req.method().as_str().to_ascii_lowercase());

        let state = match depot.obtain_or_500::<Arc<State>>() {
            Ok(state) => state.clone(),
            Err(status) => {
                res.render(status);

                return;
            }
        };

        let user = match depot.auth_user_or_401() {
            Ok(user) => user.user_uuid,
            Err(status) => {
                res.render(status);

                return;
            }
        };

        let workspace = match depot.workspace_uuid_or_403() {
            Ok(workspace) => workspace,
            Err(status) => {
                res.render(status);

                return;
            }
        };

        let decision = state.throttle.check(ThrottleKey {
            workspace,
            user,
            operation,
        });

        match decision {
            ThrottleDecision::Allowed => {
                ctrl.call_next(req, depot, res).await;
            }
            ThrottleDecision::Limited { retry_after } => {
                let seconds = retry_after.as_secs().max(1);

                if let Err(header_error) =
                    res.add_header(RETRY_AFTER, seconds.to_string(), true)
                {
                    error!("failed to set retry-after header: {header_error}");
                }

                res.render(
                    StatusError::too_many_requests()
                        .brief("Mutation quota exceeded for this workspace"),
                );
            }
        }
    }
}

fn is_mutation(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}
