//! App Router

use salvo::Router;

use crate::{audit, auth, investments, leads, notes, tenancy, throttle};

/// Routes requiring bearer authentication and workspace resolution.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .hoop(tenancy::middleware::handler)
        .push(
            Router::with_path("leads")
                .hoop(throttle::guard("leads"))
                .get(leads::index::handler)
                .post(leads::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(leads::get::handler)
                        .put(leads::update::handler)
                        .delete(leads::delete::handler)
                        .push(Router::with_path("restore").post(leads::restore::handler)),
                ),
        )
        .push(
            Router::with_path("notes")
                .hoop(throttle::guard("notes"))
                .get(notes::index::handler)
                .post(notes::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(notes::get::handler)
                        .put(notes::update::handler)
                        .delete(notes::delete::handler)
                        .push(Router::with_path("restore").post(notes::restore::handler)),
                ),
        )
        .push(
            Router::with_path("investments")
                .hoop(throttle::guard("investments"))
                .get(investments::index::handler)
                .post(investments::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(investments::get::handler)
                        .put(investments::update::handler)
                        .delete(investments::delete::handler)
                        .push(
                            Router::with_path("restore").post(investments::restore::handler),
                        ),
                ),
        )
        .push(Router::with_path("audit-log").get(audit::index::handler))
}
