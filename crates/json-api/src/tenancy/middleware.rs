//! Tenancy middleware.
//!
//! Resolves the workspace every scoped query runs against, in priority
//! order: explicit header selection, the user's own workspace, then
//! superuser auto-provisioning. Requests with no resolvable workspace are
//! denied.

use std::sync::Arc;

use atrium_app::{
    auth::AuthenticatedUser,
    domain::workspaces::{errors::WorkspacesServiceError, records::WorkspaceUuid},
};
use salvo::prelude::*;
use tracing::error;

use crate::{extensions::*, state::State};

/// Header carrying an explicit workspace slug.
pub(crate) const WORKSPACE_HEADER: &str = "x-workspace";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let user = match depot.auth_user_or_401() {
        Ok(user) => user.clone(),
        Err(status) => {
            res.render(status);

            return;
        }
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state.clone(),
        Err(status) => {
            res.render(status);

            return;
        }
    };

    let header_slug = req
        .headers()
        .get(WORKSPACE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .map(str::to_owned);

    let resolved = match resolve(&state, &user, header_slug.as_deref()).await {
        Ok(resolved) => resolved,
        Err(source) => {
            error!("failed to resolve workspace: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let Some(workspace) = resolved else {
        res.render(StatusError::forbidden().brief("No workspace resolved for this request"));

        return;
    };

    depot.insert_workspace_uuid(workspace);

    ctrl.call_next(req, depot, res).await;
}

async fn resolve(
    state: &State,
    user: &AuthenticatedUser,
    header_slug: Option<&str>,
) -> Result<Option<WorkspaceUuid>, WorkspacesServiceError> {
    if let Some(slug) = header_slug {
        let Some(workspace) = state.app.workspaces.find_active_by_slug(slug).await? else {
            return Ok(None);
        };

        // Non-superusers may only select their own workspace; a mismatch is
        // indistinguishable from an unknown slug.
        if user.superuser || user.workspace_uuid == Some(workspace.uuid) {
            return Ok(Some(workspace.uuid));
        }

        return Ok(None);
    }

    if let Some(workspace) = user.workspace_uuid {
        return Ok(Some(workspace));
    }

    if user.superuser {
        let workspace = state
            .app
            .workspaces
            .provision_admin_workspace(user.user_uuid)
            .await?;

        return Ok(Some(workspace.uuid));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use atrium_app::domain::workspaces::MockWorkspacesService;
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use atrium_app::domain::workspaces::records::WorkspaceRecord;

    use crate::test_helpers::{
        InjectAuthUser, TEST_USER_UUID, TEST_WORKSPACE_UUID, member_user, state_with_workspaces,
        superuser_without_workspace,
    };

    use super::*;

    fn make_workspace(uuid: WorkspaceUuid, slug: &str) -> WorkspaceRecord {
        WorkspaceRecord {
            uuid,
            slug: slug.to_string(),
            name: slug.to_string(),
            active: true,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[salvo::handler]
    async fn echo_workspace(depot: &mut Depot, res: &mut Response) {
        match depot.workspace_uuid_or_403() {
            Ok(workspace) => res.render(workspace.to_string()),
            Err(status) => res.render(status),
        }
    }

    fn make_service(workspaces: MockWorkspacesService, user: AuthenticatedUser) -> Service {
        let state = state_with_workspaces(workspaces);

        let router = Router::new()
            .hoop(salvo::affix_state::inject(state))
            .hoop(InjectAuthUser(user))
            .hoop(handler)
            .push(Router::new().get(echo_workspace));

        Service::new(router)
    }

    #[tokio::test]
    async fn test_member_resolves_own_workspace() -> TestResult {
        let mut workspaces = MockWorkspacesService::new();

        workspaces.expect_find_active_by_slug().never();
        workspaces.expect_provision_admin_workspace().never();

        let mut res = TestClient::get("http://example.com")
            .send(&make_service(workspaces, member_user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, TEST_WORKSPACE_UUID.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_member_without_workspace_is_forbidden() -> TestResult {
        let mut workspaces = MockWorkspacesService::new();

        workspaces.expect_provision_admin_workspace().never();

        let mut user = member_user();
        user.workspace_uuid = None;

        let res = TestClient::get("http://example.com")
            .send(&make_service(workspaces, user))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_header_selecting_own_workspace_resolves() -> TestResult {
        let mut workspaces = MockWorkspacesService::new();

        workspaces
            .expect_find_active_by_slug()
            .once()
            .withf(|slug| slug == "acme")
            .return_once(|_| Ok(Some(make_workspace(TEST_WORKSPACE_UUID, "acme"))));

        let mut res = TestClient::get("http://example.com")
            .add_header(WORKSPACE_HEADER, "acme", true)
            .send(&make_service(workspaces, member_user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, TEST_WORKSPACE_UUID.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_header_selecting_foreign_workspace_is_forbidden() -> TestResult {
        let foreign = WorkspaceUuid::new();

        let mut workspaces = MockWorkspacesService::new();

        workspaces
            .expect_find_active_by_slug()
            .once()
            .withf(|slug| slug == "other")
            .return_once(move |_| Ok(Some(make_workspace(foreign, "other"))));

        let res = TestClient::get("http://example.com")
            .add_header(WORKSPACE_HEADER, "other", true)
            .send(&make_service(workspaces, member_user()))
            .await;

        // Indistinguishable from an unknown slug: no existence leak.
        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_header_with_unknown_slug_is_forbidden() -> TestResult {
        let mut workspaces = MockWorkspacesService::new();

        workspaces
            .expect_find_active_by_slug()
            .once()
            .return_once(|_| Ok(None));

        let res = TestClient::get("http://example.com")
            .add_header(WORKSPACE_HEADER, "ghost", true)
            .send(&make_service(workspaces, member_user()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_superuser_header_selects_any_workspace() -> TestResult {
        let foreign = WorkspaceUuid::new();

        let mut workspaces = MockWorkspacesService::new();

        workspaces
            .expect_find_active_by_slug()
            .once()
            .withf(|slug| slug == "other")
            .return_once(move |_| Ok(Some(make_workspace(foreign, "other"))));

        let mut user = superuser_without_workspace();
        user.workspace_uuid = Some(TEST_WORKSPACE_UUID);

        let mut res = TestClient::get("http://example.com")
            .add_header(WORKSPACE_HEADER, "other", true)
            .send(&make_service(workspaces, user))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, foreign.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_superuser_without_workspace_provisions_one() -> TestResult {
        let provisioned = WorkspaceUuid::new();

        let mut workspaces = MockWorkspacesService::new();

        workspaces.expect_find_active_by_slug().never();
        workspaces
            .expect_provision_admin_workspace()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(make_workspace(provisioned, "admin")));

        let mut res = TestClient::get("http://example.com")
            .send(&make_service(workspaces, superuser_without_workspace()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, provisioned.to_string());

        Ok(())
    }
}
