//! Test helpers.

use std::{sync::Arc, time::Duration};

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use serde_json::json;
use uuid::Uuid;

use atrium_app::{
    audit::{
        MockAuditService,
        records::{AuditAction, AuditEntryUuid, AuditLogEntry},
    },
    auth::{AuthenticatedUser, MockAuthService},
    context::AppContext,
    domain::{
        investments::{MockInvestmentsService, records::{InvestmentRecord, InvestmentUuid}},
        leads::{
            MockLeadsService,
            records::{LeadRecord, LeadStatus, LeadUuid},
        },
        notes::{MockNotesService, records::{NoteRecord, NoteUuid}},
        users::records::UserUuid,
        workspaces::{MockWorkspacesService, records::WorkspaceUuid},
    },
    throttle::ThrottleGate,
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_WORKSPACE_UUID: WorkspaceUuid = WorkspaceUuid::from_uuid(Uuid::nil());
pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(1));

pub(crate) fn member_user() -> AuthenticatedUser {
    AuthenticatedUser {
        user_uuid: TEST_USER_UUID,
        workspace_uuid: Some(TEST_WORKSPACE_UUID),
        superuser: false,
    }
}

pub(crate) fn superuser_without_workspace() -> AuthenticatedUser {
    AuthenticatedUser {
        user_uuid: TEST_USER_UUID,
        workspace_uuid: None,
        superuser: true,
    }
}

/// Injects the default member identity and resolved workspace, standing in
/// for the auth and tenancy middleware in handler tests.
#[salvo::handler]
pub(crate) async fn inject_identity(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_auth_user(member_user());
    depot.insert_workspace_uuid(TEST_WORKSPACE_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// Injects an arbitrary authenticated user without resolving a workspace.
pub(crate) struct InjectAuthUser(pub(crate) AuthenticatedUser);

#[salvo::async_trait]
impl Handler for InjectAuthUser {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_auth_user(self.0.clone());
        ctrl.call_next(req, depot, res).await;
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_workspaces_mock() -> MockWorkspacesService {
    let mut workspaces = MockWorkspacesService::new();

    workspaces.expect_create_workspace().never();
    workspaces.expect_get_workspace().never();
    workspaces.expect_find_active_by_slug().never();
    workspaces.expect_deactivate_workspace().never();
    workspaces.expect_provision_admin_workspace().never();

    workspaces
}

fn strict_leads_mock() -> MockLeadsService {
    let mut leads = MockLeadsService::new();

    leads.expect_list_leads().never();
    leads.expect_get_lead().never();
    leads.expect_create_lead().never();
    leads.expect_update_lead().never();
    leads.expect_delete_lead().never();
    leads.expect_restore_lead().never();

    leads
}

fn strict_notes_mock() -> MockNotesService {
    let mut notes = MockNotesService::new();

    notes.expect_list_notes().never();
    notes.expect_get_note().never();
    notes.expect_create_note().never();
    notes.expect_update_note().never();
    notes.expect_delete_note().never();
    notes.expect_restore_note().never();

    notes
}

fn strict_investments_mock() -> MockInvestmentsService {
    let mut investments = MockInvestmentsService::new();

    investments.expect_list_investments().never();
    investments.expect_get_investment().never();
    investments.expect_create_investment().never();
    investments.expect_update_investment().never();
    investments.expect_delete_investment().never();
    investments.expect_restore_investment().never();

    investments
}

fn strict_audit_mock() -> MockAuditService {
    let mut audit = MockAuditService::new();

    audit.expect_list_entries().never();

    audit
}

struct Mocks {
    auth: MockAuthService,
    workspaces: MockWorkspacesService,
    leads: MockLeadsService,
    notes: MockNotesService,
    investments: MockInvestmentsService,
    audit: MockAuditService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            auth: strict_auth_mock(),
            workspaces: strict_workspaces_mock(),
            leads: strict_leads_mock(),
            notes: strict_notes_mock(),
            investments: strict_investments_mock(),
            audit: strict_audit_mock(),
        }
    }
}

fn state_from(mocks: Mocks, throttle: ThrottleGate) -> Arc<State> {
    let app = AppContext {
        auth: Arc::new(mocks.auth),
        workspaces: Arc::new(mocks.workspaces),
        leads: Arc::new(mocks.leads),
        notes: Arc::new(mocks.notes),
        investments: Arc::new(mocks.investments),
        audit: Arc::new(mocks.audit),
    };

    Arc::new(State::new(app, throttle))
}

// A zero limit disables throttling so handler tests never trip the gate.
fn unthrottled() -> ThrottleGate {
    ThrottleGate::new(0, Duration::from_secs(3600))
}

pub(crate) fn throttled_state(limit: u32) -> Arc<State> {
    state_from(
        Mocks::default(),
        ThrottleGate::new(limit, Duration::from_secs(3600)),
    )
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_from(
        Mocks {
            auth,
            ..Mocks::default()
        },
        unthrottled(),
    )
}

pub(crate) fn state_with_workspaces(workspaces: MockWorkspacesService) -> Arc<State> {
    state_from(
        Mocks {
            workspaces,
            ..Mocks::default()
        },
        unthrottled(),
    )
}

pub(crate) fn state_with_leads(leads: MockLeadsService) -> Arc<State> {
    state_from(
        Mocks {
            leads,
            ..Mocks::default()
        },
        unthrottled(),
    )
}

pub(crate) fn state_with_notes(notes: MockNotesService) -> Arc<State> {
    state_from(
        Mocks {
            notes,
            ..Mocks::default()
        },
        unthrottled(),
    )
}

pub(crate) fn state_with_investments(investments: MockInvestmentsService) -> Arc<State> {
    state_from(
        Mocks {
            investments,
            ..Mocks::default()
        },
        unthrottled(),
    )
}

pub(crate) fn state_with_audit(audit: MockAuditService) -> Arc<State> {
    state_from(
        Mocks {
            audit,
            ..Mocks::default()
        },
        unthrottled(),
    )
}

fn scoped_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_identity)
            .push(route),
    )
}

pub(crate) fn leads_service(leads: MockLeadsService, route: Router) -> Service {
    scoped_service(state_with_leads(leads), route)
}

pub(crate) fn notes_service(notes: MockNotesService, route: Router) -> Service {
    scoped_service(state_with_notes(notes), route)
}

pub(crate) fn investments_service(investments: MockInvestmentsService, route: Router) -> Service {
    scoped_service(state_with_investments(investments), route)
}

pub(crate) fn audit_service(audit: MockAuditService, route: Router) -> Service {
    scoped_service(state_with_audit(audit), route)
}

pub(crate) fn make_lead(uuid: LeadUuid) -> LeadRecord {
    LeadRecord {
        uuid,
        workspace_uuid: TEST_WORKSPACE_UUID,
        name: "Ana Souza".to_string(),
        email: Some("ana@example.com".to_string()),
        phone: None,
        status: LeadStatus::New,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_note(uuid: NoteUuid) -> NoteRecord {
    NoteRecord {
        uuid,
        workspace_uuid: TEST_WORKSPACE_UUID,
        title: "Kickoff".to_string(),
        body: "Client prefers calls after 14h".to_string(),
        pinned: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_investment(uuid: InvestmentUuid) -> InvestmentRecord {
    InvestmentRecord {
        uuid,
        workspace_uuid: TEST_WORKSPACE_UUID,
        ticker: "PETR4".to_string(),
        quantity: 100,
        invested_cents: 350_000,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_audit_entry(entity_uuid: Uuid) -> AuditLogEntry {
    AuditLogEntry {
        uuid: AuditEntryUuid::new(),
        workspace_uuid: TEST_WORKSPACE_UUID,
        actor_uuid: Some(TEST_USER_UUID),
        action: AuditAction::Update,
        entity_kind: "lead".to_string(),
        entity_uuid,
        field_name: "status".to_string(),
        old_value: Some(json!("new")),
        new_value: Some(json!("contacted")),
        personal_data: false,
        ip: None,
        user_agent: None,
        recorded_at: Timestamp::UNIX_EPOCH,
    }
}
