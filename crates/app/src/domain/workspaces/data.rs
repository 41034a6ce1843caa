//! Workspace Data

use crate::domain::{users::records::UserUuid, workspaces::records::WorkspaceUuid};

/// New Workspace Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkspace {
    /// UUID to assign to the workspace row.
    pub uuid: WorkspaceUuid,

    /// Unique slug to persist.
    pub slug: String,

    /// Workspace name to persist.
    pub name: String,
}

/// Deterministic slug of the workspace auto-provisioned for a superuser.
///
/// The uniqueness constraint on this slug is what makes concurrent
/// provisioning for the same user collapse onto a single row.
#[must_use]
pub fn admin_slug(user: UserUuid) -> String {
    format!("admin-{}", user.into_uuid().simple())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn admin_slug_is_deterministic_per_user() {
        let user = UserUuid::from_uuid(Uuid::nil());

        assert_eq!(admin_slug(user), admin_slug(user));
        assert_eq!(
            admin_slug(user),
            "admin-00000000000000000000000000000000"
        );
    }

    #[test]
    fn admin_slug_differs_per_user() {
        assert_ne!(admin_slug(UserUuid::new()), admin_slug(UserUuid::new()));
    }
}
