//! Request actor recorded against audit entries.

use crate::domain::users::records::UserUuid;

/// Who performed a mutation, and from where.
///
/// Attached to every audit entry. The user uuid is absent for operator
/// invocations that do not flow through HTTP authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
    pub user_uuid: Option<UserUuid>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl Actor {
    /// Actor for CLI and maintenance invocations with no request attached.
    #[must_use]
    pub fn system() -> Self {
        Self::default()
    }

    /// Actor acting as the given user, without transport metadata.
    #[must_use]
    pub fn user(user_uuid: UserUuid) -> Self {
        Self {
            user_uuid: Some(user_uuid),
            ..Self::default()
        }
    }
}
