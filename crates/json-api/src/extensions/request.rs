//! Request helper extensions.

use atrium_app::{actor::Actor, auth::AuthenticatedUser};
use salvo::{
    http::header::{AUTHORIZATION, USER_AGENT},
    prelude::Request,
};

/// Transport-level request helpers.
pub(crate) trait RequestExt {
    /// Extracts the RFC 6750 bearer token, if present and well-formed.
    fn bearer_token(&self) -> Option<&str>;

    /// Builds the audit actor from request transport metadata.
    fn actor(&self, user: &AuthenticatedUser) -> Actor;
}

impl RequestExt for Request {
    fn bearer_token(&self) -> Option<&str> {
        let value = self.headers().get(AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = value.split_once(' ')?;
        let token = token.trim();

        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return None;
        }

        Some(token)
    }

    fn actor(&self, user: &AuthenticatedUser) -> Actor {
        Actor {
            user_uuid: Some(user.user_uuid),
            ip: Some(self.remote_addr().to_string()),
            user_agent: self
                .headers()
                .get(USER_AGENT)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned),
        }
    }
}
