//! Soft-delete visibility query parsing helpers.

use atrium_app::database::Visibility;
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

pub(crate) trait VisibilityExt {
    /// Parses the optional `visibility` query parameter, defaulting to
    /// active rows only.
    fn into_visibility(self) -> Result<Visibility, StatusError>;
}

impl VisibilityExt for QueryParam<String, false> {
    fn into_visibility(self) -> Result<Visibility, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<Visibility>())
            .transpose()
            .or_400("could not parse \"visibility\" query parameter")
            .map(Option::unwrap_or_default)
    }
}
