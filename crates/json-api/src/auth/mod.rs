//! Bearer authentication middleware.

pub(crate) mod middleware;
