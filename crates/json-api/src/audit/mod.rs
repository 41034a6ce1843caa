//! Audit Log Endpoints

mod handlers;

pub(crate) use handlers::*;
