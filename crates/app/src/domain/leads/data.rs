//! Lead Data

use crate::domain::leads::records::{LeadStatus, LeadUuid};

/// New Lead Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub uuid: LeadUuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: LeadStatus,
}

/// Lead Update Data
///
/// Full replacement of the mutable fields; identity and timestamps are
/// managed by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadUpdate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: LeadStatus,
}
