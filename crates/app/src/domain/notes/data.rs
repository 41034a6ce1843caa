//! Note Data

use crate::domain::notes::records::NoteUuid;

/// New Note Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub uuid: NoteUuid,
    pub title: String,
    pub body: String,
    pub pinned: bool,
}

/// Note Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct NoteUpdate {
    pub title: String,
    pub body: String,
    pub pinned: bool,
}
