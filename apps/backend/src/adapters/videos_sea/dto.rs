//! Write payloads for the video adapter.

/// Fields persisted for an author row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonWrite {
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Fields persisted for a video row, together with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoWrite {
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: PersonWrite,
}
