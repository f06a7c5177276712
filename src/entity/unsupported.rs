//! Entity kinds whose searches are declared but not supported by this client.
//!
//! The types exist so the corresponding client methods have a concrete
//! response type; they do not implement `SearchEntity`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreedbDisc {
    pub id: String,
    pub category: String,
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recording {
    pub id: String,
    pub title: String,
    pub length_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Work {
    pub id: String,
    pub title: String,
    pub work_type: Option<String>,
}
