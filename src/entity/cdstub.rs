use serde::Serialize;

use crate::entity::{EntityKind, SearchEntity};
use crate::error::DecodeError;
use crate::xml::XmlElement;

/// An anonymously submitted disc listing, keyed by its disc ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CdStub {
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub barcode: Option<String>,
    pub comment: Option<String>,
    pub track_count: Option<u32>,
}

impl SearchEntity for CdStub {
    const KIND: EntityKind = EntityKind::CdStub;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError> {
        let track_count = match element.child("track-list") {
            Some(tracks) => tracks.number_attr("count")?,
            None => None,
        };
        Ok(Self {
            id: element.required_attr("id")?.to_string(),
            title: element.child_text_or_default("title"),
            artist: element.child_text("artist"),
            barcode: element.child_text("barcode"),
            comment: element.child_text("comment"),
            track_count,
        })
    }

    fn score_key(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        let title = match &self.artist {
            Some(artist) => format!("{artist} - {}", self.title),
            None => self.title.clone(),
        };
        match self.track_count {
            Some(count) => format!("{title} ({count} tracks)"),
            None => title,
        }
    }
}
