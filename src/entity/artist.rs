use serde::Serialize;

use crate::entity::common::{with_disambiguation, Alias, AreaRef, LifeSpan, TagCount};
use crate::entity::{EntityKind, SearchEntity};
use crate::error::DecodeError;
use crate::xml::XmlElement;

/// A musician, group or other credited artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub id: String,
    pub artist_type: Option<String>,
    pub name: String,
    pub sort_name: String,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub area: Option<AreaRef>,
    pub begin_area: Option<AreaRef>,
    pub disambiguation: Option<String>,
    pub life_span: Option<LifeSpan>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<TagCount>,
}

impl SearchEntity for Artist {
    const KIND: EntityKind = EntityKind::Artist;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError> {
        Ok(Self {
            id: element.required_attr("id")?.to_string(),
            artist_type: element.attr("type").map(ToOwned::to_owned),
            name: element.child_text_or_default("name"),
            sort_name: element.child_text_or_default("sort-name"),
            gender: element.child_text("gender"),
            country: element.child_text("country"),
            area: AreaRef::from_child(element, "area"),
            begin_area: AreaRef::from_child(element, "begin-area"),
            disambiguation: element.child_text("disambiguation"),
            life_span: LifeSpan::from_parent(element),
            aliases: Alias::list_from_parent(element),
            tags: TagCount::list_from_parent(element)?,
        })
    }

    fn score_key(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        with_disambiguation(&self.name, self.disambiguation.as_deref())
    }
}
