use serde::Serialize;

use crate::entity::common::{with_disambiguation, Alias, AreaRef, LifeSpan, TagCount};
use crate::entity::{EntityKind, SearchEntity};
use crate::error::DecodeError;
use crate::xml::XmlElement;

/// A record label, imprint or distributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub id: String,
    pub label_type: Option<String>,
    pub name: String,
    pub sort_name: String,
    pub label_code: Option<u32>,
    pub country: Option<String>,
    pub area: Option<AreaRef>,
    pub disambiguation: Option<String>,
    pub life_span: Option<LifeSpan>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<TagCount>,
}

impl SearchEntity for Label {
    const KIND: EntityKind = EntityKind::Label;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError> {
        Ok(Self {
            id: element.required_attr("id")?.to_string(),
            label_type: element.attr("type").map(ToOwned::to_owned),
            name: element.child_text_or_default("name"),
            sort_name: element.child_text_or_default("sort-name"),
            label_code: element.child_number("label-code")?,
            country: element.child_text("country"),
            area: AreaRef::from_child(element, "area"),
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
        let name = with_disambiguation(&self.name, self.disambiguation.as_deref());
        match self.label_code {
            Some(code) => format!("{name} LC {code:05}"),
            None => name,
        }
    }
}
