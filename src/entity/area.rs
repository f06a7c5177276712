use serde::Serialize;

use crate::entity::common::LifeSpan;
use crate::entity::{EntityKind, SearchEntity};
use crate::error::DecodeError;
use crate::xml::XmlElement;

/// A country, subdivision, city or other geographic area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub id: String,
    pub area_type: Option<String>,
    pub name: String,
    pub sort_name: String,
    pub iso_3166_1_codes: Vec<String>,
    pub life_span: Option<LifeSpan>,
}

impl SearchEntity for Area {
    const KIND: EntityKind = EntityKind::Area;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError> {
        Ok(Self {
            id: element.required_attr("id")?.to_string(),
            area_type: element.attr("type").map(ToOwned::to_owned),
            name: element.child_text_or_default("name"),
            sort_name: element.child_text_or_default("sort-name"),
            iso_3166_1_codes: element
                .list_items("iso-3166-1-code-list", "iso-3166-1-code")
                .into_iter()
                .map(|code| code.text.trim().to_string())
                .collect(),
            life_span: LifeSpan::from_parent(element),
        })
    }

    fn score_key(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        match &self.area_type {
            Some(area_type) => format!("{} [{area_type}]", self.name),
            None => self.name.clone(),
        }
    }
}
