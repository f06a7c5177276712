use serde::Serialize;

use crate::entity::{EntityKind, SearchEntity};
use crate::error::DecodeError;
use crate::xml::XmlElement;

/// Free-text annotation attached to another entity.
///
/// Annotations carry no MBID of their own; `entity` is the MBID of the
/// annotated entity and doubles as the score key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub annotation_type: Option<String>,
    pub entity: String,
    pub name: String,
    pub text: String,
}

impl SearchEntity for Annotation {
    const KIND: EntityKind = EntityKind::Annotation;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError> {
        let entity = element
            .child_text("entity")
            .ok_or_else(|| DecodeError::MissingElement("entity".to_string()))?;
        Ok(Self {
            annotation_type: element.attr("type").map(ToOwned::to_owned),
            entity,
            name: element.child_text_or_default("name"),
            text: element.child_text_or_default("text"),
        })
    }

    fn score_key(&self) -> &str {
        &self.entity
    }

    fn label(&self) -> String {
        match &self.annotation_type {
            Some(annotation_type) => format!("{} [{annotation_type}]", self.name),
            None => self.name.clone(),
        }
    }
}
