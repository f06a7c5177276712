use serde::Serialize;

use crate::entity::{EntityKind, SearchEntity};
use crate::error::DecodeError;
use crate::xml::XmlElement;

/// A folksonomy tag. The tag name is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
}

impl SearchEntity for Tag {
    const KIND: EntityKind = EntityKind::Tag;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError> {
        let name = element
            .child_text("name")
            .ok_or_else(|| DecodeError::MissingElement("name".to_string()))?;
        Ok(Self { name })
    }

    fn score_key(&self) -> &str {
        &self.name
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
