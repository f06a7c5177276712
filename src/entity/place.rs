use serde::Serialize;

use crate::entity::common::{with_disambiguation, AreaRef, LifeSpan};
use crate::entity::{EntityKind, SearchEntity};
use crate::error::DecodeError;
use crate::xml::XmlElement;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A venue, studio or other physical location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub id: String,
    pub place_type: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub area: Option<AreaRef>,
    pub disambiguation: Option<String>,
    pub life_span: Option<LifeSpan>,
}

fn coordinates_from_parent(parent: &XmlElement) -> Result<Option<Coordinates>, DecodeError> {
    let Some(element) = parent.child("coordinates") else {
        return Ok(None);
    };
    let latitude = element.child_number::<f64>("latitude")?;
    let longitude = element.child_number::<f64>("longitude")?;
    Ok(latitude
        .zip(longitude)
        .map(|(latitude, longitude)| Coordinates {
            latitude,
            longitude,
        }))
}

impl SearchEntity for Place {
    const KIND: EntityKind = EntityKind::Place;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError> {
        Ok(Self {
            id: element.required_attr("id")?.to_string(),
            place_type: element.attr("type").map(ToOwned::to_owned),
            name: element.child_text_or_default("name"),
            address: element.child_text("address"),
            coordinates: coordinates_from_parent(element)?,
            area: AreaRef::from_child(element, "area"),
            disambiguation: element.child_text("disambiguation"),
            life_span: LifeSpan::from_parent(element),
        })
    }

    fn score_key(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        let name = with_disambiguation(&self.name, self.disambiguation.as_deref());
        match &self.address {
            Some(address) => format!("{name}, {address}"),
            None => name,
        }
    }
}
