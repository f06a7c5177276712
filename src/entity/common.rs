//! Value types shared by several entity kinds.

use serde::Serialize;

use crate::error::DecodeError;
use crate::xml::XmlElement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LifeSpan {
    pub begin: Option<String>,
    pub end: Option<String>,
    pub ended: bool,
}

impl LifeSpan {
    pub fn from_parent(parent: &XmlElement) -> Option<Self> {
        let element = parent.child("life-span")?;
        Some(Self {
            begin: element.child_text("begin"),
            end: element.child_text("end"),
            ended: element.child_text("ended").as_deref() == Some("true"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub name: String,
    pub sort_name: Option<String>,
    pub locale: Option<String>,
    pub alias_type: Option<String>,
    pub primary: bool,
}

impl Alias {
    pub fn list_from_parent(parent: &XmlElement) -> Vec<Self> {
        parent
            .list_items("alias-list", "alias")
            .into_iter()
            .map(|alias| Self {
                name: alias.text.trim().to_string(),
                sort_name: alias.attr("sort-name").map(ToOwned::to_owned),
                locale: alias.attr("locale").map(ToOwned::to_owned),
                alias_type: alias.attr("type").map(ToOwned::to_owned),
                primary: alias.attr("primary") == Some("primary"),
            })
            .collect()
    }
}

/// Folksonomy tag attached to an entity, with its vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: Option<i32>,
}

impl TagCount {
    pub fn list_from_parent(parent: &XmlElement) -> Result<Vec<Self>, DecodeError> {
        parent
            .list_items("tag-list", "tag")
            .into_iter()
            .map(|tag| -> Result<Self, DecodeError> {
                Ok(Self {
                    name: tag.child_text_or_default("name"),
                    count: tag.number_attr("count")?,
                })
            })
            .collect()
    }
}

/// Area reference nested inside artists, labels and places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaRef {
    pub id: String,
    pub name: String,
    pub sort_name: Option<String>,
}

impl AreaRef {
    pub fn from_child(parent: &XmlElement, name: &str) -> Option<Self> {
        let element = parent.child(name)?;
        Some(Self {
            id: element.attr("id").unwrap_or_default().to_string(),
            name: element.child_text_or_default("name"),
            sort_name: element.child_text("sort-name"),
        })
    }
}

/// One artist in an artist credit, with the phrase joining it to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCredit {
    pub artist_id: String,
    pub artist_name: String,
    pub credited_name: Option<String>,
    pub join_phrase: Option<String>,
}

impl NameCredit {
    pub fn list_from_parent(parent: &XmlElement) -> Vec<Self> {
        let Some(credit) = parent.child("artist-credit") else {
            return Vec::new();
        };
        credit
            .children_named("name-credit")
            .map(|name_credit| {
                let artist = name_credit.child("artist");
                Self {
                    artist_id: artist
                        .and_then(|artist| artist.attr("id"))
                        .unwrap_or_default()
                        .to_string(),
                    artist_name: artist
                        .map(|artist| artist.child_text_or_default("name"))
                        .unwrap_or_default(),
                    credited_name: name_credit.child_text("name"),
                    join_phrase: name_credit.attr("joinphrase").map(ToOwned::to_owned),
                }
            })
            .collect()
    }
}

/// Renders an artist credit the way it is printed on a release.
pub fn credit_display(credits: &[NameCredit]) -> String {
    let mut out = String::new();
    for credit in credits {
        out.push_str(credit.credited_name.as_deref().unwrap_or(&credit.artist_name));
        if let Some(join_phrase) = &credit.join_phrase {
            out.push_str(join_phrase);
        }
    }
    out
}

/// Appends ` (disambiguation)` when present.
pub(crate) fn with_disambiguation(name: &str, disambiguation: Option<&str>) -> String {
    match disambiguation {
        Some(comment) => format!("{name} ({comment})"),
        None => name.to_string(),
    }
}
