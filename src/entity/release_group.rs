use serde::Serialize;

use crate::entity::common::{credit_display, NameCredit, TagCount};
use crate::entity::{EntityKind, SearchEntity};
use crate::error::DecodeError;
use crate::xml::XmlElement;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseRef {
    pub id: String,
    pub title: String,
    pub status: Option<String>,
}

/// Groups every release of one logical album, single or EP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseGroup {
    pub id: String,
    pub group_type: Option<String>,
    pub primary_type: Option<String>,
    pub secondary_types: Vec<String>,
    pub title: String,
    pub first_release_date: Option<String>,
    pub artist_credit: Vec<NameCredit>,
    pub releases: Vec<ReleaseRef>,
    pub tags: Vec<TagCount>,
}

impl SearchEntity for ReleaseGroup {
    const KIND: EntityKind = EntityKind::ReleaseGroup;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError> {
        Ok(Self {
            id: element.required_attr("id")?.to_string(),
            group_type: element.attr("type").map(ToOwned::to_owned),
            primary_type: element.child_text("primary-type"),
            secondary_types: element
                .list_items("secondary-type-list", "secondary-type")
                .into_iter()
                .map(|secondary| secondary.text.trim().to_string())
                .collect(),
            title: element.child_text_or_default("title"),
            first_release_date: element.child_text("first-release-date"),
            artist_credit: NameCredit::list_from_parent(element),
            releases: element
                .list_items("release-list", "release")
                .into_iter()
                .map(|release| ReleaseRef {
                    id: release.attr("id").unwrap_or_default().to_string(),
                    title: release.child_text_or_default("title"),
                    status: release.child_text("status"),
                })
                .collect(),
            tags: TagCount::list_from_parent(element)?,
        })
    }

    fn score_key(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        let credit = credit_display(&self.artist_credit);
        let kind = self
            .primary_type
            .as_deref()
            .or(self.group_type.as_deref())
            .unwrap_or("Other");
        if credit.is_empty() {
            format!("{} ({kind})", self.title)
        } else {
            format!("{credit} - {} ({kind})", self.title)
        }
    }
}
