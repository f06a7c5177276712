//! Searchable WS2 entity kinds and their XML mappings.

pub mod annotation;
pub mod area;
pub mod artist;
pub mod cdstub;
pub mod common;
pub mod label;
pub mod place;
pub mod release;
pub mod release_group;
pub mod tag;
pub mod unsupported;

use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::xml::XmlElement;

pub use annotation::Annotation;
pub use area::Area;
pub use artist::Artist;
pub use cdstub::CdStub;
pub use label::Label;
pub use place::Place;
pub use release::Release;
pub use release_group::ReleaseGroup;
pub use tag::Tag;
pub use unsupported::{FreedbDisc, Recording, Work};

/// Every entity kind the search API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Annotation,
    Area,
    Artist,
    Release,
    ReleaseGroup,
    Tag,
    CdStub,
    Freedb,
    Label,
    Place,
    Recording,
    Work,
}

impl EntityKind {
    pub const ALL: [EntityKind; 12] = [
        Self::Annotation,
        Self::Area,
        Self::Artist,
        Self::Release,
        Self::ReleaseGroup,
        Self::Tag,
        Self::CdStub,
        Self::Freedb,
        Self::Label,
        Self::Place,
        Self::Recording,
        Self::Work,
    ];

    /// XML element name of one entity, also the endpoint path segment.
    pub fn element_name(self) -> &'static str {
        match self {
            Self::Annotation => "annotation",
            Self::Area => "area",
            Self::Artist => "artist",
            Self::Release => "release",
            Self::ReleaseGroup => "release-group",
            Self::Tag => "tag",
            Self::CdStub => "cdstub",
            Self::Freedb => "freedb",
            Self::Label => "label",
            Self::Place => "place",
            Self::Recording => "recording",
            Self::Work => "work",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Annotation => "/annotation",
            Self::Area => "/area",
            Self::Artist => "/artist",
            Self::Release => "/release",
            Self::ReleaseGroup => "/release-group",
            Self::Tag => "/tag",
            Self::CdStub => "/cdstub",
            Self::Freedb => "/freedb",
            Self::Label => "/label",
            Self::Place => "/place",
            Self::Recording => "/recording",
            Self::Work => "/work",
        }
    }

    /// Name of the list element wrapping search results, e.g. `artist-list`.
    pub fn list_element(self) -> &'static str {
        match self {
            Self::Annotation => "annotation-list",
            Self::Area => "area-list",
            Self::Artist => "artist-list",
            Self::Release => "release-list",
            Self::ReleaseGroup => "release-group-list",
            Self::Tag => "tag-list",
            Self::CdStub => "cdstub-list",
            Self::Freedb => "freedb-disc-list",
            Self::Label => "label-list",
            Self::Place => "place-list",
            Self::Recording => "recording-list",
            Self::Work => "work-list",
        }
    }

    /// Freedb, recording and work searches are declared but not supported.
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Freedb | Self::Recording | Self::Work)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.element_name() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|kind| kind.element_name()).collect();
                format!("unknown entity kind '{value}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Per-entity descriptor used by the generic search routine.
///
/// `KIND` selects the endpoint and the element names; `from_xml` maps one
/// scored child element; `score_key` is the stable identity the score map is
/// keyed by.
pub trait SearchEntity: Sized {
    const KIND: EntityKind;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError>;

    fn score_key(&self) -> &str;

    /// Short human-readable description.
    fn label(&self) -> String;
}
