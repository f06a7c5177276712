use serde::Serialize;

use crate::entity::common::{credit_display, with_disambiguation, NameCredit};
use crate::entity::{EntityKind, SearchEntity};
use crate::error::DecodeError;
use crate::xml::XmlElement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextRepresentation {
    pub language: Option<String>,
    pub script: Option<String>,
}

/// Release group a release belongs to, as embedded in release results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseGroupRef {
    pub id: String,
    pub group_type: Option<String>,
    pub title: String,
    pub primary_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelInfo {
    pub catalog_number: Option<String>,
    pub label_id: Option<String>,
    pub label_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Medium {
    pub format: Option<String>,
    pub disc_count: Option<u32>,
    pub track_count: Option<u32>,
}

/// A concrete issue of a release group: one pressing, edition or digital release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub id: String,
    pub title: String,
    pub status: Option<String>,
    pub disambiguation: Option<String>,
    pub text_representation: Option<TextRepresentation>,
    pub artist_credit: Vec<NameCredit>,
    pub release_group: Option<ReleaseGroupRef>,
    pub date: Option<String>,
    pub country: Option<String>,
    pub barcode: Option<String>,
    pub asin: Option<String>,
    pub label_info: Vec<LabelInfo>,
    pub media: Vec<Medium>,
}

impl Release {
    pub fn artist_credit_display(&self) -> String {
        credit_display(&self.artist_credit)
    }

    pub fn track_count(&self) -> u32 {
        self.media
            .iter()
            .filter_map(|medium| medium.track_count)
            .sum()
    }
}

fn text_representation(parent: &XmlElement) -> Option<TextRepresentation> {
    let element = parent.child("text-representation")?;
    Some(TextRepresentation {
        language: element.child_text("language"),
        script: element.child_text("script"),
    })
}

fn release_group_ref(parent: &XmlElement) -> Option<ReleaseGroupRef> {
    let element = parent.child("release-group")?;
    Some(ReleaseGroupRef {
        id: element.attr("id").unwrap_or_default().to_string(),
        group_type: element.attr("type").map(ToOwned::to_owned),
        title: element.child_text_or_default("title"),
        primary_type: element.child_text("primary-type"),
    })
}

fn label_info_list(parent: &XmlElement) -> Vec<LabelInfo> {
    parent
        .list_items("label-info-list", "label-info")
        .into_iter()
        .map(|info| {
            let label = info.child("label");
            LabelInfo {
                catalog_number: info.child_text("catalog-number"),
                label_id: label
                    .and_then(|label| label.attr("id"))
                    .map(ToOwned::to_owned),
                label_name: label.and_then(|label| label.child_text("name")),
            }
        })
        .collect()
}

fn medium_list(parent: &XmlElement) -> Result<Vec<Medium>, DecodeError> {
    parent
        .list_items("medium-list", "medium")
        .into_iter()
        .map(|medium| -> Result<Medium, DecodeError> {
            let disc_count = match medium.child("disc-list") {
                Some(discs) => discs.number_attr("count")?,
                None => None,
            };
            let track_count = match medium.child("track-list") {
                Some(tracks) => tracks.number_attr("count")?,
                None => None,
            };
            Ok(Medium {
                format: medium.child_text("format"),
                disc_count,
                track_count,
            })
        })
        .collect()
}

impl SearchEntity for Release {
    const KIND: EntityKind = EntityKind::Release;

    fn from_xml(element: &XmlElement) -> Result<Self, DecodeError> {
        Ok(Self {
            id: element.required_attr("id")?.to_string(),
            title: element.child_text_or_default("title"),
            status: element.child_text("status"),
            disambiguation: element.child_text("disambiguation"),
            text_representation: text_representation(element),
            artist_credit: NameCredit::list_from_parent(element),
            release_group: release_group_ref(element),
            date: element.child_text("date"),
            country: element.child_text("country"),
            barcode: element.child_text("barcode"),
            asin: element.child_text("asin"),
            label_info: label_info_list(element),
            media: medium_list(element)?,
        })
    }

    fn score_key(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        let title = with_disambiguation(&self.title, self.disambiguation.as_deref());
        let credit = self.artist_credit_display();
        let mut out = if credit.is_empty() {
            title
        } else {
            format!("{credit} - {title}")
        };
        if let Some(date) = &self.date {
            out.push_str(&format!(" [{date}]"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Release;
    use crate::entity::SearchEntity;
    use crate::xml::parse_document;

    const NEVERMIND: &str = r#"<release id="b52a8f31-b5ab-34e9-92f4-f5b7110220f0">
  <title>Nevermind</title>
  <status>Official</status>
  <text-representation><language>eng</language><script>Latn</script></text-representation>
  <artist-credit>
    <name-credit><artist id="5b11f4ce-a62d-471e-81fc-a69a8278c7da"><name>Nirvana</name></artist></name-credit>
  </artist-credit>
  <release-group id="1b022e01-4da6-387b-8658-8678046e4cef" type="Album">
    <title>Nevermind</title><primary-type>Album</primary-type>
  </release-group>
  <date>1991-09-24</date>
  <country>US</country>
  <barcode>720642442524</barcode>
  <asin>B000003TA4</asin>
  <label-info-list>
    <label-info><catalog-number>DGCD-24425</catalog-number><label id="6c1a4b3a-1a3c-4c49-9b9e-1bd8d3f0d5b4"><name>DGC</name></label></label-info>
  </label-info-list>
  <medium-list count="1">
    <track-count>13</track-count>
    <medium><format>CD</format><disc-list count="3"/><track-list count="13"/></medium>
  </medium-list>
</release>"#;

    #[test]
    fn test_release_from_xml() {
        let element = parse_document(NEVERMIND).expect("document should parse");
        let release = Release::from_xml(&element).expect("release should decode");

        assert_eq!(release.title, "Nevermind");
        assert_eq!(release.status.as_deref(), Some("Official"));
        assert_eq!(
            release
                .text_representation
                .as_ref()
                .and_then(|text| text.script.as_deref()),
            Some("Latn")
        );
        assert_eq!(
            release
                .release_group
                .as_ref()
                .and_then(|group| group.primary_type.as_deref()),
            Some("Album")
        );
        assert_eq!(release.label_info[0].catalog_number.as_deref(), Some("DGCD-24425"));
        assert_eq!(release.label_info[0].label_name.as_deref(), Some("DGC"));
        assert_eq!(release.media[0].format.as_deref(), Some("CD"));
        assert_eq!(release.media[0].disc_count, Some(3));
        assert_eq!(release.track_count(), 13);
        assert_eq!(release.label(), "Nirvana - Nevermind [1991-09-24]");
    }
}
