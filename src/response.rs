//! Decoded WS2 result lists and the public search response built from them.

use std::collections::HashMap;

use serde::Serialize;

use crate::entity::SearchEntity;
use crate::error::DecodeError;
use crate::xml::{parse_document, XmlElement};

/// Pagination header copied from the list element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListHeader {
    /// Total number of matches on the server, not the page size.
    pub count: u32,
    pub offset: u32,
}

/// One entity paired with the relevance score the service assigned it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<E> {
    pub score: u8,
    pub entity: E,
}

const MAX_SCORE: u8 = 100;

/// `score` attribute of a result element; missing means 0, above 100 is rejected.
fn relevance_score(element: &XmlElement) -> Result<u8, DecodeError> {
    let score = element.number_attr::<u8>("score")?.unwrap_or(0);
    if score > MAX_SCORE {
        return Err(DecodeError::InvalidNumber {
            field: format!("{}@score", element.name),
            value: score.to_string(),
        });
    }
    Ok(score)
}

/// Raw `<{entity}-list>` contents in service order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredList<E> {
    pub header: ListHeader,
    pub entries: Vec<Scored<E>>,
}

impl<E: SearchEntity> ScoredList<E> {
    pub fn from_xml_str(body: &str) -> Result<Self, DecodeError> {
        let root = parse_document(body)?;
        Self::from_document(&root)
    }

    /// Accepts either the usual `<metadata>` envelope or a bare list element as root.
    pub fn from_document(root: &XmlElement) -> Result<Self, DecodeError> {
        let list_name = E::KIND.list_element();
        let list = if root.name == list_name {
            root
        } else {
            root.child(list_name)
                .ok_or_else(|| DecodeError::MissingElement(list_name.to_string()))?
        };

        let entries = list
            .children_named(E::KIND.element_name())
            .map(|element| -> Result<Scored<E>, DecodeError> {
                Ok(Scored {
                    score: relevance_score(element)?,
                    entity: E::from_xml(element)?,
                })
            })
            .collect::<Result<Vec<_>, DecodeError>>()?;

        let count = match list.number_attr::<u32>("count")? {
            Some(count) => count,
            None => entries.len() as u32,
        };
        let header = ListHeader {
            count,
            offset: list.number_attr("offset")?.unwrap_or(0),
        };
        Ok(Self { header, entries })
    }

    /// Splits scored pairs into the ordered entity list and the score map.
    ///
    /// An entity appearing twice keeps both positions in `entities`; the map
    /// holds the score of its last occurrence.
    pub fn into_response(self) -> SearchResponse<E> {
        let mut entities = Vec::with_capacity(self.entries.len());
        let mut scores = HashMap::with_capacity(self.entries.len());
        for Scored { score, entity } in self.entries {
            scores.insert(entity.score_key().to_string(), score);
            entities.push(entity);
        }
        SearchResponse {
            header: self.header,
            entities,
            scores,
        }
    }
}

/// Public result of one search call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse<E> {
    #[serde(flatten)]
    pub header: ListHeader,
    /// Matches in the order the service ranked them.
    pub entities: Vec<E>,
    /// Relevance score (0-100) by entity key.
    pub scores: HashMap<String, u8>,
}

impl<E> SearchResponse<E> {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<E: SearchEntity> SearchResponse<E> {
    pub fn score(&self, entity: &E) -> Option<u8> {
        self.scores.get(entity.score_key()).copied()
    }

    /// Entities in service order with their scores.
    pub fn scored(&self) -> impl Iterator<Item = (&E, u8)> + '_ {
        self.entities
            .iter()
            .map(|entity| (entity, self.score(entity).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::{ListHeader, Scored, ScoredList};
    use crate::entity::{Artist, Tag};
    use crate::error::DecodeError;

    fn tag(name: &str) -> Tag {
        Tag {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_into_response_preserves_order_and_scores() {
        let list = ScoredList {
            header: ListHeader {
                count: 120,
                offset: 25,
            },
            entries: vec![
                Scored {
                    score: 100,
                    entity: tag("rock"),
                },
                Scored {
                    score: 62,
                    entity: tag("hard rock"),
                },
                Scored {
                    score: 80,
                    entity: tag("punk rock"),
                },
            ],
        };

        let response = list.into_response();
        assert_eq!(response.header.count, 120);
        assert_eq!(response.header.offset, 25);
        let names: Vec<&str> = response.entities.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["rock", "hard rock", "punk rock"]);
        assert_eq!(response.scores.len(), 3);
        assert_eq!(response.score(&tag("hard rock")), Some(62));
        assert_eq!(response.score(&tag("metal")), None);
        let scores: Vec<u8> = response.scored().map(|(_, score)| score).collect();
        assert_eq!(scores, vec![100, 62, 80]);
    }

    #[test]
    fn test_duplicate_entity_keeps_both_positions_and_last_score() {
        let list = ScoredList {
            header: ListHeader::default(),
            entries: vec![
                Scored {
                    score: 90,
                    entity: tag("jazz"),
                },
                Scored {
                    score: 70,
                    entity: tag("blues"),
                },
                Scored {
                    score: 40,
                    entity: tag("jazz"),
                },
            ],
        };

        let response = list.into_response();
        assert_eq!(response.len(), 3);
        assert_eq!(response.scores.len(), 2);
        assert_eq!(response.score(&tag("jazz")), Some(40));
        assert_eq!(response.score(&tag("blues")), Some(70));
    }

    #[test]
    fn test_from_xml_str_reads_envelope() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata created="2014-05-13T20:33:18.563Z" xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <tag-list count="2" offset="0">
    <tag ext:score="100"><name>shoegaze</name></tag>
    <tag ext:score="45"><name>dream pop</name></tag>
  </tag-list>
</metadata>"#;

        let list = ScoredList::<Tag>::from_xml_str(body).expect("payload should decode");
        assert_eq!(list.header, ListHeader { count: 2, offset: 0 });
        assert_eq!(list.entries[1].score, 45);
        assert_eq!(list.entries[1].entity.name, "dream pop");
    }

    #[test]
    fn test_from_xml_str_accepts_bare_list_root() {
        let body = r#"<tag-list offset="10"><tag score="12"><name>ambient</name></tag></tag-list>"#;
        let list = ScoredList::<Tag>::from_xml_str(body).expect("payload should decode");
        assert_eq!(list.header.offset, 10);
        assert_eq!(list.header.count, 1);
        assert_eq!(list.entries[0].score, 12);
    }

    #[test]
    fn test_missing_list_element_is_decode_error() {
        let body = r#"<metadata><label-list count="0" offset="0"/></metadata>"#;
        assert_eq!(
            ScoredList::<Artist>::from_xml_str(body),
            Err(DecodeError::MissingElement("artist-list".to_string()))
        );
    }

    #[test]
    fn test_empty_list_yields_empty_response() {
        let body = r#"<metadata><artist-list count="0" offset="0"/></metadata>"#;
        let response = ScoredList::<Artist>::from_xml_str(body)
            .expect("payload should decode")
            .into_response();
        assert!(response.is_empty());
        assert!(response.scores.is_empty());
    }

    #[test]
    fn test_invalid_score_is_decode_error() {
        let body = r#"<metadata><tag-list count="1" offset="0"><tag ext:score="high"><name>x</name></tag></tag-list></metadata>"#;
        assert!(matches!(
            ScoredList::<Tag>::from_xml_str(body),
            Err(DecodeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_score_above_hundred_is_decode_error() {
        let body = r#"<tag-list count="1" offset="0"><tag score="250"><name>x</name></tag></tag-list>"#;
        assert_eq!(
            ScoredList::<Tag>::from_xml_str(body),
            Err(DecodeError::InvalidNumber {
                field: "tag@score".to_string(),
                value: "250".to_string(),
            })
        );

        let body = r#"<tag-list count="1" offset="0"><tag score="100"><name>x</name></tag></tag-list>"#;
        let list = ScoredList::<Tag>::from_xml_str(body).expect("payload should decode");
        assert_eq!(list.entries[0].score, 100);
    }

    #[test]
    fn test_scores_round_trip_for_unique_entities() {
        let body = r#"<metadata xmlns:ext="http://musicbrainz.org/ns/ext#-2.0"><tag-list count="4" offset="0">
  <tag ext:score="100"><name>a</name></tag>
  <tag ext:score="91"><name>b</name></tag>
  <tag ext:score="91"><name>c</name></tag>
  <tag ext:score="7"><name>d</name></tag>
</tag-list></metadata>"#;
        let list = ScoredList::<Tag>::from_xml_str(body).expect("payload should decode");
        let expected: Vec<(String, u8)> = list
            .entries
            .iter()
            .map(|entry| (entry.entity.name.clone(), entry.score))
            .collect();

        let response = list.into_response();
        for (name, score) in expected {
            assert_eq!(response.scores.get(&name), Some(&score));
        }
    }
}
