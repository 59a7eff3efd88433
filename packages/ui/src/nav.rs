//! # Typed page parameters
//!
//! Pages that show a single entity are reached with a query string. Each page
//! has a params type that decodes that string with `from_query` and encodes it
//! back with `to_query`, so the keys below are only spelled out here.
//!
//! | Page | Required | Optional |
//! |------|----------|----------|
//! | Roadmap | `roadmapId` | `roadmapName` |
//! | Subject | `subjectId` | `subjectName`, roadmap crumb |
//! | Resource | `resourceId` | `resourceName`, subject and roadmap crumbs |
//! | Section | `sectionId` | `position`, resource and subject crumbs |
//! | Topic | `subjectId`, `position` | `level` (default surface), `topicName`, `subjectName` |
//! | Card | `cardId` | `headline`, `state` (default 0), subject crumb |
//!
//! A missing or non-numeric required id is a [`NavError`]; pages answer it by
//! sending the user home.

use api::{CardState, TopicLevel, TopicRef};
use thiserror::Error;

use crate::query::{QueryMap, QueryWriter};

pub mod keys {
    pub const ROADMAP_ID: &str = "roadmapId";
    pub const ROADMAP_NAME: &str = "roadmapName";
    pub const SUBJECT_ID: &str = "subjectId";
    pub const SUBJECT_NAME: &str = "subjectName";
    pub const RESOURCE_ID: &str = "resourceId";
    pub const RESOURCE_NAME: &str = "resourceName";
    pub const SECTION_ID: &str = "sectionId";
    pub const POSITION: &str = "position";
    pub const LEVEL: &str = "level";
    pub const TOPIC_NAME: &str = "topicName";
    pub const CARD_ID: &str = "cardId";
    pub const HEADLINE: &str = "headline";
    pub const STATE: &str = "state";
}

use keys::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("missing `{0}` parameter")]
    Missing(&'static str),
    #[error("`{key}` is not a number: {value:?}")]
    Invalid { key: &'static str, value: String },
}

fn require_i64(map: &QueryMap, key: &'static str) -> Result<i64, NavError> {
    let value = map.get(key).ok_or(NavError::Missing(key))?;
    value.trim().parse().map_err(|_| NavError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn require_i32(map: &QueryMap, key: &'static str) -> Result<i32, NavError> {
    let value = map.get(key).ok_or(NavError::Missing(key))?;
    value.trim().parse().map_err(|_| NavError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn text(map: &QueryMap, key: &str) -> String {
    map.get(key).unwrap_or_default().to_string()
}

/// An ancestor shown in the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub id: i64,
    pub name: String,
}

impl Crumb {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    fn read(map: &QueryMap, id_key: &str, name_key: &str) -> Option<Self> {
        Some(Self {
            id: map.get_i64(id_key)?,
            name: text(map, name_key),
        })
    }

    fn write(crumb: &Option<Self>, query: QueryWriter, id_key: &str, name_key: &str) -> QueryWriter {
        match crumb {
            Some(crumb) => query.push_i64(id_key, crumb.id).push(name_key, &crumb.name),
            None => query,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapParams {
    pub roadmap_id: i64,
    pub name: String,
}

impl RoadmapParams {
    pub fn new(roadmap_id: i64, name: impl Into<String>) -> Self {
        Self {
            roadmap_id,
            name: name.into(),
        }
    }

    pub fn from_query(query: &str) -> Result<Self, NavError> {
        let map = QueryMap::parse(query);
        Ok(Self {
            roadmap_id: require_i64(&map, ROADMAP_ID)?,
            name: text(&map, ROADMAP_NAME),
        })
    }

    pub fn to_query(&self) -> String {
        QueryWriter::new()
            .push_i64(ROADMAP_ID, self.roadmap_id)
            .push(ROADMAP_NAME, &self.name)
            .finish()
    }

    pub fn crumb(&self) -> Crumb {
        Crumb::new(self.roadmap_id, self.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectParams {
    pub subject_id: i64,
    pub name: String,
    pub roadmap: Option<Crumb>,
}

impl SubjectParams {
    pub fn new(subject_id: i64, name: impl Into<String>) -> Self {
        Self {
            subject_id,
            name: name.into(),
            roadmap: None,
        }
    }

    pub fn with_roadmap(mut self, roadmap: Crumb) -> Self {
        self.roadmap = Some(roadmap);
        self
    }

    pub fn from_query(query: &str) -> Result<Self, NavError> {
        let map = QueryMap::parse(query);
        Ok(Self {
            subject_id: require_i64(&map, SUBJECT_ID)?,
            name: text(&map, SUBJECT_NAME),
            roadmap: Crumb::read(&map, ROADMAP_ID, ROADMAP_NAME),
        })
    }

    pub fn to_query(&self) -> String {
        let query = QueryWriter::new()
            .push_i64(SUBJECT_ID, self.subject_id)
            .push(SUBJECT_NAME, &self.name);
        Crumb::write(&self.roadmap, query, ROADMAP_ID, ROADMAP_NAME).finish()
    }

    pub fn crumb(&self) -> Crumb {
        Crumb::new(self.subject_id, self.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceParams {
    pub resource_id: i64,
    pub name: String,
    pub subject: Option<Crumb>,
    pub roadmap: Option<Crumb>,
}

impl ResourceParams {
    pub fn new(resource_id: i64, name: impl Into<String>) -> Self {
        Self {
            resource_id,
            name: name.into(),
            subject: None,
            roadmap: None,
        }
    }

    pub fn within(mut self, subject: &SubjectParams) -> Self {
        self.subject = Some(subject.crumb());
        self.roadmap = subject.roadmap.clone();
        self
    }

    pub fn from_query(query: &str) -> Result<Self, NavError> {
        let map = QueryMap::parse(query);
        Ok(Self {
            resource_id: require_i64(&map, RESOURCE_ID)?,
            name: text(&map, RESOURCE_NAME),
            subject: Crumb::read(&map, SUBJECT_ID, SUBJECT_NAME),
            roadmap: Crumb::read(&map, ROADMAP_ID, ROADMAP_NAME),
        })
    }

    pub fn to_query(&self) -> String {
        let query = QueryWriter::new()
            .push_i64(RESOURCE_ID, self.resource_id)
            .push(RESOURCE_NAME, &self.name);
        let query = Crumb::write(&self.subject, query, SUBJECT_ID, SUBJECT_NAME);
        Crumb::write(&self.roadmap, query, ROADMAP_ID, ROADMAP_NAME).finish()
    }

    pub fn crumb(&self) -> Crumb {
        Crumb::new(self.resource_id, self.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionParams {
    pub section_id: i64,
    pub position: i32,
    pub resource: Option<Crumb>,
    pub subject: Option<Crumb>,
}

impl SectionParams {
    pub fn new(section_id: i64, position: i32) -> Self {
        Self {
            section_id,
            position,
            resource: None,
            subject: None,
        }
    }

    pub fn within(mut self, resource: &ResourceParams) -> Self {
        self.resource = Some(resource.crumb());
        self.subject = resource.subject.clone();
        self
    }

    pub fn from_query(query: &str) -> Result<Self, NavError> {
        let map = QueryMap::parse(query);
        Ok(Self {
            section_id: require_i64(&map, SECTION_ID)?,
            position: map.get_i32_or(POSITION, 0),
            resource: Crumb::read(&map, RESOURCE_ID, RESOURCE_NAME),
            subject: Crumb::read(&map, SUBJECT_ID, SUBJECT_NAME),
        })
    }

    pub fn to_query(&self) -> String {
        let query = QueryWriter::new()
            .push_i64(SECTION_ID, self.section_id)
            .push_i64(POSITION, self.position.into());
        let query = Crumb::write(&self.resource, query, RESOURCE_ID, RESOURCE_NAME);
        Crumb::write(&self.subject, query, SUBJECT_ID, SUBJECT_NAME).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicParams {
    pub topic: TopicRef,
    pub name: String,
    pub subject_name: String,
}

impl TopicParams {
    pub fn new(topic: TopicRef, name: impl Into<String>) -> Self {
        Self {
            topic,
            name: name.into(),
            subject_name: String::new(),
        }
    }

    pub fn with_subject_name(mut self, subject_name: impl Into<String>) -> Self {
        self.subject_name = subject_name.into();
        self
    }

    pub fn from_query(query: &str) -> Result<Self, NavError> {
        let map = QueryMap::parse(query);
        let topic = TopicRef {
            subject_id: require_i64(&map, SUBJECT_ID)?,
            level: TopicLevel::from_wire(map.get_i32_or(LEVEL, 0)),
            position: require_i32(&map, POSITION)?,
        };
        Ok(Self {
            topic,
            name: text(&map, TOPIC_NAME),
            subject_name: text(&map, SUBJECT_NAME),
        })
    }

    pub fn to_query(&self) -> String {
        QueryWriter::new()
            .push_i64(SUBJECT_ID, self.topic.subject_id)
            .push_i64(LEVEL, self.topic.level.to_wire().into())
            .push_i64(POSITION, self.topic.position.into())
            .push(TOPIC_NAME, &self.name)
            .push(SUBJECT_NAME, &self.subject_name)
            .finish()
    }

    pub fn subject(&self) -> Crumb {
        Crumb::new(self.topic.subject_id, self.subject_name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardParams {
    pub card_id: i64,
    pub headline: String,
    pub state: CardState,
    /// Subject whose topics the card can be filed under.
    pub subject: Option<Crumb>,
}

impl CardParams {
    pub fn new(card: &api::Card) -> Self {
        Self {
            card_id: card.id,
            headline: card.headline.clone(),
            state: card.state,
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: Option<Crumb>) -> Self {
        self.subject = subject;
        self
    }

    pub fn from_query(query: &str) -> Result<Self, NavError> {
        let map = QueryMap::parse(query);
        Ok(Self {
            card_id: require_i64(&map, CARD_ID)?,
            headline: text(&map, HEADLINE),
            state: CardState::from_wire(map.get_i32_or(STATE, 0)),
            subject: Crumb::read(&map, SUBJECT_ID, SUBJECT_NAME),
        })
    }

    pub fn to_query(&self) -> String {
        let query = QueryWriter::new()
            .push_i64(CARD_ID, self.card_id)
            .push(HEADLINE, &self.headline)
            .push_i64(STATE, self.state.to_wire().into());
        Crumb::write(&self.subject, query, SUBJECT_ID, SUBJECT_NAME).finish()
    }
}

/// Where a page wants to go next. The router maps each variant to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    SignIn,
    SignUp,
    Home,
    Account,
    Roadmap(RoadmapParams),
    Subject(SubjectParams),
    Resource(ResourceParams),
    Section(SectionParams),
    Topic(TopicParams),
    Card(CardParams),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_params_defaults() {
        let params = CardParams::from_query("cardId=42&headline=Foo").unwrap();
        assert_eq!(params.card_id, 42);
        assert_eq!(params.headline, "Foo");
        assert_eq!(params.state, CardState::from_wire(0));
        assert_eq!(params.subject, None);
    }

    #[test]
    fn test_missing_id() {
        assert_eq!(
            RoadmapParams::from_query("roadmapName=Rust"),
            Err(NavError::Missing(ROADMAP_ID))
        );
        assert_eq!(
            SectionParams::from_query(""),
            Err(NavError::Missing(SECTION_ID))
        );
    }

    #[test]
    fn test_non_numeric_id() {
        let err = SubjectParams::from_query("subjectId=rust").unwrap_err();
        assert_eq!(
            err,
            NavError::Invalid {
                key: SUBJECT_ID,
                value: "rust".to_string()
            }
        );
    }

    #[test]
    fn test_subject_keeps_roadmap_crumb() {
        let params = SubjectParams::new(5, "Rust").with_roadmap(Crumb::new(2, "Systems"));
        let parsed = SubjectParams::from_query(&params.to_query()).unwrap();
        assert_eq!(parsed, params);
        assert_eq!(parsed.roadmap.unwrap().name, "Systems");
    }

    #[test]
    fn test_resource_inherits_trail() {
        let subject = SubjectParams::new(5, "Rust").with_roadmap(Crumb::new(2, "Systems"));
        let resource = ResourceParams::new(9, "The Book").within(&subject);
        let section = SectionParams::new(30, 4).within(&resource);

        let parsed = SectionParams::from_query(&section.to_query()).unwrap();
        assert_eq!(parsed.position, 4);
        assert_eq!(parsed.resource, Some(Crumb::new(9, "The Book")));
        assert_eq!(parsed.subject, Some(Crumb::new(5, "Rust")));
    }

    #[test]
    fn test_topic_level_defaults_to_surface() {
        let params = TopicParams::from_query("subjectId=5&position=2").unwrap();
        assert_eq!(params.topic.level, TopicLevel::Surface);
        assert_eq!(params.topic.position, 2);

        let unknown = TopicParams::from_query("subjectId=5&position=2&level=99").unwrap();
        assert_eq!(unknown.topic.level, TopicLevel::from_wire(99));
    }

    #[test]
    fn test_topic_requires_position() {
        assert_eq!(
            TopicParams::from_query("subjectId=5"),
            Err(NavError::Missing(POSITION))
        );
    }

    #[test]
    fn test_crumb_without_name() {
        let params = ResourceParams::from_query("resourceId=9&subjectId=5").unwrap();
        assert_eq!(params.subject, Some(Crumb::new(5, "")));
        assert_eq!(params.roadmap, None);
    }
}
