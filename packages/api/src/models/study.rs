use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kinds::{ResourcePattern, ResourceType, SearchKind, TopicLevel};
use super::{from_epoch_seconds, to_epoch_seconds};
use crate::proto;

/// A learning plan made of ordered milestones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Roadmap {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub milestones: Vec<Milestone>,
}

impl From<proto::Roadmap> for Roadmap {
    fn from(roadmap: proto::Roadmap) -> Self {
        Self {
            id: roadmap.id,
            name: roadmap.name,
            description: roadmap.description,
            milestones: roadmap.milestones.into_iter().map(Milestone::from).collect(),
        }
    }
}

/// A target within a roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub target_date: Option<DateTime<Utc>>,
    pub completed: bool,
    /// Subject the milestone is about, if any.
    pub subject_id: Option<i64>,
    /// Expertise level to reach in that subject.
    pub level: TopicLevel,
}

impl From<proto::Milestone> for Milestone {
    fn from(milestone: proto::Milestone) -> Self {
        Self {
            id: milestone.id,
            name: milestone.name,
            description: milestone.description,
            target_date: from_epoch_seconds(milestone.target_date),
            completed: milestone.completed,
            subject_id: (milestone.subject_id != 0).then_some(milestone.subject_id),
            level: TopicLevel::from_wire(milestone.level),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<proto::Subject> for Subject {
    fn from(subject: proto::Subject) -> Self {
        Self {
            id: subject.id,
            name: subject.name,
            description: subject.description,
        }
    }
}

/// External study material attached to subjects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub kind: ResourceType,
    pub link: String,
    pub pattern: ResourcePattern,
    pub production: Option<DateTime<Utc>>,
    pub expiration: Option<DateTime<Utc>>,
    pub order: i32,
}

impl From<proto::Resource> for Resource {
    fn from(resource: proto::Resource) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            kind: ResourceType::from_wire(resource.r#type),
            link: resource.link,
            pattern: ResourcePattern::from_wire(resource.pattern),
            production: from_epoch_seconds(resource.production),
            expiration: from_epoch_seconds(resource.expiration),
            order: resource.order,
        }
    }
}

/// Fields of a resource about to be created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewResource {
    /// Subject the new resource is attached to.
    pub subject_id: i64,
    pub name: String,
    pub kind: ResourceType,
    pub link: String,
    pub pattern: ResourcePattern,
    pub production: Option<DateTime<Utc>>,
    pub expiration: Option<DateTime<Utc>>,
    /// Number of sections (chapters, episodes, ...) to create with it.
    pub sections: u32,
}

impl From<NewResource> for proto::CreateResourceRequest {
    fn from(resource: NewResource) -> Self {
        Self {
            name: resource.name,
            r#type: resource.kind.to_wire(),
            link: resource.link,
            pattern: resource.pattern.to_wire(),
            production: to_epoch_seconds(resource.production),
            expiration: to_epoch_seconds(resource.expiration),
            sections: i32::try_from(resource.sections).unwrap_or(i32::MAX),
            subject_id: resource.subject_id,
        }
    }
}

/// One section of a resource (a chapter, an episode, ...), holding cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: i64,
    pub position: i32,
    pub reviewed: bool,
    pub card_count: i32,
}

impl From<proto::Section> for Section {
    fn from(section: proto::Section) -> Self {
        Self {
            id: section.id,
            position: section.position,
            reviewed: section.reviewed,
            card_count: section.card_count,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub kind: SearchKind,
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<proto::SearchResult> for SearchResult {
    fn from(result: proto::SearchResult) -> Self {
        Self {
            kind: SearchKind::from_wire(result.kind),
            id: result.id,
            name: result.name,
            description: result.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_without_subject_or_date() {
        let milestone = Milestone::from(proto::Milestone {
            id: 3,
            name: "Basics".to_string(),
            ..Default::default()
        });
        assert_eq!(milestone.subject_id, None);
        assert_eq!(milestone.target_date, None);
        assert_eq!(milestone.level, TopicLevel::Surface);
    }

    #[test]
    fn test_resource_dates_and_kinds() {
        let resource = Resource::from(proto::Resource {
            id: 9,
            name: "SICP".to_string(),
            r#type: 2,
            pattern: 4,
            production: 1_700_000_000,
            expiration: 0,
            ..Default::default()
        });
        assert_eq!(resource.kind, ResourceType::Course);
        assert_eq!(resource.pattern, ResourcePattern::Lecture);
        assert_eq!(resource.production.map(|d| d.timestamp()), Some(1_700_000_000));
        assert_eq!(resource.expiration, None);
    }

    #[test]
    fn test_new_resource_request() {
        let request = proto::CreateResourceRequest::from(NewResource {
            subject_id: 2,
            name: "Rust Book".to_string(),
            kind: ResourceType::Book,
            link: "https://doc.rust-lang.org/book/".to_string(),
            pattern: ResourcePattern::Chapter,
            production: DateTime::from_timestamp(1_600_000_000, 500_000_000),
            expiration: None,
            sections: 20,
        });
        assert_eq!(request.production, 1_600_000_000);
        assert_eq!(request.expiration, 0);
        assert_eq!(request.sections, 20);
        assert_eq!(request.r#type, 0);
        assert_eq!(request.subject_id, 2);
    }
}
