//! # Closed enumerations carried on the wire as `int32`
//!
//! Every enumeration has a fixed wire numbering, an exhaustive display label
//! table and a fallback variant (its `Default`). Decoding never fails:
//! [`from_wire`](CardState::from_wire) maps any unknown or out-of-range value
//! to the fallback, so a newer server can add variants without breaking the
//! pages.
//!
//! | Enum | Wire values | Fallback |
//! |------|-------------|----------|
//! | [`CardState`] | draft 0, reviewed 1, completed 2, approved 3, released 4, rejected 5 | draft |
//! | [`BlockType`] | text 0, code 1, image 2 | text |
//! | [`ResourceType`] | book 0, website 1, course 2, channel 3, video 4, article 5, documentation 6 | book |
//! | [`ResourcePattern`] | chapter 0, page 1, session 2, episode 3, lecture 4, section 5 | chapter |
//! | [`TopicLevel`] | surface 0, depth 1, origin 2 | surface |
//! | [`SearchKind`] | subject 0, resource 1 | subject |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Review workflow state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    #[default]
    Draft,
    Reviewed,
    Completed,
    Approved,
    Released,
    Rejected,
}

impl CardState {
    pub const ALL: [CardState; 6] = [
        CardState::Draft,
        CardState::Reviewed,
        CardState::Completed,
        CardState::Approved,
        CardState::Released,
        CardState::Rejected,
    ];

    pub fn from_wire(value: i32) -> Self {
        match value {
            1 => CardState::Reviewed,
            2 => CardState::Completed,
            3 => CardState::Approved,
            4 => CardState::Released,
            5 => CardState::Rejected,
            _ => CardState::Draft,
        }
    }

    pub fn to_wire(self) -> i32 {
        match self {
            CardState::Draft => 0,
            CardState::Reviewed => 1,
            CardState::Completed => 2,
            CardState::Approved => 3,
            CardState::Released => 4,
            CardState::Rejected => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardState::Draft => "draft",
            CardState::Reviewed => "reviewed",
            CardState::Completed => "completed",
            CardState::Approved => "approved",
            CardState::Released => "released",
            CardState::Rejected => "rejected",
        }
    }
}

/// Kind of content held by a card block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Text,
    Code,
    Image,
}

impl BlockType {
    pub const ALL: [BlockType; 3] = [BlockType::Text, BlockType::Code, BlockType::Image];

    pub fn from_wire(value: i32) -> Self {
        match value {
            1 => BlockType::Code,
            2 => BlockType::Image,
            _ => BlockType::Text,
        }
    }

    pub fn to_wire(self) -> i32 {
        match self {
            BlockType::Text => 0,
            BlockType::Code => 1,
            BlockType::Image => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::Code => "code",
            BlockType::Image => "image",
        }
    }
}

/// Medium of a study resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    #[default]
    Book,
    Website,
    Course,
    Channel,
    Video,
    Article,
    Documentation,
}

impl ResourceType {
    pub const ALL: [ResourceType; 7] = [
        ResourceType::Book,
        ResourceType::Website,
        ResourceType::Course,
        ResourceType::Channel,
        ResourceType::Video,
        ResourceType::Article,
        ResourceType::Documentation,
    ];

    pub fn from_wire(value: i32) -> Self {
        match value {
            1 => ResourceType::Website,
            2 => ResourceType::Course,
            3 => ResourceType::Channel,
            4 => ResourceType::Video,
            5 => ResourceType::Article,
            6 => ResourceType::Documentation,
            _ => ResourceType::Book,
        }
    }

    pub fn to_wire(self) -> i32 {
        match self {
            ResourceType::Book => 0,
            ResourceType::Website => 1,
            ResourceType::Course => 2,
            ResourceType::Channel => 3,
            ResourceType::Video => 4,
            ResourceType::Article => 5,
            ResourceType::Documentation => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceType::Book => "book",
            ResourceType::Website => "website",
            ResourceType::Course => "course",
            ResourceType::Channel => "channel",
            ResourceType::Video => "video",
            ResourceType::Article => "article",
            ResourceType::Documentation => "documentation",
        }
    }
}

/// How a resource is split into sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourcePattern {
    #[default]
    Chapter,
    Page,
    Session,
    Episode,
    Lecture,
    Section,
}

impl ResourcePattern {
    pub const ALL: [ResourcePattern; 6] = [
        ResourcePattern::Chapter,
        ResourcePattern::Page,
        ResourcePattern::Session,
        ResourcePattern::Episode,
        ResourcePattern::Lecture,
        ResourcePattern::Section,
    ];

    pub fn from_wire(value: i32) -> Self {
        match value {
            1 => ResourcePattern::Page,
            2 => ResourcePattern::Session,
            3 => ResourcePattern::Episode,
            4 => ResourcePattern::Lecture,
            5 => ResourcePattern::Section,
            _ => ResourcePattern::Chapter,
        }
    }

    pub fn to_wire(self) -> i32 {
        match self {
            ResourcePattern::Chapter => 0,
            ResourcePattern::Page => 1,
            ResourcePattern::Session => 2,
            ResourcePattern::Episode => 3,
            ResourcePattern::Lecture => 4,
            ResourcePattern::Section => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourcePattern::Chapter => "chapter",
            ResourcePattern::Page => "page",
            ResourcePattern::Session => "session",
            ResourcePattern::Episode => "episode",
            ResourcePattern::Lecture => "lecture",
            ResourcePattern::Section => "section",
        }
    }
}

/// Depth of a topic within a subject. Also used as a milestone's expertise level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopicLevel {
    #[default]
    Surface,
    Depth,
    Origin,
}

impl TopicLevel {
    pub const ALL: [TopicLevel; 3] = [TopicLevel::Surface, TopicLevel::Depth, TopicLevel::Origin];

    pub fn from_wire(value: i32) -> Self {
        match value {
            1 => TopicLevel::Depth,
            2 => TopicLevel::Origin,
            _ => TopicLevel::Surface,
        }
    }

    pub fn to_wire(self) -> i32 {
        match self {
            TopicLevel::Surface => 0,
            TopicLevel::Depth => 1,
            TopicLevel::Origin => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TopicLevel::Surface => "surface",
            TopicLevel::Depth => "depth",
            TopicLevel::Origin => "origin",
        }
    }
}

/// What a search hit points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchKind {
    #[default]
    Subject,
    Resource,
}

impl SearchKind {
    pub fn from_wire(value: i32) -> Self {
        match value {
            1 => SearchKind::Resource,
            _ => SearchKind::Subject,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchKind::Subject => "subject",
            SearchKind::Resource => "resource",
        }
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ResourcePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TopicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_card_state_falls_back_to_draft() {
        assert_eq!(CardState::from_wire(99), CardState::Draft);
        assert_eq!(CardState::from_wire(-1).label(), "draft");
    }

    #[test]
    fn test_unknown_block_type_falls_back_to_text() {
        assert_eq!(BlockType::from_wire(99), BlockType::Text);
        assert_eq!(BlockType::from_wire(7).label(), "text");
    }

    #[test]
    fn test_wire_values_match_tables() {
        for (i, state) in CardState::ALL.iter().enumerate() {
            assert_eq!(state.to_wire(), i as i32);
            assert_eq!(CardState::from_wire(i as i32), *state);
        }
        for (i, kind) in ResourceType::ALL.iter().enumerate() {
            assert_eq!(kind.to_wire(), i as i32);
            assert_eq!(ResourceType::from_wire(i as i32), *kind);
        }
        for (i, pattern) in ResourcePattern::ALL.iter().enumerate() {
            assert_eq!(ResourcePattern::from_wire(i as i32), *pattern);
        }
        for (i, level) in TopicLevel::ALL.iter().enumerate() {
            assert_eq!(TopicLevel::from_wire(i as i32), *level);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(CardState::Approved.to_string(), "approved");
        assert_eq!(BlockType::Code.label(), "code");
        assert_eq!(ResourcePattern::Lecture.label(), "lecture");
        assert_eq!(TopicLevel::Origin.to_string(), "origin");
        assert_eq!(SearchKind::from_wire(1).label(), "resource");
    }
}
