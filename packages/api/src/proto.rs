//! # Wire messages for the `studymap.Studymap` service
//!
//! Request and response messages exchanged with the remote study service,
//! declared directly with `prost` derives instead of generated from a `.proto`
//! file. Tags are part of the wire contract and must never be renumbered.
//!
//! ## Conventions
//!
//! | Concept | Wire shape |
//! |---------|-----------|
//! | Identifiers | `int64` |
//! | Dates | `int64` epoch seconds, `0` meaning "no date" |
//! | Enumerations | `int32` (see [`crate::models::kinds`]) |
//! | Topics | addressed by [`TopicAddress`] (`subject_id`, `level`, `position`) |
//!
//! Authentication never travels inside a message: the token and device id are
//! sent as call metadata by [`crate::Client`].
//!
//! Method names are listed in [`method`]; the full path of a call is
//! `/{SERVICE}/{method}`.

/// Fully-qualified service name used in call paths.
pub const SERVICE: &str = "studymap.Studymap";

/// Remote method names.
pub mod method {
    pub const SIGN_IN: &str = "SignIn";
    pub const SIGN_UP: &str = "SignUp";
    pub const SIGN_OUT: &str = "SignOut";
    pub const GET_ROADMAPS: &str = "GetRoadmaps";
    pub const GET_ROADMAP: &str = "GetRoadmap";
    pub const CREATE_ROADMAP: &str = "CreateRoadmap";
    pub const GET_MILESTONES: &str = "GetMilestones";
    pub const CREATE_MILESTONE: &str = "CreateMilestone";
    pub const GET_SUBJECTS: &str = "GetSubjects";
    pub const CREATE_SUBJECT: &str = "CreateSubject";
    pub const SEARCH_SUBJECTS: &str = "SearchSubjects";
    pub const GET_RESOURCES: &str = "GetResources";
    pub const CREATE_RESOURCE: &str = "CreateResource";
    pub const ADD_RESOURCE: &str = "AddResource";
    pub const GET_SECTIONS: &str = "GetSections";
    pub const MARK_SECTION_REVIEWED: &str = "MarkSectionReviewed";
    pub const GET_SECTION_CARDS: &str = "GetSectionCards";
    pub const GET_TOPIC_CARDS: &str = "GetTopicCards";
    pub const GET_CARD: &str = "GetCard";
    pub const CREATE_CARD: &str = "CreateCard";
    pub const MOVE_CARD: &str = "MoveCard";
    pub const ADD_CARD_TO_TOPIC: &str = "AddCardToTopic";
    pub const GET_TOPICS: &str = "GetTopics";
    pub const CREATE_TOPIC: &str = "CreateTopic";
    pub const EDIT_TOPIC: &str = "EditTopic";
    pub const REMOVE_TOPIC: &str = "RemoveTopic";
    pub const MOVE_TOPIC: &str = "MoveTopic";
    pub const SEARCH: &str = "Search";
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct Empty {}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct IdRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchRequest {
    #[prost(string, tag = "1")]
    pub query: String,
}

// Accounts

#[derive(Clone, PartialEq, prost::Message)]
pub struct SignInRequest {
    #[prost(string, tag = "1")]
    pub email: String,
    #[prost(string, tag = "2")]
    pub password: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SignInResponse {
    #[prost(string, tag = "1")]
    pub token: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub email: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SignUpRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub email: String,
    #[prost(string, tag = "3")]
    pub password: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct User {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub email: String,
}

// Roadmaps

#[derive(Clone, PartialEq, prost::Message)]
pub struct Milestone {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(int64, tag = "4")]
    pub target_date: i64,
    #[prost(bool, tag = "5")]
    pub completed: bool,
    #[prost(int64, tag = "6")]
    pub subject_id: i64,
    #[prost(int32, tag = "7")]
    pub level: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Roadmap {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(message, repeated, tag = "4")]
    pub milestones: Vec<Milestone>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RoadmapList {
    #[prost(message, repeated, tag = "1")]
    pub roadmaps: Vec<Roadmap>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MilestoneList {
    #[prost(message, repeated, tag = "1")]
    pub milestones: Vec<Milestone>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateRoadmapRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateMilestoneRequest {
    #[prost(int64, tag = "1")]
    pub roadmap_id: i64,
    #[prost(int64, tag = "2")]
    pub subject_id: i64,
    #[prost(int32, tag = "3")]
    pub level: i32,
    #[prost(string, tag = "4")]
    pub name: String,
    #[prost(string, tag = "5")]
    pub description: String,
    #[prost(int64, tag = "6")]
    pub target_date: i64,
}

// Subjects and resources

#[derive(Clone, PartialEq, prost::Message)]
pub struct Subject {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubjectList {
    #[prost(message, repeated, tag = "1")]
    pub subjects: Vec<Subject>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateSubjectRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Resource {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "3")]
    pub r#type: i32,
    #[prost(string, tag = "4")]
    pub link: String,
    #[prost(int32, tag = "5")]
    pub pattern: i32,
    #[prost(int64, tag = "6")]
    pub production: i64,
    #[prost(int64, tag = "7")]
    pub expiration: i64,
    #[prost(int32, tag = "8")]
    pub order: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ResourceList {
    #[prost(message, repeated, tag = "1")]
    pub resources: Vec<Resource>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateResourceRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub link: String,
    #[prost(int32, tag = "4")]
    pub pattern: i32,
    #[prost(int64, tag = "5")]
    pub production: i64,
    #[prost(int64, tag = "6")]
    pub expiration: i64,
    #[prost(int32, tag = "7")]
    pub sections: i32,
    #[prost(int64, tag = "8")]
    pub subject_id: i64,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct AddResourceRequest {
    #[prost(int64, tag = "1")]
    pub subject_id: i64,
    #[prost(int64, tag = "2")]
    pub resource_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Section {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(int32, tag = "2")]
    pub position: i32,
    #[prost(bool, tag = "3")]
    pub reviewed: bool,
    #[prost(int32, tag = "4")]
    pub card_count: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SectionList {
    #[prost(message, repeated, tag = "1")]
    pub sections: Vec<Section>,
}

// Cards

#[derive(Clone, PartialEq, prost::Message)]
pub struct Block {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub content: String,
    #[prost(string, tag = "3")]
    pub metadata: String,
    #[prost(string, tag = "4")]
    pub extension: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Card {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub headline: String,
    #[prost(int32, tag = "3")]
    pub state: i32,
    #[prost(int32, tag = "4")]
    pub position: i32,
    #[prost(message, repeated, tag = "5")]
    pub blocks: Vec<Block>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CardList {
    #[prost(message, repeated, tag = "1")]
    pub cards: Vec<Card>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateCardRequest {
    #[prost(int64, tag = "1")]
    pub section_id: i64,
    #[prost(string, tag = "2")]
    pub headline: String,
    #[prost(message, repeated, tag = "3")]
    pub blocks: Vec<Block>,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct MoveCardRequest {
    #[prost(int64, tag = "1")]
    pub card_id: i64,
    #[prost(int64, tag = "2")]
    pub section_id: i64,
    #[prost(int32, tag = "3")]
    pub position: i32,
}

// Topics

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct TopicAddress {
    #[prost(int64, tag = "1")]
    pub subject_id: i64,
    #[prost(int32, tag = "2")]
    pub level: i32,
    #[prost(int32, tag = "3")]
    pub position: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Topic {
    #[prost(int64, tag = "1")]
    pub subject_id: i64,
    #[prost(int32, tag = "2")]
    pub level: i32,
    #[prost(int32, tag = "3")]
    pub position: i32,
    #[prost(string, tag = "4")]
    pub name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TopicList {
    #[prost(message, repeated, tag = "1")]
    pub topics: Vec<Topic>,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct GetTopicsRequest {
    #[prost(int64, tag = "1")]
    pub subject_id: i64,
    #[prost(int32, tag = "2")]
    pub level: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateTopicRequest {
    #[prost(int64, tag = "1")]
    pub subject_id: i64,
    #[prost(int32, tag = "2")]
    pub level: i32,
    #[prost(string, tag = "3")]
    pub name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EditTopicRequest {
    #[prost(message, optional, tag = "1")]
    pub topic: Option<TopicAddress>,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct MoveTopicRequest {
    #[prost(message, optional, tag = "1")]
    pub topic: Option<TopicAddress>,
    #[prost(int32, tag = "2")]
    pub target_position: i32,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct AddCardToTopicRequest {
    #[prost(int64, tag = "1")]
    pub card_id: i64,
    #[prost(message, optional, tag = "2")]
    pub topic: Option<TopicAddress>,
}

// Search

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchResult {
    #[prost(int32, tag = "1")]
    pub kind: i32,
    #[prost(int64, tag = "2")]
    pub id: i64,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchResultList {
    #[prost(message, repeated, tag = "1")]
    pub results: Vec<SearchResult>,
}
