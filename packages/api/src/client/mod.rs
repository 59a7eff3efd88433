//! # Client: the single point of contact with the study service
//!
//! [`Client`] wraps a [`Transport`] and a [`Session`] and exposes one async
//! method per remote operation. Pages never build wire messages or metadata
//! themselves; they pass plain arguments and get plain models back.
//!
//! ## Call shape
//!
//! Every method follows the same steps (see [`Client::call`]):
//!
//! 1. Build the request message from the arguments. No validation happens
//!    here; pages validate their forms before calling.
//! 2. For authenticated calls, attach `token` and `device` metadata read from
//!    the session **at call time**, so a token stored after the client was
//!    built is honoured.
//! 3. Invoke the transport exactly once.
//! 4. On failure, log and return the error. On success, decode and map the
//!    response into models (epoch seconds → dates, wire ints → enums).
//!
//! ## Special cases
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`sign_in`](Client::sign_in) | Persists the returned token before resolving. |
//! | [`sign_out`](Client::sign_out) | Always clears the local token, even when the remote call fails; the error is still returned. |
//! | List methods | Map each element independently; an empty list is an empty `Vec`. |
//!
//! ## Construction
//!
//! The client is built once at the application entry point and handed to
//! pages through context. Building it is the whole initialization: there is no
//! "not ready yet" state to wait for.

use chrono::{DateTime, Utc};
use prost::Message;
use store::{KeyValueStore, Session, DEVICE_KEY, TOKEN_KEY};

use crate::error::{ClientError, Result};
use crate::models::{
    to_epoch_seconds, Block, Card, Milestone, NewResource, Resource, Roadmap, SearchResult,
    Section, SignedIn, Subject, Topic, TopicLevel, TopicRef, UserInfo,
};
use crate::proto::{self, method};
use crate::transport::{Metadata, Transport};

/// Whether a call carries the session's token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    Anonymous,
    Required,
}

/// RPC client for the `studymap.Studymap` service.
#[derive(Clone, Debug)]
pub struct Client<T, S: KeyValueStore> {
    transport: T,
    session: Session<S>,
}

impl<T: Transport, S: KeyValueStore> Client<T, S> {
    pub fn new(transport: T, session: Session<S>) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn metadata(&self, auth: Auth) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert(DEVICE_KEY, self.session.device());
        if auth == Auth::Required {
            metadata.insert(TOKEN_KEY, self.session.token());
        }
        metadata
    }

    /// Encode, send once, decode.
    async fn call<Req, Resp>(&self, name: &'static str, auth: Auth, request: Req) -> Result<Resp>
    where
        Req: Message,
        Resp: Message + Default,
    {
        let metadata = self.metadata(auth);
        tracing::debug!(method = name, "calling remote method");

        let bytes = self
            .transport
            .unary(name, &metadata, request.encode_to_vec())
            .await
            .inspect_err(|e| tracing::error!(method = name, "remote call failed: {e}"))?;

        Resp::decode(bytes.as_slice()).map_err(|e| {
            tracing::error!(method = name, "failed to decode response: {e}");
            ClientError::from(e)
        })
    }

    // Accounts

    /// Sign in and persist the returned token.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn> {
        let request = proto::SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: proto::SignInResponse =
            self.call(method::SIGN_IN, Auth::Anonymous, request).await?;
        self.session.set_token(&response.token);
        tracing::info!("signed in");
        Ok(SignedIn::from(response))
    }

    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<UserInfo> {
        let request = proto::SignUpRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: proto::User = self.call(method::SIGN_UP, Auth::Anonymous, request).await?;
        Ok(UserInfo::from(response))
    }

    /// Sign out remotely; the local token is cleared whatever the outcome.
    pub async fn sign_out(&self) -> Result<()> {
        let result: Result<proto::Empty> = self
            .call(method::SIGN_OUT, Auth::Required, proto::Empty {})
            .await;
        self.session.clear_token();
        tracing::info!("signed out");
        result.map(|_| ())
    }

    // Roadmaps

    pub async fn get_roadmaps(&self) -> Result<Vec<Roadmap>> {
        let response: proto::RoadmapList = self
            .call(method::GET_ROADMAPS, Auth::Required, proto::Empty {})
            .await?;
        Ok(response.roadmaps.into_iter().map(Roadmap::from).collect())
    }

    pub async fn get_roadmap(&self, roadmap_id: i64) -> Result<Roadmap> {
        let response: proto::Roadmap = self
            .call(method::GET_ROADMAP, Auth::Required, proto::IdRequest { id: roadmap_id })
            .await?;
        Ok(Roadmap::from(response))
    }

    pub async fn create_roadmap(&self, name: &str, description: &str) -> Result<Roadmap> {
        let request = proto::CreateRoadmapRequest {
            name: name.to_string(),
            description: description.to_string(),
        };
        let response: proto::Roadmap = self
            .call(method::CREATE_ROADMAP, Auth::Required, request)
            .await?;
        Ok(Roadmap::from(response))
    }

    pub async fn get_milestones(&self, roadmap_id: i64) -> Result<Vec<Milestone>> {
        let response: proto::MilestoneList = self
            .call(method::GET_MILESTONES, Auth::Required, proto::IdRequest { id: roadmap_id })
            .await?;
        Ok(response.milestones.into_iter().map(Milestone::from).collect())
    }

    pub async fn create_milestone(
        &self,
        roadmap_id: i64,
        subject_id: Option<i64>,
        level: TopicLevel,
        name: &str,
        description: &str,
        target_date: Option<DateTime<Utc>>,
    ) -> Result<Milestone> {
        let request = proto::CreateMilestoneRequest {
            roadmap_id,
            subject_id: subject_id.unwrap_or(0),
            level: level.to_wire(),
            name: name.to_string(),
            description: description.to_string(),
            target_date: to_epoch_seconds(target_date),
        };
        let response: proto::Milestone = self
            .call(method::CREATE_MILESTONE, Auth::Required, request)
            .await?;
        Ok(Milestone::from(response))
    }

    // Subjects

    pub async fn get_subjects(&self) -> Result<Vec<Subject>> {
        let response: proto::SubjectList = self
            .call(method::GET_SUBJECTS, Auth::Required, proto::Empty {})
            .await?;
        Ok(response.subjects.into_iter().map(Subject::from).collect())
    }

    pub async fn create_subject(&self, name: &str, description: &str) -> Result<Subject> {
        let request = proto::CreateSubjectRequest {
            name: name.to_string(),
            description: description.to_string(),
        };
        let response: proto::Subject = self
            .call(method::CREATE_SUBJECT, Auth::Required, request)
            .await?;
        Ok(Subject::from(response))
    }

    pub async fn search_subjects(&self, query: &str) -> Result<Vec<Subject>> {
        let request = proto::SearchRequest {
            query: query.to_string(),
        };
        let response: proto::SubjectList = self
            .call(method::SEARCH_SUBJECTS, Auth::Required, request)
            .await?;
        Ok(response.subjects.into_iter().map(Subject::from).collect())
    }

    /// Search subjects and resources at once.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let request = proto::SearchRequest {
            query: query.to_string(),
        };
        let response: proto::SearchResultList =
            self.call(method::SEARCH, Auth::Required, request).await?;
        Ok(response.results.into_iter().map(SearchResult::from).collect())
    }

    // Resources

    pub async fn get_resources(&self, subject_id: i64) -> Result<Vec<Resource>> {
        let response: proto::ResourceList = self
            .call(method::GET_RESOURCES, Auth::Required, proto::IdRequest { id: subject_id })
            .await?;
        Ok(response.resources.into_iter().map(Resource::from).collect())
    }

    pub async fn create_resource(&self, resource: NewResource) -> Result<Resource> {
        let request = proto::CreateResourceRequest::from(resource);
        let response: proto::Resource = self
            .call(method::CREATE_RESOURCE, Auth::Required, request)
            .await?;
        Ok(Resource::from(response))
    }

    /// Attach an existing resource to a subject.
    pub async fn add_resource(&self, subject_id: i64, resource_id: i64) -> Result<()> {
        let request = proto::AddResourceRequest {
            subject_id,
            resource_id,
        };
        let _: proto::Empty = self
            .call(method::ADD_RESOURCE, Auth::Required, request)
            .await?;
        Ok(())
    }

    pub async fn get_sections(&self, resource_id: i64) -> Result<Vec<Section>> {
        let response: proto::SectionList = self
            .call(method::GET_SECTIONS, Auth::Required, proto::IdRequest { id: resource_id })
            .await?;
        Ok(response.sections.into_iter().map(Section::from).collect())
    }

    pub async fn mark_section_reviewed(&self, section_id: i64) -> Result<()> {
        let _: proto::Empty = self
            .call(
                method::MARK_SECTION_REVIEWED,
                Auth::Required,
                proto::IdRequest { id: section_id },
            )
            .await?;
        Ok(())
    }

    // Cards

    pub async fn get_section_cards(&self, section_id: i64) -> Result<Vec<Card>> {
        let response: proto::CardList = self
            .call(
                method::GET_SECTION_CARDS,
                Auth::Required,
                proto::IdRequest { id: section_id },
            )
            .await?;
        Ok(response.cards.into_iter().map(Card::from).collect())
    }

    pub async fn get_topic_cards(&self, topic: TopicRef) -> Result<Vec<Card>> {
        let response: proto::CardList = self
            .call(
                method::GET_TOPIC_CARDS,
                Auth::Required,
                proto::TopicAddress::from(topic),
            )
            .await?;
        Ok(response.cards.into_iter().map(Card::from).collect())
    }

    pub async fn get_card(&self, card_id: i64) -> Result<Card> {
        let response: proto::Card = self
            .call(method::GET_CARD, Auth::Required, proto::IdRequest { id: card_id })
            .await?;
        Ok(Card::from(response))
    }

    pub async fn create_card(
        &self,
        section_id: i64,
        headline: &str,
        blocks: Vec<Block>,
    ) -> Result<Card> {
        let request = proto::CreateCardRequest {
            section_id,
            headline: headline.to_string(),
            blocks: blocks.into_iter().map(proto::Block::from).collect(),
        };
        let response: proto::Card = self
            .call(method::CREATE_CARD, Auth::Required, request)
            .await?;
        Ok(Card::from(response))
    }

    /// Move a card to `position` within a section (possibly another one).
    pub async fn move_card(&self, card_id: i64, section_id: i64, position: i32) -> Result<()> {
        let request = proto::MoveCardRequest {
            card_id,
            section_id,
            position,
        };
        let _: proto::Empty = self.call(method::MOVE_CARD, Auth::Required, request).await?;
        Ok(())
    }

    pub async fn add_card_to_topic(&self, card_id: i64, topic: TopicRef) -> Result<()> {
        let request = proto::AddCardToTopicRequest {
            card_id,
            topic: Some(topic.into()),
        };
        let _: proto::Empty = self
            .call(method::ADD_CARD_TO_TOPIC, Auth::Required, request)
            .await?;
        Ok(())
    }

    // Topics

    pub async fn get_topics(&self, subject_id: i64, level: TopicLevel) -> Result<Vec<Topic>> {
        let request = proto::GetTopicsRequest {
            subject_id,
            level: level.to_wire(),
        };
        let response: proto::TopicList = self
            .call(method::GET_TOPICS, Auth::Required, request)
            .await?;
        Ok(response.topics.into_iter().map(Topic::from).collect())
    }

    pub async fn create_topic(&self, subject_id: i64, level: TopicLevel, name: &str) -> Result<Topic> {
        let request = proto::CreateTopicRequest {
            subject_id,
            level: level.to_wire(),
            name: name.to_string(),
        };
        let response: proto::Topic = self
            .call(method::CREATE_TOPIC, Auth::Required, request)
            .await?;
        Ok(Topic::from(response))
    }

    pub async fn edit_topic(&self, topic: TopicRef, name: &str) -> Result<Topic> {
        let request = proto::EditTopicRequest {
            topic: Some(topic.into()),
            name: name.to_string(),
        };
        let response: proto::Topic = self
            .call(method::EDIT_TOPIC, Auth::Required, request)
            .await?;
        Ok(Topic::from(response))
    }

    pub async fn remove_topic(&self, topic: TopicRef) -> Result<()> {
        let _: proto::Empty = self
            .call(
                method::REMOVE_TOPIC,
                Auth::Required,
                proto::TopicAddress::from(topic),
            )
            .await?;
        Ok(())
    }

    /// Reorder a topic within its subject and level.
    pub async fn move_topic(&self, topic: TopicRef, target_position: i32) -> Result<()> {
        let request = proto::MoveTopicRequest {
            topic: Some(topic.into()),
            target_position,
        };
        let _: proto::Empty = self
            .call(method::MOVE_TOPIC, Auth::Required, request)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
