use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use prost::Message;
use store::{MemoryStore, Session};

use super::*;

/// A call seen by the recording transport.
#[derive(Clone, Debug)]
struct Call {
    method: &'static str,
    metadata: Metadata,
    body: Vec<u8>,
}

#[derive(Clone, Debug)]
enum Reply {
    Message(Vec<u8>),
    Status(i32, &'static str),
    Network(&'static str),
}

/// Transport answering from a table of canned replies and recording every call.
#[derive(Clone, Debug, Default)]
struct RecordingTransport {
    replies: Arc<Mutex<HashMap<&'static str, Reply>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingTransport {
    fn reply(&self, method: &'static str, message: impl Message) {
        self.replies
            .lock()
            .unwrap()
            .insert(method, Reply::Message(message.encode_to_vec()));
    }

    fn fail(&self, method: &'static str, reply: Reply) {
        self.replies.lock().unwrap().insert(method, reply);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn last_call(&self) -> Call {
        self.calls().pop().expect("no call recorded")
    }
}

impl Transport for RecordingTransport {
    async fn unary(&self, method: &'static str, metadata: &Metadata, body: Vec<u8>) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(Call {
            method,
            metadata: metadata.clone(),
            body,
        });
        match self.replies.lock().unwrap().get(method).cloned() {
            Some(Reply::Message(bytes)) => Ok(bytes),
            Some(Reply::Status(code, message)) => Err(ClientError::Status {
                code,
                message: message.to_string(),
            }),
            Some(Reply::Network(message)) => Err(ClientError::Transport(message.to_string())),
            None => Ok(Vec::new()),
        }
    }
}

fn client() -> (Client<RecordingTransport, MemoryStore>, RecordingTransport) {
    let transport = RecordingTransport::default();
    let client = Client::new(transport.clone(), Session::new(MemoryStore::new()));
    (client, transport)
}

fn signed_in_client() -> (Client<RecordingTransport, MemoryStore>, RecordingTransport) {
    let (client, transport) = client();
    client.session().set_token("tok-1");
    (client, transport)
}

#[tokio::test]
async fn test_sign_in_stores_token() {
    let (client, transport) = client();
    transport.reply(
        method::SIGN_IN,
        proto::SignInResponse {
            token: "tok-42".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        },
    );
    assert!(!client.is_authenticated());

    let signed_in = client.sign_in("ada@example.com", "secret").await.unwrap();
    assert_eq!(signed_in.token, "tok-42");
    assert_eq!(signed_in.user.name, "Ada");
    assert!(client.is_authenticated());

    let call = transport.last_call();
    assert_eq!(call.method, "SignIn");
    assert_eq!(call.metadata.get("token"), None);
    assert_eq!(call.metadata.get("device"), Some(client.session().device().as_str()));
    let request = proto::SignInRequest::decode(call.body.as_slice()).unwrap();
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "secret");

    // Subsequent calls carry the new token
    transport.reply(method::GET_ROADMAPS, proto::RoadmapList::default());
    client.get_roadmaps().await.unwrap();
    assert_eq!(transport.last_call().metadata.get("token"), Some("tok-42"));
}

#[tokio::test]
async fn test_failed_sign_in_keeps_signed_out() {
    let (client, transport) = client();
    transport.fail(method::SIGN_IN, Reply::Status(16, "invalid credentials"));

    let err = client.sign_in("ada@example.com", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "invalid credentials");
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_sign_out_clears_token() {
    let (client, transport) = signed_in_client();
    transport.reply(method::SIGN_OUT, proto::Empty {});

    client.sign_out().await.unwrap();
    assert!(!client.is_authenticated());
    assert_eq!(transport.last_call().metadata.get("token"), Some("tok-1"));
}

#[tokio::test]
async fn test_sign_out_clears_token_on_network_error() {
    let (client, transport) = signed_in_client();
    transport.fail(method::SIGN_OUT, Reply::Network("connection refused"));

    let err = client.sign_out().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(ref m) if m == "connection refused"));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_authenticated_calls_carry_metadata() {
    let (client, transport) = signed_in_client();
    let device = client.session().device();

    client.get_subjects().await.unwrap();
    let call = transport.last_call();
    assert_eq!(call.metadata.get("token"), Some("tok-1"));
    assert_eq!(call.metadata.get("device"), Some(device.as_str()));

    // Token changes after construction are honoured
    client.session().set_token("tok-2");
    client.get_subjects().await.unwrap();
    assert_eq!(transport.last_call().metadata.get("token"), Some("tok-2"));
}

#[tokio::test]
async fn test_create_roadmap_echo() {
    let (client, transport) = signed_in_client();
    transport.reply(
        method::CREATE_ROADMAP,
        proto::Roadmap {
            id: 1,
            name: "Math".to_string(),
            description: "desc".to_string(),
            milestones: Vec::new(),
        },
    );

    let roadmap = client.create_roadmap("Math", "desc").await.unwrap();
    assert_eq!(
        roadmap,
        Roadmap {
            id: 1,
            name: "Math".to_string(),
            description: "desc".to_string(),
            milestones: Vec::new(),
        }
    );

    let request = proto::CreateRoadmapRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.name, "Math");
    assert_eq!(request.description, "desc");
}

#[tokio::test]
async fn test_empty_lists_are_empty_vecs() {
    let (client, transport) = signed_in_client();
    transport.reply(method::GET_ROADMAPS, proto::RoadmapList::default());
    transport.reply(method::GET_RESOURCES, proto::ResourceList::default());

    assert!(client.get_roadmaps().await.unwrap().is_empty());
    assert!(client.get_resources(3).await.unwrap().is_empty());
    assert!(client.get_milestones(1).await.unwrap().is_empty());
    assert!(client.search_subjects("zzz").await.unwrap().is_empty());
    assert!(client.get_section_cards(7).await.unwrap().is_empty());
    assert!(client.search("zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_milestone_dates() {
    let (client, transport) = signed_in_client();
    transport.reply(
        method::GET_MILESTONES,
        proto::MilestoneList {
            milestones: vec![
                proto::Milestone {
                    id: 1,
                    name: "Algebra".to_string(),
                    target_date: 1_700_000_000,
                    subject_id: 4,
                    level: 2,
                    ..Default::default()
                },
                proto::Milestone {
                    id: 2,
                    name: "Calculus".to_string(),
                    ..Default::default()
                },
            ],
        },
    );

    let milestones = client.get_milestones(1).await.unwrap();
    assert_eq!(milestones.len(), 2);
    assert_eq!(
        milestones[0].target_date,
        DateTime::from_timestamp(1_700_000_000, 0)
    );
    assert_eq!(milestones[0].subject_id, Some(4));
    assert_eq!(milestones[0].level, TopicLevel::Origin);
    assert_eq!(milestones[1].target_date, None);
}

#[tokio::test]
async fn test_create_milestone_request() {
    let (client, transport) = signed_in_client();
    let date = DateTime::from_timestamp(1_700_000_000, 750_000_000);

    client
        .create_milestone(5, None, TopicLevel::Depth, "Linear maps", "", date)
        .await
        .unwrap();

    let request =
        proto::CreateMilestoneRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.roadmap_id, 5);
    assert_eq!(request.subject_id, 0);
    assert_eq!(request.level, 1);
    assert_eq!(request.target_date, 1_700_000_000);
}

#[tokio::test]
async fn test_card_state_fallback() {
    let (client, transport) = signed_in_client();
    transport.reply(
        method::GET_CARD,
        proto::Card {
            id: 42,
            headline: "Foo".to_string(),
            state: 99,
            ..Default::default()
        },
    );

    let card = client.get_card(42).await.unwrap();
    assert_eq!(card.state.label(), "draft");
    let request = proto::IdRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.id, 42);
}

#[tokio::test]
async fn test_topics_by_level() {
    let (client, transport) = signed_in_client();
    transport.reply(
        method::GET_TOPICS,
        proto::TopicList {
            topics: vec![proto::Topic {
                subject_id: 8,
                level: 1,
                position: 0,
                name: "Lifetimes".to_string(),
            }],
        },
    );

    let topics = client.get_topics(8, TopicLevel::Depth).await.unwrap();
    assert_eq!(topics[0].level, TopicLevel::Depth);
    assert_eq!(topics[0].name, "Lifetimes");
    let request = proto::GetTopicsRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!((request.subject_id, request.level), (8, 1));

    client.create_topic(8, TopicLevel::Surface, "Syntax").await.unwrap();
    let request = proto::CreateTopicRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.level, 0);
    assert_eq!(request.name, "Syntax");
}

#[tokio::test]
async fn test_roadmap_with_milestones() {
    let (client, transport) = signed_in_client();
    transport.reply(
        method::GET_ROADMAP,
        proto::Roadmap {
            id: 1,
            name: "Math".to_string(),
            description: String::new(),
            milestones: vec![proto::Milestone {
                id: 7,
                name: "Algebra".to_string(),
                completed: true,
                ..Default::default()
            }],
        },
    );

    let roadmap = client.get_roadmap(1).await.unwrap();
    assert_eq!(roadmap.milestones.len(), 1);
    assert!(roadmap.milestones[0].completed);

    transport.reply(
        method::CREATE_SUBJECT,
        proto::Subject {
            id: 3,
            name: "Rust".to_string(),
            description: "systems".to_string(),
        },
    );
    let subject = client.create_subject("Rust", "systems").await.unwrap();
    assert_eq!(subject.id, 3);
    let request = proto::CreateSubjectRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.name, "Rust");
}

#[tokio::test]
async fn test_topic_operations_address_topics() {
    let (client, transport) = signed_in_client();
    let topic = TopicRef {
        subject_id: 8,
        level: TopicLevel::Depth,
        position: 2,
    };
    transport.reply(
        method::EDIT_TOPIC,
        proto::Topic {
            subject_id: 8,
            level: 1,
            position: 2,
            name: "Renamed".to_string(),
        },
    );

    let edited = client.edit_topic(topic, "Renamed").await.unwrap();
    assert_eq!(edited.reference(), topic);
    let request = proto::EditTopicRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.topic, Some(proto::TopicAddress::from(topic)));

    client.move_topic(topic, 0).await.unwrap();
    let request = proto::MoveTopicRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.target_position, 0);

    client.remove_topic(topic).await.unwrap();
    assert_eq!(transport.last_call().method, "RemoveTopic");
}

#[tokio::test]
async fn test_create_card_sends_blocks() {
    let (client, transport) = signed_in_client();
    let blocks = vec![
        Block::text("A borrow is a reference"),
        Block {
            kind: crate::models::BlockType::Code,
            content: "let r = &x;".to_string(),
            metadata: "rust".to_string(),
            ..Default::default()
        },
    ];

    client.create_card(3, "Borrowing", blocks).await.unwrap();

    let request = proto::CreateCardRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.section_id, 3);
    assert_eq!(request.blocks.len(), 2);
    assert_eq!(request.blocks[1].r#type, 1);
    assert_eq!(request.blocks[1].metadata, "rust");
}

#[tokio::test]
async fn test_sign_up_is_anonymous() {
    let (client, transport) = client();
    transport.reply(
        method::SIGN_UP,
        proto::User {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        },
    );

    let user = client.sign_up("Ada", "ada@example.com", "secret12").await.unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert!(!client.is_authenticated());

    let call = transport.last_call();
    assert_eq!(call.method, "SignUp");
    assert_eq!(call.metadata.get("token"), None);
    let request = proto::SignUpRequest::decode(call.body.as_slice()).unwrap();
    assert_eq!(request.name, "Ada");
    assert_eq!(request.password, "secret12");
}

#[tokio::test]
async fn test_resource_creation_and_attachment() {
    let (client, transport) = signed_in_client();
    transport.reply(
        method::CREATE_RESOURCE,
        proto::Resource {
            id: 11,
            name: "Rust Book".to_string(),
            ..Default::default()
        },
    );

    let resource = client
        .create_resource(NewResource {
            subject_id: 4,
            name: "Rust Book".to_string(),
            sections: 3,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(resource.id, 11);
    let request =
        proto::CreateResourceRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.subject_id, 4);
    assert_eq!(request.sections, 3);

    client.add_resource(9, 11).await.unwrap();
    let request = proto::AddResourceRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.subject_id, 9);
    assert_eq!(request.resource_id, 11);
}

#[tokio::test]
async fn test_sections_and_review() {
    let (client, transport) = signed_in_client();
    transport.reply(
        method::GET_SECTIONS,
        proto::SectionList {
            sections: vec![
                proto::Section {
                    id: 1,
                    position: 0,
                    reviewed: true,
                    card_count: 4,
                },
                proto::Section {
                    id: 2,
                    position: 1,
                    ..Default::default()
                },
            ],
        },
    );

    let sections = client.get_sections(11).await.unwrap();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].reviewed);
    assert_eq!(sections[0].card_count, 4);
    assert!(!sections[1].reviewed);

    client.mark_section_reviewed(2).await.unwrap();
    let call = transport.last_call();
    assert_eq!(call.method, "MarkSectionReviewed");
    assert_eq!(proto::IdRequest::decode(call.body.as_slice()).unwrap().id, 2);
}

#[tokio::test]
async fn test_cards_by_topic() {
    let (client, transport) = signed_in_client();
    let topic = TopicRef {
        subject_id: 8,
        level: TopicLevel::Origin,
        position: 0,
    };
    transport.reply(
        method::GET_TOPIC_CARDS,
        proto::CardList {
            cards: vec![proto::Card {
                id: 5,
                headline: "Ownership".to_string(),
                state: 1,
                ..Default::default()
            }],
        },
    );

    let cards = client.get_topic_cards(topic).await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].headline, "Ownership");
    let address = proto::TopicAddress::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(address.level, 2);

    client.add_card_to_topic(5, topic).await.unwrap();
    let request =
        proto::AddCardToTopicRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.card_id, 5);
    assert_eq!(request.topic, Some(proto::TopicAddress::from(topic)));

    client.move_card(5, 3, 1).await.unwrap();
    let request = proto::MoveCardRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!((request.card_id, request.section_id, request.position), (5, 3, 1));
}

#[tokio::test]
async fn test_search_results_keep_kind() {
    let (client, transport) = signed_in_client();
    transport.reply(
        method::SEARCH,
        proto::SearchResultList {
            results: vec![
                proto::SearchResult {
                    kind: 1,
                    id: 11,
                    name: "Rust Book".to_string(),
                    ..Default::default()
                },
                proto::SearchResult {
                    kind: 99,
                    id: 4,
                    name: "Rust".to_string(),
                    ..Default::default()
                },
            ],
        },
    );

    let results = client.search("rust").await.unwrap();
    assert_eq!(results[0].kind, crate::models::SearchKind::Resource);
    assert_eq!(results[1].kind, crate::models::SearchKind::Subject);
    let request = proto::SearchRequest::decode(transport.last_call().body.as_slice()).unwrap();
    assert_eq!(request.query, "rust");
}

#[tokio::test]
async fn test_errors_are_not_retried() {
    let (client, transport) = signed_in_client();
    transport.fail(method::GET_SUBJECTS, Reply::Network("offline"));

    assert!(client.get_subjects().await.is_err());
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn test_undecodable_response() {
    let (client, transport) = signed_in_client();
    transport
        .replies
        .lock()
        .unwrap()
        .insert(method::GET_CARD, Reply::Message(vec![0xff, 0xff, 0xff]));

    let err = client.get_card(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
