use serde::{Deserialize, Serialize};

use super::kinds::{BlockType, CardState, TopicLevel};
use crate::proto;

/// A flashcard with its content blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: i64,
    pub headline: String,
    pub state: CardState,
    pub position: i32,
    pub blocks: Vec<Block>,
}

impl From<proto::Card> for Card {
    fn from(card: proto::Card) -> Self {
        Self {
            id: card.id,
            headline: card.headline,
            state: CardState::from_wire(card.state),
            position: card.position,
            blocks: card.blocks.into_iter().map(Block::from).collect(),
        }
    }
}

/// One piece of card content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Block {
    pub kind: BlockType,
    pub content: String,
    /// Free-form hint, e.g. the language of a code block or an image caption.
    pub metadata: String,
    pub extension: String,
}

impl Block {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: BlockType::Text,
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn code(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            kind: BlockType::Code,
            content: content.into(),
            metadata: language.into(),
            ..Default::default()
        }
    }
}

impl From<proto::Block> for Block {
    fn from(block: proto::Block) -> Self {
        Self {
            kind: BlockType::from_wire(block.r#type),
            content: block.content,
            metadata: block.metadata,
            extension: block.extension,
        }
    }
}

impl From<Block> for proto::Block {
    fn from(block: Block) -> Self {
        Self {
            r#type: block.kind.to_wire(),
            content: block.content,
            metadata: block.metadata,
            extension: block.extension,
        }
    }
}

/// Address of a topic: topics have no id of their own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TopicRef {
    pub subject_id: i64,
    pub level: TopicLevel,
    pub position: i32,
}

impl From<TopicRef> for proto::TopicAddress {
    fn from(topic: TopicRef) -> Self {
        Self {
            subject_id: topic.subject_id,
            level: topic.level.to_wire(),
            position: topic.position,
        }
    }
}

/// A node of a subject's topic hierarchy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    pub subject_id: i64,
    pub level: TopicLevel,
    pub position: i32,
    pub name: String,
}

impl Topic {
    pub fn reference(&self) -> TopicRef {
        TopicRef {
            subject_id: self.subject_id,
            level: self.level,
            position: self.position,
        }
    }
}

impl From<proto::Topic> for Topic {
    fn from(topic: proto::Topic) -> Self {
        Self {
            subject_id: topic.subject_id,
            level: TopicLevel::from_wire(topic.level),
            position: topic.position,
            name: topic.name,
        }
    }
}
