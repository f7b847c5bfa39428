//! Domain entities and DTOs for the to-do lists API.
//!
//! # Design
//! A list is keyed by its `name`; items are keyed by `id` within the store
//! that assigned it. The same types serve as the server's response bodies
//! and the client's parse targets, so the JSON schema lives in one place.

use serde::{Deserialize, Serialize};

/// Identifier the backing store assigns to an item.
pub type ToDoId = u64;

/// A single to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToDoEntity {
    pub id: ToDoId,
    pub description: String,
    pub is_complete: bool,
}

impl ToDoEntity {
    /// An entity that has not been stored yet. The store replaces `id`.
    pub fn unsaved(description: impl Into<String>, is_complete: bool) -> Self {
        Self {
            id: 0,
            description: description.into(),
            is_complete,
        }
    }
}

/// A named list owning an ordered collection of items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListEntity {
    pub name: String,
    #[serde(default)]
    pub todos: Vec<ToDoEntity>,
}

impl ListEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }
}

/// Request payload for adding an item to a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToDoDto {
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl From<ToDoDto> for ToDoEntity {
    fn from(dto: ToDoDto) -> Self {
        ToDoEntity::unsaved(dto.description, dto.is_complete)
    }
}

/// Request payload for renaming a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameList {
    pub new_name: String,
}

/// Request payload for replacing an item's description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDescription {
    pub description: String,
}

/// Body returned for successful commands and for every rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
