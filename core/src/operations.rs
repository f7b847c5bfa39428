//! Capability traits for the store that backs the API.
//!
//! # Design
//! Controllers only see these traits. Commands report success as `bool` and
//! lookups return `Option` or a possibly empty `Vec`; the controllers decide
//! what a `false` or an empty result means at the HTTP boundary. Any store
//! (in-memory, database-backed, a test double) satisfies the same contract.

use async_trait::async_trait;

use crate::types::{ListEntity, ToDoEntity, ToDoId};

/// List-level operations.
#[async_trait]
pub trait ListOperations: Send + Sync {
    async fn get_to_do_lists(&self) -> Vec<ListEntity>;

    async fn get_list_by_name(&self, name: &str) -> Option<ListEntity>;

    async fn update_list_name(&self, name: &str, new_name: &str) -> bool;

    async fn create_list(&self, name: &str) -> bool;

    async fn delete_list(&self, name: &str) -> bool;

    /// Append `second`'s items to `first` and remove `second`.
    async fn merge_lists(&self, first: &str, second: &str) -> bool;
}

/// Item-level operations, always scoped to a list.
#[async_trait]
pub trait ToDoOperations: Send + Sync {
    async fn get_to_do_items(&self, list_name: &str) -> Vec<ToDoEntity>;

    async fn get_to_do_item(&self, list_name: &str, id: ToDoId) -> Option<ToDoEntity>;

    async fn check_to_do_mark(&self, list_name: &str, id: ToDoId) -> bool;

    async fn uncheck_to_do_mark(&self, list_name: &str, id: ToDoId) -> bool;

    async fn update_to_do_description(&self, list_name: &str, id: ToDoId, description: &str) -> bool;

    /// The store assigns the item's id; the `id` on `item` is ignored.
    async fn add_to_do(&self, list_name: &str, item: ToDoEntity) -> bool;

    async fn delete_to_do(&self, list_name: &str, id: ToDoId) -> bool;

    /// Transfer the item from `source` to the end of `destination`.
    async fn move_to_do(&self, source: &str, id: ToDoId, destination: &str) -> bool;
}
