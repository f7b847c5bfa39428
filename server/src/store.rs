//! In-memory backing store implementing both operation traits.
//!
//! # Design
//! All lists live in one map behind a single `RwLock`. Commands that touch
//! two lists (move, merge, rename) run under one write guard, so other
//! requests never observe an item in both lists or in neither. Ids come from
//! a store-wide counter, which keeps them unique across lists after moves
//! and merges.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use todo_core::{ListEntity, ListOperations, ToDoEntity, ToDoId, ToDoOperations};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Lists {
    by_name: HashMap<String, ListEntity>,
    next_id: ToDoId,
}

impl Lists {
    fn item_mut(&mut self, list_name: &str, id: ToDoId) -> Option<&mut ToDoEntity> {
        self.by_name
            .get_mut(list_name)?
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
    }

    fn take_item(&mut self, list_name: &str, id: ToDoId) -> Option<ToDoEntity> {
        let todos = &mut self.by_name.get_mut(list_name)?.todos;
        let index = todos.iter().position(|todo| todo.id == id)?;
        Some(todos.remove(index))
    }
}

/// Cloneable handle to a shared in-memory store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Lists>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn set_complete(&self, list_name: &str, id: ToDoId, is_complete: bool) -> bool {
        let mut lists = self.inner.write().await;
        match lists.item_mut(list_name, id) {
            Some(todo) => {
                todo.is_complete = is_complete;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl ListOperations for InMemoryStore {
    async fn get_to_do_lists(&self) -> Vec<ListEntity> {
        let lists = self.inner.read().await;
        let mut all: Vec<ListEntity> = lists.by_name.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    async fn get_list_by_name(&self, name: &str) -> Option<ListEntity> {
        self.inner.read().await.by_name.get(name).cloned()
    }

    async fn update_list_name(&self, name: &str, new_name: &str) -> bool {
        let mut lists = self.inner.write().await;
        if name == new_name {
            return lists.by_name.contains_key(name);
        }
        if lists.by_name.contains_key(new_name) {
            return false;
        }
        let Some(mut list) = lists.by_name.remove(name) else {
            return false;
        };
        list.name = new_name.to_string();
        lists.by_name.insert(list.name.clone(), list);
        true
    }

    async fn create_list(&self, name: &str) -> bool {
        let mut lists = self.inner.write().await;
        if lists.by_name.contains_key(name) {
            return false;
        }
        lists.by_name.insert(name.to_string(), ListEntity::new(name));
        true
    }

    async fn delete_list(&self, name: &str) -> bool {
        self.inner.write().await.by_name.remove(name).is_some()
    }

    async fn merge_lists(&self, first: &str, second: &str) -> bool {
        let mut lists = self.inner.write().await;
        if first == second || !lists.by_name.contains_key(first) {
            return false;
        }
        let Some(absorbed) = lists.by_name.remove(second) else {
            return false;
        };
        match lists.by_name.get_mut(first) {
            Some(survivor) => {
                survivor.todos.extend(absorbed.todos);
                true
            }
            None => {
                lists.by_name.insert(second.to_string(), absorbed);
                false
            }
        }
    }
}

#[async_trait]
impl ToDoOperations for InMemoryStore {
    async fn get_to_do_items(&self, list_name: &str) -> Vec<ToDoEntity> {
        self.inner
            .read()
            .await
            .by_name
            .get(list_name)
            .map(|list| list.todos.clone())
            .unwrap_or_default()
    }

    async fn get_to_do_item(&self, list_name: &str, id: ToDoId) -> Option<ToDoEntity> {
        let lists = self.inner.read().await;
        lists
            .by_name
            .get(list_name)?
            .todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
    }

    async fn check_to_do_mark(&self, list_name: &str, id: ToDoId) -> bool {
        self.set_complete(list_name, id, true).await
    }

    async fn uncheck_to_do_mark(&self, list_name: &str, id: ToDoId) -> bool {
        self.set_complete(list_name, id, false).await
    }

    async fn update_to_do_description(&self, list_name: &str, id: ToDoId, description: &str) -> bool {
        let mut lists = self.inner.write().await;
        match lists.item_mut(list_name, id) {
            Some(todo) => {
                todo.description = description.to_string();
                true
            }
            None => false,
        }
    }

    async fn add_to_do(&self, list_name: &str, item: ToDoEntity) -> bool {
        let mut lists = self.inner.write().await;
        let id = lists.next_id;
        let Some(list) = lists.by_name.get_mut(list_name) else {
            return false;
        };
        list.todos.push(ToDoEntity { id, ..item });
        lists.next_id += 1;
        true
    }

    async fn delete_to_do(&self, list_name: &str, id: ToDoId) -> bool {
        self.inner.write().await.take_item(list_name, id).is_some()
    }

    async fn move_to_do(&self, source: &str, id: ToDoId, destination: &str) -> bool {
        let mut lists = self.inner.write().await;
        if source == destination {
            return false;
        }
        let Some(mut target) = lists.by_name.remove(destination) else {
            return false;
        };
        let moved = match lists.take_item(source, id) {
            Some(item) => {
                target.todos.push(item);
                true
            }
            None => false,
        };
        lists.by_name.insert(destination.to_string(), target);
        moved
    }
}
