//! Item-level endpoints, scoped to a list.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use todo_core::{Message, ToDoDto, ToDoEntity, ToDoId, ToDoOperations, UpdateDescription};

use crate::error::{acknowledge, require, ControllerError, ControllerResult};
use crate::AppState;

/// Validates item requests and delegates them to a `ToDoOperations` store.
#[derive(Clone)]
pub struct ToDoController {
    operations: Arc<dyn ToDoOperations>,
}

impl ToDoController {
    pub fn new(operations: Arc<dyn ToDoOperations>) -> Self {
        Self { operations }
    }

    pub async fn get_to_do_items(&self, list_name: &str) -> ControllerResult<Vec<ToDoEntity>> {
        require("list name", list_name)?;
        let items = self.operations.get_to_do_items(list_name).await;
        if items.is_empty() {
            tracing::warn!(list_name, "no items to return");
            return Err(ControllerError::operation(format!(
                "no to-do items found in list '{list_name}'"
            )));
        }
        Ok(Json(items))
    }

    pub async fn get_to_do_item(&self, list_name: &str, id: ToDoId) -> ControllerResult<ToDoEntity> {
        require("list name", list_name)?;
        match self.operations.get_to_do_item(list_name, id).await {
            Some(item) => Ok(Json(item)),
            None => {
                tracing::warn!(list_name, id, "item not found");
                Err(ControllerError::operation(format!(
                    "to-do item {id} not found in list '{list_name}'"
                )))
            }
        }
    }

    pub async fn check_to_do_mark(&self, list_name: &str, id: ToDoId) -> ControllerResult<Message> {
        require("list name", list_name)?;
        let checked = self.operations.check_to_do_mark(list_name, id).await;
        acknowledge(
            checked,
            &format!("to-do item {id} checked"),
            &format!("could not check to-do item {id} in list '{list_name}'"),
        )
    }

    pub async fn uncheck_to_do_mark(&self, list_name: &str, id: ToDoId) -> ControllerResult<Message> {
        require("list name", list_name)?;
        let unchecked = self.operations.uncheck_to_do_mark(list_name, id).await;
        acknowledge(
            unchecked,
            &format!("to-do item {id} unchecked"),
            &format!("could not uncheck to-do item {id} in list '{list_name}'"),
        )
    }

    pub async fn update_to_do_description(
        &self,
        list_name: &str,
        id: ToDoId,
        description: &str,
    ) -> ControllerResult<Message> {
        require("list name", list_name)?;
        let updated = self
            .operations
            .update_to_do_description(list_name, id, description)
            .await;
        acknowledge(
            updated,
            &format!("to-do item {id} description updated"),
            &format!("could not update to-do item {id} in list '{list_name}'"),
        )
    }

    pub async fn add_to_do(&self, list_name: &str, input: ToDoDto) -> ControllerResult<Message> {
        require("list name", list_name)?;
        let added = self.operations.add_to_do(list_name, ToDoEntity::from(input)).await;
        acknowledge(
            added,
            &format!("to-do item added to list '{list_name}'"),
            &format!("could not add to-do item to list '{list_name}'"),
        )
    }

    pub async fn delete_to_do_from_list(&self, list_name: &str, id: ToDoId) -> ControllerResult<Message> {
        require("list name", list_name)?;
        let deleted = self.operations.delete_to_do(list_name, id).await;
        acknowledge(
            deleted,
            &format!("to-do item {id} deleted"),
            &format!("could not delete to-do item {id} from list '{list_name}'"),
        )
    }

    pub async fn move_to_do_to_another_list(
        &self,
        source: &str,
        id: ToDoId,
        destination: &str,
    ) -> ControllerResult<Message> {
        require("source list name", source)?;
        require("destination list name", destination)?;
        let moved = self.operations.move_to_do(source, id, destination).await;
        acknowledge(
            moved,
            &format!("to-do item {id} moved from '{source}' to '{destination}'"),
            &format!("could not move to-do item {id} from '{source}' to '{destination}'"),
        )
    }
}

pub async fn get_to_do_items(
    State(state): State<AppState>,
    Path(list_name): Path<String>,
) -> ControllerResult<Vec<ToDoEntity>> {
    state.todos.get_to_do_items(&list_name).await
}

pub async fn get_to_do_item(
    State(state): State<AppState>,
    Path((list_name, id)): Path<(String, ToDoId)>,
) -> ControllerResult<ToDoEntity> {
    state.todos.get_to_do_item(&list_name, id).await
}

pub async fn check_to_do_mark(
    State(state): State<AppState>,
    Path((list_name, id)): Path<(String, ToDoId)>,
) -> ControllerResult<Message> {
    state.todos.check_to_do_mark(&list_name, id).await
}

pub async fn uncheck_to_do_mark(
    State(state): State<AppState>,
    Path((list_name, id)): Path<(String, ToDoId)>,
) -> ControllerResult<Message> {
    state.todos.uncheck_to_do_mark(&list_name, id).await
}

pub async fn update_to_do_description(
    State(state): State<AppState>,
    Path((list_name, id)): Path<(String, ToDoId)>,
    Json(input): Json<UpdateDescription>,
) -> ControllerResult<Message> {
    state
        .todos
        .update_to_do_description(&list_name, id, &input.description)
        .await
}

pub async fn add_to_do(
    State(state): State<AppState>,
    Path(list_name): Path<String>,
    Json(input): Json<ToDoDto>,
) -> ControllerResult<Message> {
    state.todos.add_to_do(&list_name, input).await
}

pub async fn delete_to_do_from_list(
    State(state): State<AppState>,
    Path((list_name, id)): Path<(String, ToDoId)>,
) -> ControllerResult<Message> {
    state.todos.delete_to_do_from_list(&list_name, id).await
}

pub async fn move_to_do_to_another_list(
    State(state): State<AppState>,
    Path((source, id, destination)): Path<(String, ToDoId, String)>,
) -> ControllerResult<Message> {
    state
        .todos
        .move_to_do_to_another_list(&source, id, &destination)
        .await
}
