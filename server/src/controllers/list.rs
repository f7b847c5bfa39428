//! List-level endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use todo_core::{ListEntity, ListOperations, Message, RenameList};

use crate::error::{acknowledge, require, ControllerError, ControllerResult};
use crate::AppState;

/// Validates list requests and delegates them to a `ListOperations` store.
#[derive(Clone)]
pub struct ListController {
    operations: Arc<dyn ListOperations>,
}

impl ListController {
    pub fn new(operations: Arc<dyn ListOperations>) -> Self {
        Self { operations }
    }

    pub async fn get_to_do_lists(&self) -> ControllerResult<Vec<ListEntity>> {
        let lists = self.operations.get_to_do_lists().await;
        if lists.is_empty() {
            tracing::warn!("no lists to return");
            return Err(ControllerError::operation("no lists found"));
        }
        tracing::debug!(count = lists.len(), "returning lists");
        Ok(Json(lists))
    }

    pub async fn get_to_do_list_by_name(&self, name: &str) -> ControllerResult<ListEntity> {
        require("list name", name)?;
        match self.operations.get_list_by_name(name).await {
            Some(list) => Ok(Json(list)),
            None => {
                tracing::warn!(name, "list not found");
                Err(ControllerError::operation(format!("list '{name}' not found")))
            }
        }
    }

    pub async fn update_list_name(&self, name: &str, new_name: &str) -> ControllerResult<Message> {
        require("list name", name)?;
        require("new list name", new_name)?;
        let renamed = self.operations.update_list_name(name, new_name).await;
        acknowledge(
            renamed,
            &format!("list '{name}' renamed to '{new_name}'"),
            &format!("could not rename list '{name}' to '{new_name}'"),
        )
    }

    pub async fn create_to_do_list(&self, name: &str) -> ControllerResult<Message> {
        require("list name", name)?;
        let created = self.operations.create_list(name).await;
        acknowledge(
            created,
            &format!("list '{name}' created"),
            &format!("could not create list '{name}'"),
        )
    }

    pub async fn delete_to_do_list(&self, name: &str) -> ControllerResult<Message> {
        require("list name", name)?;
        let deleted = self.operations.delete_list(name).await;
        acknowledge(
            deleted,
            &format!("list '{name}' deleted"),
            &format!("could not delete list '{name}'"),
        )
    }

    pub async fn merge_lists(&self, first: &str, second: &str) -> ControllerResult<Message> {
        require("first list name", first)?;
        require("second list name", second)?;
        let merged = self.operations.merge_lists(first, second).await;
        acknowledge(
            merged,
            &format!("list '{second}' merged into '{first}'"),
            &format!("could not merge list '{second}' into '{first}'"),
        )
    }
}

pub async fn get_to_do_lists(State(state): State<AppState>) -> ControllerResult<Vec<ListEntity>> {
    state.lists.get_to_do_lists().await
}

pub async fn get_to_do_list_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ControllerResult<ListEntity> {
    state.lists.get_to_do_list_by_name(&name).await
}

pub async fn update_list_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(input): Json<RenameList>,
) -> ControllerResult<Message> {
    state.lists.update_list_name(&name, &input.new_name).await
}

pub async fn create_to_do_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ControllerResult<Message> {
    state.lists.create_to_do_list(&name).await
}

pub async fn delete_to_do_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ControllerResult<Message> {
    state.lists.delete_to_do_list(&name).await
}

pub async fn merge_lists(
    State(state): State<AppState>,
    Path((first, second)): Path<(String, String)>,
) -> ControllerResult<Message> {
    state.lists.merge_lists(&first, &second).await
}
