//! Stateless HTTP request builder and response parser for the to-do lists API.
//!
//! # Design
//! `ToDoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Every command (create, rename, check, move, ...) answers with the same
//! `Message` body, so they share `parse_command`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ListEntity, Message, RenameList, ToDoDto, ToDoEntity, ToDoId, UpdateDescription};

/// Characters left unescaped in a path segment (RFC 3986 unreserved).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Synchronous, stateless client for the to-do lists API.
#[derive(Debug, Clone)]
pub struct ToDoClient {
    base_url: String,
}

impl ToDoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn list_path(&self, name: &str) -> String {
        format!("{}/lists/{}", self.base_url, encode(name))
    }

    fn item_path(&self, list_name: &str, id: ToDoId) -> String {
        format!("{}/todos/{id}", self.list_path(list_name))
    }

    // --- lists ---

    pub fn build_get_to_do_lists(&self) -> HttpRequest {
        bare(HttpMethod::Get, format!("{}/lists", self.base_url))
    }

    pub fn build_get_to_do_list(&self, name: &str) -> HttpRequest {
        bare(HttpMethod::Get, self.list_path(name))
    }

    pub fn build_create_to_do_list(&self, name: &str) -> HttpRequest {
        bare(HttpMethod::Post, self.list_path(name))
    }

    pub fn build_update_list_name(&self, name: &str, new_name: &str) -> Result<HttpRequest, ApiError> {
        let input = RenameList {
            new_name: new_name.to_string(),
        };
        with_json(HttpMethod::Put, self.list_path(name), &input)
    }

    pub fn build_delete_to_do_list(&self, name: &str) -> HttpRequest {
        bare(HttpMethod::Delete, self.list_path(name))
    }

    pub fn build_merge_lists(&self, first: &str, second: &str) -> HttpRequest {
        bare(
            HttpMethod::Post,
            format!("{}/merge/{}", self.list_path(first), encode(second)),
        )
    }

    // --- items ---

    pub fn build_get_to_do_items(&self, list_name: &str) -> HttpRequest {
        bare(HttpMethod::Get, format!("{}/todos", self.list_path(list_name)))
    }

    pub fn build_get_to_do_item(&self, list_name: &str, id: ToDoId) -> HttpRequest {
        bare(HttpMethod::Get, self.item_path(list_name, id))
    }

    pub fn build_add_to_do(&self, list_name: &str, input: &ToDoDto) -> Result<HttpRequest, ApiError> {
        with_json(
            HttpMethod::Post,
            format!("{}/todos", self.list_path(list_name)),
            input,
        )
    }

    pub fn build_check_to_do_mark(&self, list_name: &str, id: ToDoId) -> HttpRequest {
        bare(HttpMethod::Put, format!("{}/check", self.item_path(list_name, id)))
    }

    pub fn build_uncheck_to_do_mark(&self, list_name: &str, id: ToDoId) -> HttpRequest {
        bare(HttpMethod::Put, format!("{}/uncheck", self.item_path(list_name, id)))
    }

    pub fn build_update_to_do_description(
        &self,
        list_name: &str,
        id: ToDoId,
        description: &str,
    ) -> Result<HttpRequest, ApiError> {
        let input = UpdateDescription {
            description: description.to_string(),
        };
        with_json(
            HttpMethod::Put,
            format!("{}/description", self.item_path(list_name, id)),
            &input,
        )
    }

    pub fn build_delete_to_do(&self, list_name: &str, id: ToDoId) -> HttpRequest {
        bare(HttpMethod::Delete, self.item_path(list_name, id))
    }

    pub fn build_move_to_do(&self, source: &str, id: ToDoId, destination: &str) -> HttpRequest {
        bare(
            HttpMethod::Post,
            format!("{}/move/{}", self.item_path(source, id), encode(destination)),
        )
    }

    // --- responses ---

    pub fn parse_get_to_do_lists(&self, response: HttpResponse) -> Result<Vec<ListEntity>, ApiError> {
        parse_ok(response)
    }

    pub fn parse_get_to_do_list(&self, response: HttpResponse) -> Result<ListEntity, ApiError> {
        parse_ok(response)
    }

    pub fn parse_get_to_do_items(&self, response: HttpResponse) -> Result<Vec<ToDoEntity>, ApiError> {
        parse_ok(response)
    }

    pub fn parse_get_to_do_item(&self, response: HttpResponse) -> Result<ToDoEntity, ApiError> {
        parse_ok(response)
    }

    /// Parse the response to any command-style operation.
    pub fn parse_command(&self, response: HttpResponse) -> Result<Message, ApiError> {
        parse_ok(response)
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

fn bare(method: HttpMethod, path: String) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json<T: Serialize>(method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn parse_ok<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 => {
            let message = serde_json::from_str::<Message>(&response.body)
                .map(|m| m.message)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::Rejected { message })
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
