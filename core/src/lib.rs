//! Domain model and client core for the to-do lists service.
//!
//! # Overview
//! Lists are keyed by name and own an ordered collection of items. This crate
//! defines the entities, the `ListOperations` / `ToDoOperations` traits any
//! backing store implements, and a `ToDoClient` that builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network.
//!
//! # Design
//! - No I/O lives here. The server crate implements the traits and serves
//!   HTTP; callers of the client execute the round-trip themselves.
//! - Entities double as the wire schema, so server and client cannot drift.

pub mod client;
pub mod error;
pub mod http;
pub mod operations;
pub mod types;

pub use client::ToDoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use operations::{ListOperations, ToDoOperations};
pub use types::{ListEntity, Message, RenameList, ToDoDto, ToDoEntity, ToDoId, UpdateDescription};
