//! Controllers: validate identifiers, delegate to the store, and translate
//! the store's verdict into 200 or 400.
//!
//! Each controller exposes plain async methods (what the tests drive) and a
//! set of thin axum handlers that pull arguments out of the request and call
//! those methods through `AppState`.

pub mod list;
pub mod todo;

pub use list::ListController;
pub use todo::ToDoController;
