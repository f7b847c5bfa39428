#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_core::{ListEntity, ListOperations, ToDoEntity, ToDoId, ToDoOperations};
use todo_server::{ListController, ToDoController};

const NAMES: [&str; 5] = [
    "Ada Lovelace",
    "Grace Hopper",
    "Alan Turing",
    "Edsger Dijkstra",
    "Barbara Liskov",
];

/// Deterministic list fixture: the name comes from `seed`, items get ids
/// `0..todo_count` and alternate their completion flag.
pub fn fake_list(seed: usize, todo_count: usize) -> ListEntity {
    let todos = (0..todo_count)
        .map(|i| ToDoEntity {
            id: i as ToDoId,
            description: format!("task {seed}-{i}"),
            is_complete: (seed + i) % 2 == 0,
        })
        .collect();
    ListEntity {
        name: format!("{} {seed}", NAMES[seed % NAMES.len()]),
        todos,
    }
}

/// One store call, as seen by the test double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetLists,
    GetList(String),
    RenameList(String, String),
    CreateList(String),
    DeleteList(String),
    MergeLists(String, String),
    GetItems(String),
    GetItem(String, ToDoId),
    Check(String, ToDoId),
    Uncheck(String, ToDoId),
    Describe(String, ToDoId, String),
    Add(String, ToDoEntity),
    Delete(String, ToDoId),
    Move(String, ToDoId, String),
}

/// Store double: lookups answer from `lists`, every command answers
/// `verdict`, and all calls are recorded.
#[derive(Debug, Default)]
pub struct StubStore {
    lists: Vec<ListEntity>,
    verdict: bool,
    calls: Mutex<Vec<Call>>,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lists(mut self, lists: Vec<ListEntity>) -> Self {
        self.lists = lists;
        self
    }

    pub fn answering(mut self, verdict: bool) -> Self {
        self.verdict = verdict;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn find(&self, name: &str) -> Option<&ListEntity> {
        self.lists.iter().find(|list| list.name == name)
    }
}

#[async_trait]
impl ListOperations for StubStore {
    async fn get_to_do_lists(&self) -> Vec<ListEntity> {
        self.record(Call::GetLists);
        self.lists.clone()
    }

    async fn get_list_by_name(&self, name: &str) -> Option<ListEntity> {
        self.record(Call::GetList(name.to_string()));
        self.find(name).cloned()
    }

    async fn update_list_name(&self, name: &str, new_name: &str) -> bool {
        self.record(Call::RenameList(name.to_string(), new_name.to_string()));
        self.verdict
    }

    async fn create_list(&self, name: &str) -> bool {
        self.record(Call::CreateList(name.to_string()));
        self.verdict
    }

    async fn delete_list(&self, name: &str) -> bool {
        self.record(Call::DeleteList(name.to_string()));
        self.verdict
    }

    async fn merge_lists(&self, first: &str, second: &str) -> bool {
        self.record(Call::MergeLists(first.to_string(), second.to_string()));
        self.verdict
    }
}

#[async_trait]
impl ToDoOperations for StubStore {
    async fn get_to_do_items(&self, list_name: &str) -> Vec<ToDoEntity> {
        self.record(Call::GetItems(list_name.to_string()));
        self.find(list_name).map(|list| list.todos.clone()).unwrap_or_default()
    }

    async fn get_to_do_item(&self, list_name: &str, id: ToDoId) -> Option<ToDoEntity> {
        self.record(Call::GetItem(list_name.to_string(), id));
        self.find(list_name)?.todos.iter().find(|todo| todo.id == id).cloned()
    }

    async fn check_to_do_mark(&self, list_name: &str, id: ToDoId) -> bool {
        self.record(Call::Check(list_name.to_string(), id));
        self.verdict
    }

    async fn uncheck_to_do_mark(&self, list_name: &str, id: ToDoId) -> bool {
        self.record(Call::Uncheck(list_name.to_string(), id));
        self.verdict
    }

    async fn update_to_do_description(&self, list_name: &str, id: ToDoId, description: &str) -> bool {
        self.record(Call::Describe(list_name.to_string(), id, description.to_string()));
        self.verdict
    }

    async fn add_to_do(&self, list_name: &str, item: ToDoEntity) -> bool {
        self.record(Call::Add(list_name.to_string(), item));
        self.verdict
    }

    async fn delete_to_do(&self, list_name: &str, id: ToDoId) -> bool {
        self.record(Call::Delete(list_name.to_string(), id));
        self.verdict
    }

    async fn move_to_do(&self, source: &str, id: ToDoId, destination: &str) -> bool {
        self.record(Call::Move(source.to_string(), id, destination.to_string()));
        self.verdict
    }
}

pub fn list_controller(store: StubStore) -> (Arc<StubStore>, ListController) {
    let store = Arc::new(store);
    (store.clone(), ListController::new(store))
}

pub fn todo_controller(store: StubStore) -> (Arc<StubStore>, ToDoController) {
    let store = Arc::new(store);
    (store.clone(), ToDoController::new(store))
}
