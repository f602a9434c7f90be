use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}
impl Todo {
    pub fn new(id: u64, data: CreateTodo) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            completed: data.completed,
        }
    }
}

// Client-supplied creation payload; the id is assigned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}
