use crate::models::{CreateTodo, Todo};

// In-memory todo store: an insertion-ordered list plus the next id to hand
// out. Ids start at 1, only ever grow, and are never reused. Everything is
// lost when the process exits.
#[derive(Debug)]
pub struct Store {
    todos: Vec<Todo>,
    next_id: u64,
}
impl Store {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    // Assigns the next id and appends in one call, so the counter bump and
    // the append can't be observed separately by callers holding the lock.
    pub fn create(&mut self, data: CreateTodo) -> Todo {
        let todo = Todo::new(self.next_id, data);
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> CreateTodo {
        CreateTodo {
            title: title.to_string(),
            description: "something".to_string(),
            completed: false,
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_first_id_is_one() {
        let mut store = Store::new();
        let todo = store.create(payload("first"));
        assert_eq!(todo.id, 1);
    }

    #[test]
    fn test_ids_increase_in_creation_order() {
        let mut store = Store::new();
        for i in 1..=5u64 {
            let todo = store.create(payload(&format!("todo {}", i)));
            assert_eq!(todo.id, i);
        }
        let listed = store.list();
        assert_eq!(listed.len(), 5);
        for (i, todo) in listed.iter().enumerate() {
            assert_eq!(todo.id, i as u64 + 1);
        }
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = Store::new();
        store.create(payload("a"));
        store.create(payload("b"));
        store.create(payload("c"));
        let titles: Vec<_> = store.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn test_create_copies_fields() {
        let mut store = Store::new();
        let todo = store.create(CreateTodo {
            title: "read".to_string(),
            description: "chapter 4".to_string(),
            completed: true,
        });
        assert_eq!(todo.title, "read");
        assert_eq!(todo.description, "chapter 4");
        assert!(todo.completed);
    }

    #[test]
    fn test_identical_payloads_get_distinct_ids() {
        let mut store = Store::new();
        let first = store.create(payload("same"));
        let second = store.create(payload("same"));
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }
}
