use crate::model::task::{NewTask, Task, TaskId};
use crate::repository::traits::TaskRepository;

const FIRST_ID: TaskId = 1;

#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn create(&mut self, task: NewTask) -> Task {
        let task = task.into_task(self.next_id);
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    fn update(&mut self, task: &Task) -> bool {
        match self.position(task.id) {
            Some(pos) => {
                self.tasks[pos] = task.clone();
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, id: TaskId) -> bool {
        match self.position(id) {
            Some(pos) => {
                // Vec::remove keeps the remaining tasks in insertion order
                self.tasks.remove(pos);
                true
            }
            None => false,
        }
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }

    fn clear(&mut self) {
        self.tasks.clear();
        self.next_id = FIRST_ID;
    }

    fn next_id(&self) -> TaskId {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_task(title: &str) -> NewTask {
        let due = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        NewTask::new(title, "Course", due).unwrap()
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut repo = InMemoryTaskRepository::new();
        let a = repo.create(new_task("A"));
        let b = repo.create(new_task("B"));
        assert!(repo.delete(b.id));

        let c = repo.create(new_task("C"));
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        assert_eq!(repo.next_id(), 4);
    }

    #[test]
    fn test_update_missing_task_is_noop() {
        let mut repo = InMemoryTaskRepository::new();
        let mut task = repo.create(new_task("A"));
        assert!(repo.delete(task.id));

        task.title = "changed".to_string();
        assert!(!repo.update(&task));
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_len_tracks_creates_and_deletes() {
        let mut repo = InMemoryTaskRepository::new();
        assert_eq!(repo.len(), 0);
        let a = repo.create(new_task("A"));
        repo.create(new_task("B"));
        assert_eq!(repo.len(), 2);

        assert!(repo.delete(a.id));
        assert!(!repo.delete(a.id));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut repo = InMemoryTaskRepository::new();
        repo.create(new_task("A"));
        repo.create(new_task("B"));
        repo.clear();

        assert!(repo.list().is_empty());
        assert_eq!(repo.create(new_task("C")).id, 1);
    }
}
