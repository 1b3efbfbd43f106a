use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::task::{NewTask, Task, TaskId};
use crate::repository::TaskRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    DueDate,
    Id,
}

impl Default for SortStrategy {
    fn default() -> Self {
        SortStrategy::DueDate
    }
}

pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn reset(&mut self) {
        self.repo.clear();
        debug!("task store reset");
    }

    /// Clears the store and inserts `tasks` in order, each through normal id assignment.
    pub fn seed(&mut self, tasks: Vec<NewTask>) -> Vec<Task> {
        self.reset();
        let seeded: Vec<Task> = tasks.into_iter().map(|t| self.repo.create(t)).collect();
        debug!(count = seeded.len(), "task store seeded");
        seeded
    }

    pub fn create_task(&mut self, title: &str, course: &str, due_date: NaiveDateTime) -> Result<Task> {
        let new_task = NewTask::new(title, course, due_date).inspect_err(|e| {
            warn!(error = %e, "rejected task");
        })?;
        let created = self.repo.create(new_task);
        debug!(id = created.id, title = %created.title, "task created");
        Ok(created)
    }

    /// Advances the task one step along the status cycle. `false` if no such task.
    pub fn cycle_status(&mut self, id: TaskId) -> bool {
        let Some(mut task) = self.repo.get(id) else {
            return false;
        };
        let from = task.status;
        task.status = from.next();
        let updated = self.repo.update(&task);
        debug!(id, from = ?from, to = ?task.status, "status cycled");
        updated
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let deleted = self.repo.delete(id);
        if deleted {
            debug!(id, "task deleted");
        }
        deleted
    }

    pub fn find_task(&self, id: TaskId) -> Option<Task> {
        self.repo.get(id)
    }

    pub fn get_sorted_tasks(&self, strategy: SortStrategy) -> Vec<Task> {
        let mut tasks = self.repo.list();
        sort_tasks(&mut tasks, strategy);
        tasks
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn next_id(&self) -> TaskId {
        self.repo.next_id()
    }
}

// Standalone functions for pure logic

/// Stable sort: tasks with equal keys keep their relative order.
pub fn sort_tasks(tasks: &mut [Task], strategy: SortStrategy) {
    match strategy {
        SortStrategy::DueDate => tasks.sort_by_key(|t| t.due_date),
        SortStrategy::Id => tasks.sort_by_key(|t| t.id),
    }
}
