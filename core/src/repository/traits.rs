use crate::model::task::{NewTask, Task, TaskId};

/// Storage seam for tasks. Implementations own id assignment.
pub trait TaskRepository {
    /// Assigns the next id, appends the task and returns the stored copy.
    fn create(&mut self, task: NewTask) -> Task;
    fn get(&self, id: TaskId) -> Option<Task>;
    /// Replaces the stored task with the same id. Returns `false` if absent.
    fn update(&mut self, task: &Task) -> bool;
    fn delete(&mut self, id: TaskId) -> bool;
    /// Snapshot in insertion order.
    fn list(&self) -> Vec<Task>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Drops every task and restarts ids at 1.
    fn clear(&mut self);
    fn next_id(&self) -> TaskId;
}
