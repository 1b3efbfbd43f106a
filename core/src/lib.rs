pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::TaskError;
pub use input::{is_cancel, parse_task_id, MenuChoice, SortChoice};
pub use model::task::{NewTask, Status, Task, TaskId};
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::seed::default_seed;
pub use service::task_service::{sort_tasks, SortStrategy, TaskService};
pub use time::parse_due_date;
