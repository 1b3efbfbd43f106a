use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::TaskError;

pub type TaskId = u32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Planned,
    InProgress,
    Completed,
}

impl Default for Status {
    fn default() -> Self {
        Status::Planned
    }
}

impl Status {
    /// Next state in the cycle `Planned -> InProgress -> Completed -> Planned`.
    pub fn next(self) -> Self {
        match self {
            Status::Planned => Status::InProgress,
            Status::InProgress => Status::Completed,
            Status::Completed => Status::Planned,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Planned => "[ЗАПЛАНОВАНО]",
            Status::InProgress => "[В РОБОТІ]",
            Status::Completed => "[ВИКОНАНО]",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub course: String,
    pub due_date: NaiveDateTime,
    pub status: Status,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} | {} ({}) до: {}",
            self.id,
            self.status.label(),
            self.title,
            self.course,
            self.due_date.format("%d.%m.%Y")
        )
    }
}

/// Validated input for a task that has not been given an id yet.
///
/// Only the repository turns a `NewTask` into a `Task`, so every stored
/// task has passed the non-empty checks below.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub(crate) title: String,
    pub(crate) course: String,
    pub(crate) due_date: NaiveDateTime,
    pub(crate) status: Status,
}

impl NewTask {
    pub fn new(title: &str, course: &str, due_date: NaiveDateTime) -> Result<Self, TaskError> {
        let title = title.trim();
        let course = course.trim();
        if title.is_empty() {
            return Err(TaskError::InvalidArgument("title cannot be empty".to_string()));
        }
        if course.is_empty() {
            return Err(TaskError::InvalidArgument("course cannot be empty".to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            course: course.to_string(),
            due_date,
            status: Status::default(),
        })
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn due_date(&self) -> NaiveDateTime {
        self.due_date
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            course: self.course,
            due_date: self.due_date,
            status: self.status,
        }
    }
}
