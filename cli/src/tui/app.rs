use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use eduplan_core::{parse_due_date, SortStrategy, Task, TaskId, TaskRepository, TaskService};
use ratatui::widgets::TableState;

pub enum InputMode {
    Normal,
    Adding,
}

pub struct App<R: TaskRepository> {
    pub service: TaskService<R>,
    pub tasks: Vec<Task>,
    pub state: TableState,
    pub sort: SortStrategy,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub message: Option<String>,
    today: NaiveDate,
}

impl<R: TaskRepository> App<R> {
    pub fn new(service: TaskService<R>, today: NaiveDate) -> App<R> {
        let sort = SortStrategy::default();
        let tasks = service.get_sorted_tasks(sort);
        let mut state = TableState::default();
        if !tasks.is_empty() {
            state.select(Some(0));
        }
        App {
            service,
            tasks,
            state,
            sort,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            message: None,
            today,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.state.selected().and_then(|i| self.tasks.get(i))
    }

    pub fn next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.tasks.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tasks.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn cycle_status(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        if self.service.cycle_status(id) {
            self.message = self
                .service
                .find_task(id)
                .map(|t| format!("Статус завдання '{}' змінено на: {}", t.title, t.status.label()));
        }
        // sort order never depends on status, so the selection stays put
        self.reload_tasks();
    }

    pub fn delete_task(&mut self) {
        if let Some(i) = self.state.selected() {
            if let Some(task) = self.tasks.get(i) {
                let (id, title) = (task.id, task.title.clone());
                if self.service.delete_task(id) {
                    self.message = Some(format!("Завдання '{}' видалено", title));
                }
            }
            self.reload_tasks();

            // Adjust selection after reload
            if self.tasks.is_empty() {
                self.state.select(None);
            } else if i >= self.tasks.len() {
                self.state.select(Some(self.tasks.len() - 1));
            } else {
                self.state.select(Some(i));
            }
        }
    }

    pub fn toggle_sort(&mut self) {
        let selected_id = self.selected_task().map(|t| t.id);
        self.sort = match self.sort {
            SortStrategy::DueDate => SortStrategy::Id,
            SortStrategy::Id => SortStrategy::DueDate,
        };
        self.reload_tasks();
        self.select_id(selected_id);
    }

    fn reload_tasks(&mut self) {
        self.tasks = self.service.get_sorted_tasks(self.sort);
    }

    fn select_id(&mut self, id: Option<TaskId>) {
        let pos = id.and_then(|id| self.tasks.iter().position(|t| t.id == id));
        match pos {
            Some(pos) => self.state.select(Some(pos)),
            None if self.tasks.is_empty() => self.state.select(None),
            None => self.state.select(Some(0)),
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
        self.message = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        if let InputMode::Adding = self.input_mode {
            self.message = Some(match self.submit_add() {
                Ok(title) => format!("Завдання '{}' додано", title),
                Err(e) => format!("Помилка: {}", e),
            });
        }

        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }

    fn submit_add(&mut self) -> Result<String> {
        let (title, course, date) = split_add_input(&self.input)?;
        let due_date = parse_due_date(date, self.today)
            .map_err(|_| anyhow!("некоректний формат дати"))?;
        let created = self
            .service
            .create_task(title, course, due_date)
            .map_err(|_| anyhow!("назва та курс не можуть бути порожніми"))?;

        self.reload_tasks();
        self.select_id(Some(created.id));
        Ok(created.title)
    }
}

/// Splits `title | course | date`.
fn split_add_input(input: &str) -> Result<(&str, &str, &str)> {
    let parts: Vec<&str> = input.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [title, course, date] => Ok((*title, *course, *date)),
        _ => Err(anyhow!("очікується 'назва | курс | дата'")),
    }
}
