use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use eduplan_core::{
    is_cancel, parse_due_date, parse_task_id, MenuChoice, SortChoice, SortStrategy, TaskError,
    TaskId, TaskRepository, TaskService,
};
use tracing::debug;

const PRESS_ENTER_TO_CONTINUE: &str = "\nНатисніть Enter для продовження...";
const PRESS_ENTER_TO_RETURN: &str = "\nНатисніть Enter для повернення до головного меню...";
const PRESS_ENTER_TO_RETRY: &str = "Натисніть Enter для повторного введення...";
const PRESS_ENTER_TO_RETRY_ID: &str = "Натисніть Enter для повторного введення ID...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Text menu over any line source and sink. Reaching end of input ends the session.
pub struct Menu<'a, T: TaskRepository, R: BufRead, W: Write> {
    service: &'a mut TaskService<T>,
    input: R,
    output: W,
    today: NaiveDate,
}

impl<'a, T: TaskRepository, R: BufRead, W: Write> Menu<'a, T, R, W> {
    pub fn new(service: &'a mut TaskService<T>, input: R, output: W, today: NaiveDate) -> Self {
        Self {
            service,
            input,
            output,
            today,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.draw_main_menu()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::List) => self.show_tasks()?,
                Some(MenuChoice::Add) => self.handle_add_task()?,
                Some(MenuChoice::CycleStatus) => self.handle_cycle_status()?,
                Some(MenuChoice::Delete) => self.handle_delete_task()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Дякуємо за використання EduPlan. До побачення!")?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Невідома команда. Спробуйте ще раз.")?;
                    self.pause(PRESS_ENTER_TO_CONTINUE)?
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn draw_main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "=============================================")?;
        writeln!(self.output, "         EduPlan: Менеджер завдань         ")?;
        writeln!(self.output, "=============================================")?;
        writeln!(self.output, "1. Показати всі завдання (вибір сортування)")?;
        writeln!(self.output, "2. Додати нове завдання")?;
        writeln!(self.output, "3. Змінити статус завдання")?;
        writeln!(self.output, "4. Видалити завдання")?;
        writeln!(self.output, "X. Вихід")?;
        self.prompt("\nВведіть свій вибір: ")
    }

    fn show_tasks(&mut self) -> Result<Flow> {
        loop {
            if self.service.is_empty() {
                writeln!(self.output, "\nСписок завдань порожній.")?;
                return self.pause(PRESS_ENTER_TO_RETURN);
            }

            writeln!(self.output, "\n--- ВИБІР ПОРЯДКУ СОРТУВАННЯ ---")?;
            writeln!(self.output, "1. Сортувати за терміном (DueDate)")?;
            writeln!(self.output, "2. Сортувати за ID (порядком додавання)")?;
            writeln!(self.output, "X. Повернутися до головного меню")?;
            self.prompt("\nВведіть свій вибір: ")?;

            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            match SortChoice::parse(&line) {
                Some(SortChoice::Back) => return Ok(Flow::Continue),
                Some(SortChoice::Sort(strategy)) => {
                    let description = match strategy {
                        SortStrategy::DueDate => "за терміном",
                        SortStrategy::Id => "за ID",
                    };
                    writeln!(self.output, "\n--- СПИСОК ЗАВДАНЬ ({}) ---", description)?;
                    self.write_tasks(strategy)?;
                    return self.pause("\nНатисніть Enter, щоб повернутися до головного меню...");
                }
                None => {
                    writeln!(self.output, "Невірна опція.")?;
                    if self.pause("Натисніть Enter для повторного вибору...")? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
            }
        }
    }

    fn handle_add_task(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.output, "\n--- ДОДАВАННЯ НОВОГО ЗАВДАННЯ ---")?;

            self.prompt("Введіть назву завдання (або 'x' для скасування): ")?;
            let Some(title) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            if is_cancel(&title) {
                return Ok(Flow::Continue);
            }

            self.prompt("Введіть назву курсу: ")?;
            let Some(course) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            if title.trim().is_empty() || course.trim().is_empty() {
                writeln!(
                    self.output,
                    "\nПомилка: Назва та курс не можуть бути порожніми. Спробуйте ще раз."
                )?;
                if self.pause(PRESS_ENTER_TO_RETRY)? == Flow::Quit {
                    return Ok(Flow::Quit);
                }
                continue;
            }

            self.prompt("Введіть кінцевий термін (формат РРРР-ММ-ДД): ")?;
            let Some(date) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let due_date = match parse_due_date(&date, self.today) {
                Ok(due_date) => due_date,
                Err(e) => {
                    debug!(error = %e, "rejected due date");
                    writeln!(self.output, "\nПомилка: Некоректний формат дати. Спробуйте ще раз.")?;
                    if self.pause(PRESS_ENTER_TO_RETRY)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                    continue;
                }
            };

            match self.service.create_task(&title, &course, due_date) {
                Ok(task) => {
                    writeln!(
                        self.output,
                        "\nЗавдання '{}' успішно додано зі статусом {}.",
                        task.title,
                        task.status.label()
                    )?;
                    return self.pause(PRESS_ENTER_TO_RETURN);
                }
                Err(TaskError::InvalidArgument(reason)) => {
                    writeln!(self.output, "\nПомилка: {}. Спробуйте ще раз.", reason)?;
                    if self.pause(PRESS_ENTER_TO_RETRY)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
            }
        }
    }

    fn handle_cycle_status(&mut self) -> Result<Flow> {
        self.select_task(
            "\nСписок завдань порожній. Немає чого змінювати.",
            "\nВведіть ID завдання, статус якого бажаєте змінити (або 'x' для скасування): ",
            |service, id| {
                if !service.cycle_status(id) {
                    return None;
                }
                service.find_task(id).map(|task| {
                    format!(
                        "\nСтатус завдання '{}' змінено на: {}.",
                        task.title,
                        task.status.label()
                    )
                })
            },
        )
    }

    fn handle_delete_task(&mut self) -> Result<Flow> {
        self.select_task(
            "\nСписок завдань порожній. Немає чого видаляти.",
            "\nВведіть ID завдання, яке бажаєте видалити (або 'x' для скасування): ",
            |service, id| {
                let task = service.find_task(id)?;
                service
                    .delete_task(id)
                    .then(|| format!("\nЗавдання '{}' видалено.", task.title))
            },
        )
    }

    /// Shared id prompt loop for actions on a single task. `action` returns
    /// the message to show on success, or `None` when the id is unknown.
    fn select_task<F>(&mut self, empty_message: &str, prompt: &str, mut action: F) -> Result<Flow>
    where
        F: FnMut(&mut TaskService<T>, TaskId) -> Option<String>,
    {
        loop {
            if self.service.is_empty() {
                writeln!(self.output, "{}", empty_message)?;
                return self.pause(PRESS_ENTER_TO_RETURN);
            }

            writeln!(self.output, "\n--- АКТУАЛЬНИЙ СПИСОК ЗАВДАНЬ (за ID) ---")?;
            self.write_tasks(SortStrategy::Id)?;

            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            if is_cancel(&line) {
                return Ok(Flow::Continue);
            }

            let message = match parse_task_id(&line) {
                Ok(id) => match action(&mut *self.service, id) {
                    Some(done) => {
                        writeln!(self.output, "{}", done)?;
                        return self.pause(PRESS_ENTER_TO_RETURN);
                    }
                    None => "\nПомилка: Завдання з таким ID не знайдено.",
                },
                Err(_) => "\nПомилка: Некоректний формат ID.",
            };
            writeln!(self.output, "{}", message)?;
            if self.pause(PRESS_ENTER_TO_RETRY_ID)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn write_tasks(&mut self, strategy: SortStrategy) -> Result<()> {
        for task in self.service.get_sorted_tasks(strategy) {
            writeln!(self.output, "{}", task)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn pause(&mut self, text: &str) -> Result<Flow> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            Some(_) => Flow::Continue,
            None => Flow::Quit,
        })
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduplan_core::{default_seed, InMemoryTaskRepository, Status};
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn seeded_service() -> TaskService<InMemoryTaskRepository> {
        let mut service = TaskService::new(InMemoryTaskRepository::new());
        service.seed(default_seed(today().and_hms_opt(0, 0, 0).unwrap()));
        service
    }

    fn run_menu(service: &mut TaskService<InMemoryTaskRepository>, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(service, Cursor::new(script.as_bytes()), &mut output, today())
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn ids(service: &TaskService<InMemoryTaskRepository>) -> Vec<TaskId> {
        service
            .get_sorted_tasks(SortStrategy::Id)
            .iter()
            .map(|t| t.id)
            .collect()
    }

    #[test]
    fn test_cycle_delete_and_list_session() {
        let mut service = seeded_service();
        let output = run_menu(&mut service, "3\n3\n\n4\n2\n\n1\n2\n\nx\n");

        assert_eq!(service.find_task(3).unwrap().status, Status::InProgress);
        assert_eq!(ids(&service), vec![1, 3]);

        assert!(output.contains("Статус завдання 'Завершити курсову роботу' змінено на: [В РОБОТІ]."));
        assert!(output.contains("Завдання 'Підготуватись до колоквіуму' видалено."));
        assert!(output.contains("--- СПИСОК ЗАВДАНЬ (за ID) ---"));
        assert!(output.contains("3. [В РОБОТІ] | Завершити курсову роботу (Бази даних) до: 01.10.2025"));
        assert!(output.ends_with("До побачення!\n"));
    }

    #[test]
    fn test_add_reprompts_until_valid() {
        let mut service = TaskService::new(InMemoryTaskRepository::new());
        let script = "2\n\nCourse\n\nTitle\nCourse\nnot-a-date\n\nTitle\nCourse\n2025-06-01\n\nx\n";
        let output = run_menu(&mut service, script);

        assert!(output.contains("Назва та курс не можуть бути порожніми"));
        assert!(output.contains("Некоректний формат дати"));
        assert!(output.contains("Завдання 'Title' успішно додано зі статусом [ЗАПЛАНОВАНО]."));

        let tasks = service.get_sorted_tasks(SortStrategy::Id);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[0].to_string(), "1. [ЗАПЛАНОВАНО] | Title (Course) до: 01.06.2025");
    }

    #[test]
    fn test_add_survives_out_of_range_relative_date() {
        let mut service = seeded_service();
        let script = "2\nQuiz\nPhysics\n+999999999d\n\nQuiz\nPhysics\n+1w\n\nx\n";
        let output = run_menu(&mut service, script);

        assert!(output.contains("Некоректний формат дати"));
        assert!(output.ends_with("До побачення!\n"));
        assert_eq!(ids(&service), vec![1, 2, 3, 4]);
        assert_eq!(service.find_task(4).unwrap().to_string(), "4. [ЗАПЛАНОВАНО] | Quiz (Physics) до: 08.09.2025");
    }

    #[test]
    fn test_add_can_be_cancelled() {
        let mut service = TaskService::new(InMemoryTaskRepository::new());
        run_menu(&mut service, "2\nX\nx\n");
        assert!(service.is_empty());
        assert_eq!(service.next_id(), 1);
    }

    #[test]
    fn test_bad_ids_reprompt_without_mutation() {
        let mut service = seeded_service();
        let before = service.get_sorted_tasks(SortStrategy::Id);
        let output = run_menu(&mut service, "3\n99\n\nabc\n\nx\nx\n");

        assert!(output.contains("Завдання з таким ID не знайдено."));
        assert!(output.contains("Некоректний формат ID."));
        assert_eq!(service.get_sorted_tasks(SortStrategy::Id), before);
    }

    #[test]
    fn test_list_by_due_date() {
        let mut service = seeded_service();
        service
            .create_task("Quiz", "Physics", today().and_hms_opt(0, 0, 0).unwrap())
            .unwrap();
        let output = run_menu(&mut service, "1\n1\n\nx\n");

        let listing = output.split("--- СПИСОК ЗАВДАНЬ (за терміном) ---").nth(1).unwrap();
        let first_ids: Vec<&str> = listing
            .lines()
            .filter(|l| l.contains(" | "))
            .map(|l| l.split('.').next().unwrap())
            .collect();
        assert_eq!(first_ids, vec!["4", "1", "2", "3"]);
    }

    #[test]
    fn test_empty_store_messages() {
        let mut service = TaskService::new(InMemoryTaskRepository::new());
        let output = run_menu(&mut service, "1\n\n4\n\nx\n");
        assert!(output.contains("Список завдань порожній."));
        assert!(output.contains("Немає чого видаляти."));
    }

    #[test]
    fn test_unknown_command_and_eof() {
        let mut service = seeded_service();
        let output = run_menu(&mut service, "7\n\n2\nTitle\n");
        assert!(output.contains("Невідома команда."));
        // input ran out while adding
        assert_eq!(service.len(), 3);
        assert!(!output.contains("До побачення"));
    }
}
