use chrono::{Duration, NaiveDateTime};

use crate::model::task::{NewTask, Status};

const DEFAULT_SEED: [(&str, &str, i64, Status); 3] = [
    ("Лабораторна 1 (Консоль)", "Кросплатформне програмування", 7, Status::InProgress),
    ("Підготуватись до колоквіуму", "Алгоритми", 14, Status::Completed),
    ("Завершити курсову роботу", "Бази даних", 30, Status::Planned),
];

/// Example tasks due 7, 14 and 30 days after `base`.
pub fn default_seed(base: NaiveDateTime) -> Vec<NewTask> {
    DEFAULT_SEED
        .iter()
        .map(|&(title, course, days, status)| NewTask {
            title: title.to_string(),
            course: course.to_string(),
            due_date: base + Duration::days(days),
            status,
        })
        .collect()
}
