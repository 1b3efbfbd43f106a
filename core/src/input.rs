use anyhow::{anyhow, Result};

use crate::model::task::TaskId;
use crate::service::task_service::SortStrategy;

const CANCEL: &str = "x";
// Cyrillic "х" sits on the same key as Latin "x" in the Ukrainian layout
const CANCEL_CYRILLIC: &str = "х";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    CycleStatus,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::CycleStatus),
            "4" => Some(MenuChoice::Delete),
            other if is_cancel(other) => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortChoice {
    Sort(SortStrategy),
    Back,
}

impl SortChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(SortChoice::Sort(SortStrategy::DueDate)),
            "2" => Some(SortChoice::Sort(SortStrategy::Id)),
            other if is_cancel(other) => Some(SortChoice::Back),
            _ => None,
        }
    }
}

pub fn is_cancel(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input == CANCEL || input == CANCEL_CYRILLIC
}

pub fn parse_task_id(input: &str) -> Result<TaskId> {
    let input = input.trim();
    let id: TaskId = input
        .parse()
        .map_err(|_| anyhow!("Invalid task id: '{}'", input))?;
    if id == 0 {
        return Err(anyhow!("Invalid task id: '{}'", input));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::CycleStatus));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Delete));
        assert_eq!(MenuChoice::parse("X"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("х"), Some(MenuChoice::Exit));

        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("list"), None);
    }

    #[test]
    fn test_sort_choice() {
        assert_eq!(SortChoice::parse("1"), Some(SortChoice::Sort(SortStrategy::DueDate)));
        assert_eq!(SortChoice::parse("2"), Some(SortChoice::Sort(SortStrategy::Id)));
        assert_eq!(SortChoice::parse("x"), Some(SortChoice::Back));
        assert_eq!(SortChoice::parse("3"), None);
    }

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("7").unwrap(), 7);
        assert_eq!(parse_task_id(" 12 \n").unwrap(), 12);

        assert!(parse_task_id("0").is_err());
        assert!(parse_task_id("-1").is_err());
        assert!(parse_task_id("abc").is_err());
        assert!(parse_task_id("").is_err());
    }
}
