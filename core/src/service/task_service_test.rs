#[cfg(test)]
mod tests {
    use crate::model::task::Status;
    use crate::repository::InMemoryTaskRepository;
    use crate::service::seed::default_seed;
    use crate::service::task_service::{SortStrategy, TaskService};
    use chrono::{NaiveDate, NaiveDateTime};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_seeded_store_walkthrough() {
        let mut svc = TaskService::new(InMemoryTaskRepository::new());
        let seeded = svc.seed(default_seed(base()));

        let ids: Vec<u32> = seeded.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let statuses: Vec<Status> = seeded.iter().map(|t| t.status).collect();
        assert_eq!(statuses, vec![Status::InProgress, Status::Completed, Status::Planned]);

        assert!(svc.cycle_status(3));
        assert_eq!(svc.find_task(3).unwrap().status, Status::InProgress);

        assert!(svc.delete_task(2));
        let ids: Vec<u32> = svc
            .get_sorted_tasks(SortStrategy::Id)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_reseed_isolates_scenarios() {
        let mut svc = TaskService::new(InMemoryTaskRepository::new());
        svc.seed(default_seed(base()));
        svc.create_task("Extra", "Course", base()).unwrap();
        svc.delete_task(1);
        assert_eq!(svc.next_id(), 5);

        let seeded = svc.seed(default_seed(base()));
        assert_eq!(seeded.first().map(|t| t.id), Some(1));
        assert_eq!(svc.len(), 3);
        assert_eq!(svc.next_id(), 4);
    }

    #[test]
    fn test_new_task_after_seed_continues_counter() {
        let mut svc = TaskService::new(InMemoryTaskRepository::new());
        svc.seed(default_seed(base()));

        // due before every seeded task
        let early = svc.create_task("Quiz", "Physics", base()).unwrap();
        assert_eq!(early.id, 4);
        assert_eq!(early.status, Status::Planned);

        let by_due: Vec<u32> = svc
            .get_sorted_tasks(SortStrategy::DueDate)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(by_due, vec![4, 1, 2, 3]);
    }
}
