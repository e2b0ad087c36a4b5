#[cfg(test)]
mod tests {
    use daybook::store::error::StoreError;
    use daybook::store::schedule::ScheduleStore;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            StoreTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl StoreTestContext {
        fn file(&self) -> PathBuf {
            self.temp_dir.path().join("schedule.json")
        }

        fn store(&self) -> ScheduleStore {
            ScheduleStore::with_path(self.file())
        }
    }

    fn tasks(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(name, detail)| (name.to_string(), detail.to_string())).collect()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_missing_file_returns_empty(ctx: &mut StoreTestContext) {
        let schedule = ctx.store().load().unwrap();
        assert!(schedule.is_empty());
        assert!(!ctx.file().exists());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_day_and_show_all(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.add_day("Mon", tasks(&[("Run", "5k"), ("Eat", "oats")])).unwrap();

        let schedule = store.show_all().unwrap();
        assert_eq!(schedule.len(), 1);
        let day = schedule.get("Mon").unwrap();
        let pairs: Vec<(&str, &str)> = day.iter().map(|(t, d)| (t.as_str(), d.as_str())).collect();
        assert_eq!(pairs, vec![("Run", "5k"), ("Eat", "oats")]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_round_trip_preserves_day_and_task_order(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.add_day("Wed", tasks(&[("Write", "report"), ("Call", "dentist")])).unwrap();
        store.add_day("Mon", tasks(&[("Run", "5k")])).unwrap();
        store.add_day("Tue", tasks(&[("Eat", "oats"), ("Read", "a chapter"), ("Sleep", "early")])).unwrap();

        // A fresh store over the same file decodes the same content.
        let reloaded = ScheduleStore::with_path(ctx.file()).show_all().unwrap();
        let days: Vec<&str> = reloaded.keys().map(String::as_str).collect();
        assert_eq!(days, vec!["Wed", "Mon", "Tue"]);
        let tue: Vec<&str> = reloaded.get("Tue").unwrap().keys().map(String::as_str).collect();
        assert_eq!(tue, vec!["Eat", "Read", "Sleep"]);
        assert_eq!(reloaded.get("Wed").unwrap().get("Call").unwrap(), "dentist");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_day_replaces_existing_day(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.add_day("Mon", tasks(&[("Run", "5k")])).unwrap();
        store.add_day("Mon", tasks(&[("Eat", "oats")])).unwrap();

        let schedule = store.show_all().unwrap();
        let day = schedule.get("Mon").unwrap();
        assert_eq!(day.len(), 1);
        assert!(day.get("Run").is_none());
        assert_eq!(day.get("Eat").unwrap(), "oats");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_day_duplicate_task_names_last_detail_wins(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store
            .add_day("Mon", tasks(&[("Run", "5k"), ("Eat", "oats"), ("Run", "10k")]))
            .unwrap();

        let schedule = store.show_all().unwrap();
        let day = schedule.get("Mon").unwrap();
        // Position of the first occurrence, detail of the last.
        let pairs: Vec<(&str, &str)> = day.iter().map(|(t, d)| (t.as_str(), d.as_str())).collect();
        assert_eq!(pairs, vec![("Run", "10k"), ("Eat", "oats")]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_edit_task_overwrites_detail_in_place(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store
            .add_day("Mon", tasks(&[("Run", "5k"), ("Eat", "oats"), ("Sleep", "early")]))
            .unwrap();

        store.edit_task("Mon", "Eat", "porridge").unwrap();

        let schedule = store.show_all().unwrap();
        let day = schedule.get("Mon").unwrap();
        let pairs: Vec<(&str, &str)> = day.iter().map(|(t, d)| (t.as_str(), d.as_str())).collect();
        assert_eq!(pairs, vec![("Run", "5k"), ("Eat", "porridge"), ("Sleep", "early")]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_edit_task_missing_day_leaves_file_unchanged(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.add_day("Mon", tasks(&[("Run", "5k")])).unwrap();
        let before = fs::read(ctx.file()).unwrap();

        let err = store.edit_task("Tue", "X", "y").unwrap_err();
        assert!(matches!(err, StoreError::DayNotFound(day) if day == "Tue"));

        let after = fs::read(ctx.file()).unwrap();
        assert_eq!(before, after);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_edit_task_missing_task(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.add_day("Mon", tasks(&[("Run", "5k")])).unwrap();

        let err = store.edit_task("Mon", "Swim", "2k").unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound { day, task } if day == "Mon" && task == "Swim"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_day_unconfirmed_is_a_no_op(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.add_day("Mon", tasks(&[("Run", "5k")])).unwrap();
        let before = fs::read(ctx.file()).unwrap();

        let deleted = store.delete_day("Mon", false).unwrap();
        assert!(!deleted);

        let after = fs::read(ctx.file()).unwrap();
        assert_eq!(before, after);
        assert!(store.show_all().unwrap().contains_key("Mon"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_day_confirmed_removes_day(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.add_day("Mon", tasks(&[("Run", "5k")])).unwrap();
        store.add_day("Tue", tasks(&[("Eat", "oats")])).unwrap();

        let deleted = store.delete_day("Mon", true).unwrap();
        assert!(deleted);

        let schedule = store.show_all().unwrap();
        assert!(!schedule.contains_key("Mon"));
        assert!(schedule.contains_key("Tue"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_day_missing(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.add_day("Mon", tasks(&[("Run", "5k")])).unwrap();

        let err = store.delete_day("Fri", true).unwrap_err();
        assert!(matches!(err, StoreError::DayNotFound(day) if day == "Fri"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_wrong_shape_is_corrupt_data(ctx: &mut StoreTestContext) {
        fs::write(ctx.file(), "[1, 2, 3]").unwrap();

        let err = ctx.store().load().unwrap_err();
        assert!(matches!(err, StoreError::CorruptData { .. }));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_invalid_json_is_corrupt_data(ctx: &mut StoreTestContext) {
        fs::write(ctx.file(), "{ not json").unwrap();

        let err = ctx.store().load().unwrap_err();
        assert!(matches!(err, StoreError::CorruptData { .. }));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_leaves_no_temp_file_behind(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.add_day("Mon", tasks(&[("Run", "5k")])).unwrap();

        let entries: Vec<String> = fs::read_dir(ctx.temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["schedule.json".to_string()]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_failure_is_persistence_error(ctx: &mut StoreTestContext) {
        // Pointing the store at an existing directory makes the final
        // rename fail, which must surface as a persistence error.
        let store = ScheduleStore::with_path(ctx.temp_dir.path());

        let err = store.add_day("Mon", tasks(&[("Run", "5k")])).unwrap_err();
        assert!(matches!(err, StoreError::Persistence { .. }));
    }
}
