#[cfg(test)]
mod tests {
    use positrack::db::db::Db;
    use positrack::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("positrack.db");
            MigrationTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1", [name], |row| row.get::<_, i32>(0))
            .unwrap()
            > 0
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());

        for table in ["habits", "habit_progress", "tasks", "focus_sessions"] {
            assert!(table_exists(&db.conn, table), "missing table {}", table);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Connection::open(&ctx.db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE migrations (id INTEGER PRIMARY KEY, version INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
        )
        .unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, ["create_habits", "create_tasks", "create_focus_sessions"]);

        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert!(manager.is_migration_applied(&conn, 3).unwrap());
        assert!(!manager.is_migration_applied(&conn, 4).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 3);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopen_keeps_data(ctx: &mut MigrationTestContext) {
        {
            let db = Db::open(&ctx.db_path).unwrap();
            db.conn
                .execute("INSERT INTO tasks (title, priority) VALUES ('Persisted', 'Low')", [])
                .unwrap();
        }

        let db = Db::open(&ctx.db_path).unwrap();
        let count: i32 = db.conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }

    #[cfg(debug_assertions)]
    #[test_context(MigrationTestContext)]
    #[test]
    fn test_rollback_forgets_versions(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        manager.rollback_to(&mut conn, 1).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);
        assert!(needs_migration(&conn).unwrap());
    }
}
