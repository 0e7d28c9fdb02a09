use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// True when `version` is already recorded as applied in the `log` table.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn migrate_index_log_operation(conn: &Connection) -> Result<()> {
    let version = "20261001_0001_index_log_operation";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);")?;
    mark_applied(conn, version, "Added index on log.operation")
}

/// Public entry point: run all pending migrations.
///
/// Silent on purpose: it runs before every logged command and must not
/// interfere with the command output.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_index_log_operation(conn)?;
    Ok(())
}
