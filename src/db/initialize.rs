use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// All schema is owned by the migration engine; no CREATE TABLE here.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Number of log rows written by commands (migration markers excluded).
pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation <> 'migration_applied'",
        [],
        |row| row.get(0),
    )?;
    Ok(n)
}
