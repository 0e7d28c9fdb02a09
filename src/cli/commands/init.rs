use crate::config::Config;
use crate::db::initialize::count_entries;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database holding the internal log
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing rLogout…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", db_path.display());

    let pool = DbPool::new(&db_path)?;

    // internal log, never blocking
    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    let entries = count_entries(&pool.conn)?;
    success(format!(
        "Database initialized at {} ({} log entries)",
        db_path.display(),
        entries
    ));

    println!("🎉 rLogout initialization completed!");
    Ok(())
}
