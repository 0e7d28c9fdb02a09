pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::ui::messages::warning;

/// Record an operation in the internal log, if enabled.
/// Never fails: problems are reported as a warning on stderr.
pub fn log_operation(cfg: &Config, operation: &str, target: &str, message: &str) {
    if !cfg.log_calculations {
        return;
    }

    let result = DbPool::new(&cfg.database_path())
        .and_then(|pool| log::ttlog(&pool.conn, operation, target, message));

    if let Err(e) = result {
        warning(format!("Failed to write internal log: {}", e));
    }
}
