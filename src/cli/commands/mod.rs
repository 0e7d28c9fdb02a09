pub mod calc;
pub mod config;
pub mod init;
pub mod log;
pub mod session;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::work_policy::WorkPolicy;

/// Policy from the command line when given, from the config otherwise.
pub(crate) fn resolve_policy(arg: Option<&str>, cfg: &Config) -> AppResult<WorkPolicy> {
    match arg {
        Some(p) => WorkPolicy::parse(p),
        None => cfg.policy(),
    }
}
