pub mod check;
pub mod compose;
pub mod config;
pub mod hours;
pub mod init;
pub mod log;
pub mod ping;
pub mod reserve;
pub mod slots;

use crate::api::backend::HttpBackend;
use crate::config::Config;
use crate::core::form::FormState;
use crate::core::slots::time_slots;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::time::parse_minute_of_day;
use tokio::runtime::{Builder, Runtime};

/// Network commands run on a single-threaded runtime.
pub(crate) fn runtime() -> AppResult<Runtime> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}

pub(crate) fn backend(cfg: &Config) -> AppResult<HttpBackend> {
    HttpBackend::new(&cfg.api_base, cfg.request_timeout())
}

/// Form for `date` with `time` selected. A time that is not one of the date's
/// slots is rejected instead of being silently replaced.
pub(crate) fn form_for(date: &str, time: Option<&str>) -> AppResult<FormState> {
    let form = FormState::new().with_date(date)?;

    let Some(time) = time else {
        return Ok(form);
    };

    parse_minute_of_day(time)?;
    let offered = time_slots(Some(date))?.iter().any(|s| s.to_string() == time.trim());
    if !offered {
        return Err(AppError::SlotNotOffered {
            date: date.to_string(),
            time: time.to_string(),
        });
    }

    Ok(form.with_time(time))
}

/// Audit logging never fails the command.
pub(crate) fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    let result = DbPool::new(&cfg.database)
        .and_then(|pool| ttlog(&pool.conn, operation, target, message));

    if let Err(e) = result {
        warning(format!("Failed to write internal log: {}", e));
    }
}
