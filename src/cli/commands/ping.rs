use crate::cli::commands::{backend, runtime};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let res = runtime()?.block_on(backend(cfg)?.health())?;

    if !res.ok {
        return Err(AppError::Backend(format!(
            "Backend at {} is not healthy",
            cfg.api_base
        )));
    }

    success(format!("{} is up at {}", res.service, cfg.api_base));
    Ok(())
}
