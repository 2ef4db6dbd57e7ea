use crate::cli::commands::{audit, backend, form_for, runtime};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::BookingLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reserve {
        date,
        time,
        guests,
        name,
        email,
        phone,
    } = cmd
    {
        let form = form_for(date, Some(time))?
            .with_guests(Some(*guests))
            .with_name(name)
            .with_email(email)
            .with_phone(phone.as_deref().unwrap_or(""));

        let slot = form.time_slot();
        let backend = backend(cfg)?;
        let outcome = runtime()?.block_on(BookingLogic::submit(&backend, &form));

        match outcome {
            Ok(res) => {
                let lines = BookingLogic::confirmation_lines(&res);
                for line in &lines {
                    success(line);
                }
                audit(cfg, "reserve", &slot, &lines.join(" | "));
            }
            // reported once, by main
            Err(e @ AppError::Backend(_)) | Err(e @ AppError::Validation(_)) => {
                audit(cfg, "reserve_failed", &slot, &e.to_string());
                return Err(AppError::Backend(format!("Failed, not confirmed. {}", e)));
            }
            Err(e) => {
                audit(cfg, "reserve_failed", &slot, &e.to_string());
                return Err(e);
            }
        }
    }

    Ok(())
}
