use crate::cli::commands::{audit, backend, form_for, runtime};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::availability::{AvailabilityChecker, AvailabilityQuery, AvailabilityView};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { date, time, guests } = cmd {
        let form = form_for(date, time.as_deref())?.with_guests(*guests);

        let query = AvailabilityQuery {
            time_slot: form.time_slot(),
            guests: form.guests,
        };

        info(format!("Checking availability for {}…", query.time_slot));

        let checker = AvailabilityChecker::new(backend(cfg)?, cfg.debounce());
        let view = runtime()?.block_on(checker.check(&query));

        // superseded checks yield None; a lone check always resolves
        let Some(view) = view else {
            return Ok(());
        };

        let line = view.render();
        match &view {
            AvailabilityView::Known(_) => println!("{}", line),
            AvailabilityView::Message(_) => warning(&line),
        }

        audit(cfg, "check", &query.time_slot, &line);
    }

    Ok(())
}
