use crate::cli::parser::Commands;
use crate::core::slots::{hours_label, slots_in_window, weekly_schedule};
use crate::errors::AppResult;
use crate::utils::table::Table;
use crate::utils::time::format_minute_of_day;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Hours { date } = cmd {
        if let Some(d) = date {
            println!("{}", hours_label(Some(d))?);
            return Ok(());
        }

        let mut table = Table::new(["Days", "Open", "Close", "Slots"]);
        for bucket in weekly_schedule() {
            let w = bucket.window();
            table.add_row(vec![
                bucket.days().to_string(),
                format_minute_of_day(w.open),
                format_minute_of_day(w.close),
                slots_in_window(w).len().to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
