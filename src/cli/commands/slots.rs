use crate::cli::parser::Commands;
use crate::core::slots::{hours_label, time_slots};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::date::today_iso;

/// Print the start times offered on a date (today by default).
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Slots { date, json } = cmd {
        let date = date.clone().unwrap_or_else(today_iso);
        let slots = time_slots(Some(&date))?;

        if *json {
            let out = serde_json::to_string(&slots)?;
            println!("{}", out);
            return Ok(());
        }

        info(format!("Hours for {}: {}", date, hours_label(Some(&date))?));

        if slots.is_empty() {
            warning("No reservation slots on this date");
            return Ok(());
        }

        for slot in &slots {
            println!("{}", slot);
        }
    }

    Ok(())
}
