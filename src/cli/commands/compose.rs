use crate::cli::parser::Commands;
use crate::core::slots::compose_slot;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Compose { date, time } = cmd {
        println!("{}", compose_slot(Some(date), Some(time)));
    }
    Ok(())
}
