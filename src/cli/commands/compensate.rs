use super::plan::report_outcome;
use crate::backend;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::compensate::CompensateLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::compensation::EntryStatus;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREEN, GREY, RED, RESET};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compensate { resume, status } = cmd {
        let pool = DbPool::open_migrated(&cfg.database)?;

        if let Some(plan_id) = resume {
            let backend = backend::from_config(cfg)?;
            let outcome = CompensateLogic::resume(&pool.conn, backend.as_ref(), *plan_id)?;
            report_outcome(&outcome);
        }

        if let Some(plan_id) = status {
            let entries = CompensateLogic::status(&pool.conn, *plan_id)?;

            header(format!("Compensation plan {}", plan_id));
            let mut table = Table::new(vec![
                Column::new("#", 3),
                Column::new("SLOT", 16),
                Column::new("MINUTES", 7),
                Column::new("STATUS", 8),
                Column::new("ERROR", 20),
            ]);

            for e in &entries {
                let color = match e.status {
                    EntryStatus::Written => GREEN,
                    EntryStatus::Failed => RED,
                    EntryStatus::Pending => GREY,
                };
                table.add_row(vec![
                    e.seq.to_string(),
                    e.slot.format("%Y-%m-%d %H:%M").to_string(),
                    format_minutes(e.minutes),
                    format!("{}{}{}", color, e.status.to_db_str(), RESET),
                    e.error.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }

        if resume.is_none() && status.is_none() {
            info("Nothing to do: use --resume PLAN or --status PLAN.");
        }
    }
    Ok(())
}
