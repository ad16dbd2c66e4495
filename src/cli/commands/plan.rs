use crate::backend;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compensation::{default_slot_time, plan_compensation};
use crate::core::compensate::CompensateLogic;
use crate::core::logic::{Core, fetch_or_default};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::compensation::SagaOutcome;
use crate::models::monthly_balance::YearMonth;
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minutes, parse_time, try_parse_hhmm};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        debt,
        per_day,
        user,
        confirm,
    } = cmd
    {
        let user_id = user.unwrap_or(cfg.default_user);
        let now = Local::now().naive_local();
        let backend = backend::from_config(cfg)?;

        //
        // 1. Debit: explicit, or the current monthly balance
        //
        let debt_minutes = match debt {
            Some(s) => try_parse_hhmm(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
            None => {
                let month = YearMonth::of(now.date());
                fetch_or_default(
                    cfg,
                    "monthly saldo",
                    backend.fetch_monthly_saldo(user_id, month),
                )
                .map(|b| Core::debt_from_balance(b.balance_minutes))
                .unwrap_or(0)
            }
        };

        if debt_minutes == 0 {
            info(format!("User {} has nothing to compensate.", user_id));
            return Ok(());
        }

        //
        // 2. Plan
        //
        let rate = per_day.unwrap_or(cfg.compensation_minutes_per_day);
        let slot_time = parse_time(&cfg.compensation_time).unwrap_or_else(default_slot_time);
        let plan = plan_compensation(debt_minutes, rate, now, slot_time)?;

        header(format!(
            "Compensation plan · user {} · debit {} · {} min/day",
            user_id,
            format_minutes(debt_minutes),
            rate
        ));

        let mut table = Table::new(vec![
            Column::new("#", 3),
            Column::new("DAY", 10),
            Column::new("SLOT", 5),
            Column::new("MINUTES", 7),
        ]);
        for (i, item) in plan.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                item.slot.format("%a %Y-%m-%d").to_string(),
                item.slot.format("%H:%M").to_string(),
                format_minutes(item.minutes),
            ]);
        }
        print!("{}", table.render());

        //
        // 3. Confirm (journaled writes)
        //
        if *confirm {
            let pool = DbPool::open_migrated(&cfg.database)?;
            let outcome = CompensateLogic::confirm(
                &pool.conn,
                backend.as_ref(),
                user_id,
                debt_minutes,
                rate,
                &plan,
            )?;
            report_outcome(&outcome);
        } else {
            info("Preview only: use --confirm to write the plan.");
        }
    }
    Ok(())
}

pub(crate) fn report_outcome(outcome: &SagaOutcome) {
    if outcome.is_complete() {
        success(format!(
            "Plan {}: {} compensation punch(es) written.",
            outcome.plan_id, outcome.written
        ));
        return;
    }

    warning(format!(
        "Plan {}: {} written, {} failed, {} pending.",
        outcome.plan_id, outcome.written, outcome.failed, outcome.pending
    ));
    if let Some(e) = &outcome.first_error {
        error(e);
    }
    info(format!(
        "Resume with: rtimebank compensate --resume {}",
        outcome.plan_id
    ));
}
