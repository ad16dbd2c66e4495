use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::punch_role::PunchRole;
use crate::utils::date;
use crate::utils::time::parse_time;

/// Record a punch in the local database.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        user,
        label,
        role,
    } = cmd
    {
        //
        // 1. Parse date + time (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;

        //
        // 2. Parse role (optional)
        //
        let role = match role {
            Some(code) => Some(PunchRole::from_code(code).ok_or_else(|| {
                AppError::InvalidRole(format!(
                    "'{}'. Use one of: entry, pause, return, exit",
                    code
                ))
            })?),
            None => None,
        };

        //
        // 3. Open DB + execute logic
        //
        let pool = DbPool::open_migrated(&cfg.database)?;
        AddLogic::apply(
            &pool.conn,
            user.unwrap_or(cfg.default_user),
            d.and_time(t),
            label.as_deref(),
            role,
        )?;
    }

    Ok(())
}
