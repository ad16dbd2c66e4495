use crate::backend;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::expected::expected_daily_minutes;
use crate::core::calculator::monthly::{ProjectionMode, expected_month_minutes, month_outlook};
use crate::core::logic::fetch_or_default;
use crate::errors::AppResult;
use crate::models::monthly_balance::YearMonth;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date;
use crate::utils::formatting::highlight;
use crate::utils::mins2readable;
use crate::utils::time::{format_minutes, format_signed_minutes};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { month, user } = cmd {
        let user_id = user.unwrap_or(cfg.default_user);
        let today = date::today();
        let ym = match month {
            Some(m) => m.parse::<YearMonth>()?,
            None => YearMonth::of(today),
        };

        let backend = backend::from_config(cfg)?;
        let balance = fetch_or_default(
            cfg,
            "monthly saldo",
            backend.fetch_monthly_saldo(user_id, ym),
        );

        let Some(balance) = balance else {
            info(format!("No monthly balance available for user {} in {}", user_id, ym));
            return Ok(());
        };

        let full_month = expected_month_minutes(ym, expected_daily_minutes(cfg, user_id));
        let outlook = month_outlook(&balance, full_month, today);

        header(format!("{} · {} ({})", ym, balance.name, user_id));
        println!("Worked   : {}", format_minutes(balance.total_worked_minutes));
        println!("Expected : {}", format_minutes(balance.total_expected_minutes));
        println!(
            "Balance  : {}{}{}",
            color_for_balance(balance.balance_minutes),
            format_signed_minutes(balance.balance_minutes),
            RESET
        );
        println!(
            "Business days: {} elapsed of {}",
            outlook.business_days_elapsed, outlook.business_days
        );

        match (outlook.mode, outlook.projection) {
            (ProjectionMode::Current, Some(p)) => {
                println!("\n{}", highlight("Projection (current month)"));
                println!("Month expected   : {}", format_minutes(full_month));
                println!("Average/day      : {}", mins2readable(p.average_per_day, false, false));
                println!("Projected worked : {}", format_minutes(p.projected_worked_total));
                println!(
                    "Projected balance: {}{}{}",
                    color_for_balance(p.projected_balance),
                    format_signed_minutes(p.projected_balance),
                    RESET
                );
            }
            (ProjectionMode::Historical, _) => {
                println!("\n{}", highlight("Closed month: actual totals, no projection"));
            }
            _ => {
                println!("\n{}", highlight("Future month: nothing to project yet"));
            }
        }
    }
    Ok(())
}
