//! CLI probe for `weekmask_core`.
//!
//! # Responsibility
//! - Print a mask summary and its next occurrence for quick local checks.
//! - Optionally start file logging from `WEEKMASK_LOG_LEVEL` / `WEEKMASK_LOG_DIR`.
//!
//! Usage: `weekmask_cli <mask> [YYYY-MM-DD]`

use chrono::NaiveDate;
use log::info;
use std::process::ExitCode;
use weekmask_core::{core_version, default_log_level, init_logging, load, Weekday};

const LOG_LEVEL_ENV: &str = "WEEKMASK_LOG_LEVEL";
const LOG_DIR_ENV: &str = "WEEKMASK_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut args = std::env::args().skip(1);
    let Some(seed) = args.next() else {
        eprintln!("usage: weekmask_cli <mask> [YYYY-MM-DD]");
        return ExitCode::from(2);
    };

    let from = match args.next() {
        Some(text) => match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(err) => {
                eprintln!("invalid date `{text}`: {err}");
                return ExitCode::from(2);
            }
        },
        None => None,
    };

    let mask = load(&seed);
    info!(
        "event=cli_run module=cli status=ok mask={}",
        mask.to_integer()
    );

    println!("weekmask_core version={}", core_version());
    let days: Vec<&str> = mask.to_day_list().into_iter().map(Weekday::token).collect();
    println!("mask={mask}");
    println!("days=[{}]", days.join(","));
    match mask.next_occurrence(from) {
        Some(date) => println!("next={date}"),
        None => println!("next=none"),
    }

    ExitCode::SUCCESS
}
