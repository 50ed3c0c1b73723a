use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    /// Bulk attendance export, as returned by `GET /attendance/view`
    pub attendance_export: PathBuf,

    // Month to report on, 1-indexed
    pub report_year: i32,
    pub report_month: u32,

    // Logging
    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| lookup(key).ok_or_else(|| anyhow!("{} must be set", key));

        let report_month: u32 = require("REPORT_MONTH")?
            .parse()
            .context("REPORT_MONTH must be a number")?;
        if !(1..=12).contains(&report_month) {
            return Err(anyhow!("REPORT_MONTH must be between 1 and 12"));
        }

        Ok(Self {
            attendance_export: require("ATTENDANCE_EXPORT")?.into(),
            report_year: require("REPORT_YEAR")?
                .parse()
                .context("REPORT_YEAR must be a number")?,
            report_month,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_level: lookup("LOG_LEVEL")
                .unwrap_or_else(|| "debug".to_string())
                .parse()
                .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?,
        })
    }
}
