use std::fs;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;

use hrm_attendance::calendar::build_report;
use hrm_attendance::config::Config;
use hrm_attendance::docs::ApiDoc;
use hrm_attendance::utils::payload::decode_str;

fn print_schema() -> Result<()> {
    let doc = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialize schema document")?;
    println!("{}", doc);
    Ok(())
}

fn run_report() -> Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "attendance.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(
        export = %config.attendance_export.display(),
        year = config.report_year,
        month = config.report_month,
        "Building attendance report"
    );

    let text = fs::read_to_string(&config.attendance_export).with_context(|| {
        format!(
            "Failed to read attendance export {}",
            config.attendance_export.display()
        )
    })?;

    let bulk = decode_str(&text).context("Failed to decode attendance export")?;
    let report = build_report(config.report_year, config.report_month, &bulk)
        .context("Failed to build attendance report")?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    info!(employees = report.employees.len(), "Attendance report written");
    Ok(())
}

fn main() -> Result<()> {
    match std::env::args().nth(1).as_deref() {
        None | Some("report") => run_report(),
        Some("schema") => print_schema(),
        Some(other) => bail!("unknown command `{}`, expected `report` or `schema`", other),
    }
}
