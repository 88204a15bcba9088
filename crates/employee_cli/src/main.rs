//! Process entry point for the employee CRUD utility.
//!
//! # Responsibility
//! - Wire logging, build the store once, and run the interactive loop.
//! - Catch top-level failures so shutdown always runs.

mod app;
mod command;
mod render;

use employee_core::{default_log_level, init_logging, EmployeeStore};
use log::{error, info};
use std::error::Error;
use std::io::{BufReader, Write};

const DB_FILE_NAME: &str = "simple-crud.db";
const LOG_DIR_NAME: &str = "logs";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(err) = run(&args) {
        // Mirror the loop's non-fatal policy at the top level: report once,
        // then fall through to the shutdown path.
        eprintln!("employee-crud exited with an error: {err}");
        error!("event=app_exit module=cli status=error error={err}");
    }

    info!("event=app_exit module=cli status=ok");
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let working_dir = std::env::current_dir()?;

    // File logging is diagnostics only; losing it is not worth refusing to
    // start.
    let log_dir = working_dir.join(LOG_DIR_NAME);
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    let store = EmployeeStore::new(working_dir.join(DB_FILE_NAME));
    info!(
        "event=app_run module=cli status=start db={}",
        store.path().display()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut reader = BufReader::new(stdin.lock());
    let mut writer = stdout.lock();

    app::run(&store, args, &mut reader, &mut writer)?;
    writer.flush()?;
    Ok(())
}
