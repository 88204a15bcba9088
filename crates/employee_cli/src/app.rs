//! Interactive application loop.
//!
//! # Responsibility
//! - Drive the Startup -> AwaitingInput -> Dispatching -> Terminated
//!   lifecycle over injected reader/writer handles.
//! - Translate parsed commands into service calls and console output.
//!
//! # Invariants
//! - One input line is handled fully before the next is read.
//! - No command failure is fatal; every failure prints one line and the
//!   loop returns to awaiting input.

use crate::command::{
    self, has_selector, parse_tokens, Command, CommandLine, CLEAR_SCREEN_TOKEN, EXIT_TOKEN,
};
use crate::render::render_table;
use employee_core::{Employee, EmployeeId, EmployeeService, EmployeeStore, UpsertOutcome};
use log::{info, warn};
use std::io::{BufRead, Write};

/// ANSI clear-screen plus cursor-home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Runs startup schema handling, then the read/dispatch loop until an
/// `-exit` token or end of input.
///
/// `startup_args` are the process arguments: `-dbreset` is honored here
/// (best-effort drop, then fatal-on-failure create), and any remaining
/// selector-bearing tokens are dispatched once before the loop starts.
pub fn run(
    store: &EmployeeStore,
    startup_args: &[String],
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    let service = EmployeeService::new(store);

    if startup_args.iter().any(|arg| arg == command::RESET_TOKEN) {
        // Keep the application running even when the drop fails.
        if let Err(err) = store.reset_schema() {
            writeln!(output, "Failed to drop the Employee table: {err}")?;
            warn!("event=db_reset module=cli status=error error={err}");
        } else {
            info!("event=db_reset module=cli status=ok");
        }
    }

    if let Err(err) = store.init_schema() {
        // Without a schema nothing below can work; never start the loop.
        writeln!(output, "Failed to create the Employee table: {err}")?;
        return Ok(());
    }

    let startup_tokens: Vec<&str> = startup_args
        .iter()
        .map(String::as_str)
        .filter(|token| *token != command::RESET_TOKEN)
        .collect();
    if has_selector(&startup_tokens) {
        dispatch_tokens(&service, &startup_tokens, output)?;
    }

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.contains(&EXIT_TOKEN) {
            break;
        }
        if tokens == [CLEAR_SCREEN_TOKEN] {
            write!(output, "{CLEAR_SCREEN}")?;
            output.flush()?;
            continue;
        }

        dispatch_tokens(&service, &tokens, output)?;
    }

    info!("event=app_loop module=cli status=terminated");
    Ok(())
}

fn dispatch_tokens(
    service: &EmployeeService<'_>,
    tokens: &[&str],
    output: &mut impl Write,
) -> std::io::Result<()> {
    let parsed = match parse_tokens(tokens) {
        Ok(parsed) => parsed,
        Err(err) => {
            writeln!(output, "{err}")?;
            return Ok(());
        }
    };

    match parsed.command {
        Command::Create => run_create(service, &parsed, output),
        Command::Read => run_read(service, &parsed, output),
        Command::Update => run_update(service, &parsed, output),
        Command::Delete => run_delete(service, &parsed, output),
    }
}

fn run_create(
    service: &EmployeeService<'_>,
    line: &CommandLine,
    output: &mut impl Write,
) -> std::io::Result<()> {
    let Some(employee) = require_full_record(line, output)? else {
        return Ok(());
    };

    match service.create(&employee) {
        Ok(()) => writeln!(output, "Employee {} created.", employee.id),
        Err(err) => writeln!(output, "Create failed: {err}"),
    }
}

fn run_read(
    service: &EmployeeService<'_>,
    line: &CommandLine,
    output: &mut impl Write,
) -> std::io::Result<()> {
    if let Some(raw_id) = line.id.as_deref() {
        let Some(id) = parse_id(raw_id, output)? else {
            return Ok(());
        };
        match service.get(id) {
            Ok(Some(employee)) => {
                return write!(output, "{}", render_table(&[employee], 0));
            }
            Ok(None) => {
                // Lookup misses fall back to the full listing.
                writeln!(output, "Employee {id} not found, listing all rows.")?;
            }
            Err(err) => return writeln!(output, "Read failed: {err}"),
        }
    }

    let max_rows = line
        .rowcount
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(0);

    match service.list() {
        Ok(rows) => write!(output, "{}", render_table(&rows, max_rows)),
        Err(err) => writeln!(output, "Read failed: {err}"),
    }
}

fn run_update(
    service: &EmployeeService<'_>,
    line: &CommandLine,
    output: &mut impl Write,
) -> std::io::Result<()> {
    let Some(employee) = require_full_record(line, output)? else {
        return Ok(());
    };

    match service.upsert(&employee) {
        Ok(UpsertOutcome::Updated) => writeln!(output, "Employee {} updated.", employee.id),
        Ok(UpsertOutcome::Inserted) => writeln!(
            output,
            "Employee {} not found, inserted instead.",
            employee.id
        ),
        Err(err) => writeln!(output, "Update failed: {err}"),
    }
}

fn run_delete(
    service: &EmployeeService<'_>,
    line: &CommandLine,
    output: &mut impl Write,
) -> std::io::Result<()> {
    let Some(raw_id) = line.id.as_deref() else {
        return writeln!(output, "Delete requires --id.");
    };
    let Some(id) = parse_id(raw_id, output)? else {
        return Ok(());
    };

    match service.remove(id) {
        Ok(0) => writeln!(output, "No employee with id {id}."),
        Ok(_) => writeln!(output, "Employee {id} deleted."),
        Err(err) => writeln!(output, "Delete failed: {err}"),
    }
}

/// Extracts the id/name/birth triple required by Create and Update.
///
/// Prints one error line and returns `None` when a field is missing or the
/// id is not an unsigned integer; the store is never touched in that case.
fn require_full_record(
    line: &CommandLine,
    output: &mut impl Write,
) -> std::io::Result<Option<Employee>> {
    let Some(raw_id) = line.id.as_deref() else {
        writeln!(output, "Missing required --id.")?;
        return Ok(None);
    };
    let Some(id) = parse_id(raw_id, output)? else {
        return Ok(None);
    };
    let Some(name) = line.name.as_deref() else {
        writeln!(output, "Missing required --name.")?;
        return Ok(None);
    };
    let Some(birth) = line.birth.as_deref() else {
        writeln!(output, "Missing required --birth.")?;
        return Ok(None);
    };

    Ok(Some(Employee::new(id, name, birth)))
}

fn parse_id(raw: &str, output: &mut impl Write) -> std::io::Result<Option<EmployeeId>> {
    match raw.parse::<EmployeeId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(output, "Invalid --id value `{raw}`; expected an unsigned integer.")?;
            Ok(None)
        }
    }
}
