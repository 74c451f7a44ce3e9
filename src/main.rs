mod cli;
mod error;
mod generator;
mod pipeline;
mod validator;
mod writer;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Local};
use clap::Parser;
use cli::Cli;
use error::{Error, Result};
use pipeline::Notice;
use validator::{parse_count, parse_length, ValidationError};

/// Prints the prompt and reads one trimmed line. `None` on end of input.
fn get_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Keeps asking until `check` accepts the answer.
fn ask_until_valid<R, W, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    check: fn(&str) -> std::result::Result<T, ValidationError>,
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = get_input(input, output, prompt)? else {
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        };
        match check(&answer) {
            Ok(_) => return Ok(answer),
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}

/// An empty line takes the suggested default. End of input cancels the save.
fn choose_destination<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let suggested = writer::default_save_path(now);
    let prompt = format!("Save as [{}]: ", suggested.display());
    let chosen = match get_input(input, output, &prompt)? {
        None => return Err(Error::Cancelled),
        Some(answer) if answer.is_empty() => suggested,
        Some(answer) => PathBuf::from(answer),
    };
    Ok(writer::resolve_destination(chosen, now))
}

fn execute<R: BufRead, W: Write>(cli: Cli, input: &mut R, output: &mut W) -> Result<PathBuf> {
    // Values given as flags are not re-prompted: a bad one ends the run.
    let length = match cli.length {
        Some(value) => {
            parse_length(&value)?;
            value
        }
        None => ask_until_valid(
            input,
            output,
            &format!("Password length (at least {}): ", validator::MIN_LENGTH),
            parse_length,
        )?,
    };
    let count = match cli.count {
        Some(value) => {
            parse_count(&value)?;
            value
        }
        None => ask_until_valid(input, output, "Number of passwords: ", parse_count)?,
    };

    let now = Local::now();
    let destination = match cli.output {
        Some(path) => writer::resolve_destination(path, now),
        None => choose_destination(input, output, now)?,
    };

    pipeline::run(&length, &count, &destination)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let result = execute(cli, &mut stdin.lock(), &mut std::io::stdout());

    if report(&result, &mut std::io::stdout(), &mut std::io::stderr()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// The notice is the user-facing message; the log only gets the error's details.
fn report<O: Write, E: Write>(result: &Result<PathBuf>, out: &mut O, err: &mut E) -> bool {
    let notice = Notice::from_result(result);
    if let Err(error) = result {
        tracing::debug!(error = ?error, "password generation failed");
    }

    // Nothing left to tell the user if the terminal itself is gone.
    if notice.is_success() {
        let _ = writeln!(out, "{}", notice);
        true
    } else {
        let _ = writeln!(err, "{}", notice);
        false
    }
}
