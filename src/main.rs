//! softvol - inspect software volumes, balance and conversion accuracy
//!
//! `softvol <category> <command> [args...]`; run `softvol help` for the list
//! of commands.

use std::{env, error::Error, process};

use softvol::{
    cli::{CliService, HELP, formatting::format_error},
    config::Config,
    tracing_config,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    tracing_config::init(config.general.log_level)?;

    run_cli_command(config, &args[1..]);
    Ok(())
}

/// Executes CLI commands through the CliService.
///
/// Prints the command output on success. On failure the error is printed
/// to stderr and the process exits with status 1.
fn run_cli_command(config: Config, args: &[String]) {
    let cli_service = CliService::new(config);

    let category = args.first().map(|s| s.as_str()).unwrap_or(HELP);
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    match cli_service.execute_command(category, command, command_args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
