//! # ConCrete Calculator CLI
//!
//! Terminal interface to the concrete estimator.
//!
//! - With `--length`, `--width` and `--depth` it runs a single estimate and
//!   exits (status 1 when the dimensions are rejected).
//! - Otherwise it starts an interactive session; see [`session`].

mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use calc_core::calculations::DimensionField;
use calc_core::logging::init_logger;
use calc_core::settings::DEFAULT_SETTINGS_FILE;
use calc_core::load_settings_or_default;

use session::{parse_command, run_once, Session};

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Concrete volume and premixed bag estimator")]
struct Cli {
    /// Length in feet
    #[arg(short, long)]
    length: Option<String>,

    /// Width in feet
    #[arg(short, long)]
    width: Option<String>,

    /// Depth in feet
    #[arg(short, long)]
    depth: Option<String>,

    /// Also print the result as JSON
    #[arg(long)]
    json: bool,

    /// Settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Debug logging for the estimator
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings_or_default(&cli.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logger(cli.verbose, &settings.logging.filter);
    tracing::debug!(config = %cli.config.display(), "settings ready");

    let json = cli.json || settings.output.json;

    let outcome = match (&cli.length, &cli.width, &cli.depth) {
        (Some(l), Some(w), Some(d)) => run_single(l, w, d, json),
        _ => run_interactive(&cli, json),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Single estimate from command-line flags; status 1 when declined.
fn run_single(length: &str, width: &str, depth: &str, json: bool) -> io::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let accepted = run_once(&mut out, length, width, depth, json)?;
    Ok(if accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Read commands from stdin until `quit` or end of input.
fn run_interactive(cli: &Cli, json: bool) -> io::Result<ExitCode> {
    let mut session = Session::new(json);

    // Any dimensions given on the command line pre-fill the form
    let prefill = [
        (DimensionField::Length, &cli.length),
        (DimensionField::Width, &cli.width),
        (DimensionField::Depth, &cli.depth),
    ];
    for (field, value) in prefill {
        if let Some(text) = value {
            session.form.set_field(field, text.as_str());
        }
    }

    println!("ConCrete Calculator - Construction Material Estimator");
    println!("=====================================================");
    println!("Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if !session.handle(parse_command(&line), &mut stdout)? {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}
