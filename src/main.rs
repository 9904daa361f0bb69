use clap::Parser;
use eth_validator::app::App;
use eth_validator::config::FormConfig;
use eth_validator::input::{load_file, load_reader};
use eth_validator::report::{self, Emit};
use eth_validator::ui::TuiManager;
use eth_validator::validation::validate_input;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "eth-validator")]
#[command(about = "Validate a list of Ethereum wallet addresses")]
#[command(version)]
struct Args {
    /// Initial address list (comma or newline separated)
    #[arg(short, long, conflicts_with_all = ["file", "empty"])]
    input: Option<String>,

    /// Read the initial address list from a file
    #[arg(short, long, conflicts_with = "empty")]
    file: Option<PathBuf>,

    /// Start with an empty input instead of the sample addresses
    #[arg(long)]
    empty: bool,

    /// Validate without the terminal UI and print the result
    #[arg(long)]
    check: bool,

    /// Output of --check
    #[arg(long, value_enum, default_value_t = Emit::Report)]
    emit: Emit,

    /// Write logs to this file (the terminal UI never logs to the screen)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_tracing(&args)?;

    if args.check {
        return run_check(&args);
    }

    let initial_input = initial_input(&args)?.unwrap_or_else(|| {
        if args.empty {
            String::new()
        } else {
            FormConfig::default().initial_input
        }
    });

    info!("starting terminal form");
    let mut app = App::new(FormConfig::with_initial_input(initial_input));
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

/// Explicit input from --input or --file, if any
fn initial_input(args: &Args) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if let Some(text) = &args.input {
        return Ok(Some(text.clone()));
    }
    if let Some(path) = &args.file {
        return Ok(Some(load_file(path)?));
    }
    Ok(None)
}

fn run_check(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let raw = match initial_input(args)? {
        Some(text) => text,
        None if args.empty => String::new(),
        None => load_reader(io::stdin().lock())?,
    };

    let results = validate_input(&raw);
    info!(
        tokens = results.len(),
        valid = results.iter().filter(|r| r.is_valid).count(),
        "validated address list"
    );

    let output = report::render(&results, &FormConfig::default(), args.emit);
    let mut stdout = io::stdout().lock();
    if !output.is_empty() {
        writeln!(stdout, "{}", output)?;
    }
    Ok(())
}

fn init_tracing(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // Headless runs keep stderr quiet unless asked
    let default_level = if args.log_file.is_some() {
        "eth_validator=info"
    } else {
        "eth_validator=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init();
    } else if args.check {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    Ok(())
}
