use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use sysfetch::utils::color::ColorSession;
use sysfetch::{ascii, collect_facts, collectors, config, display, import, Config};
use tracing_subscriber::EnvFilter;

/// Show system information next to ASCII art
#[derive(Parser, Debug)]
#[command(name = "sysfetch", version)]
struct Cli {
    /// Store the art in PATH inline in the user config and exit
    #[arg(long, value_name = "PATH")]
    import_art: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SYSFETCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match cli.import_art {
        Some(source) => run_import(&source),
        None => run_display(),
    }
}

fn run_import(source: &std::path::Path) -> ExitCode {
    let Some(config_path) = config::import_target_path() else {
        eprintln!("Error: could not determine the user config directory");
        return ExitCode::FAILURE;
    };

    match import::import_art(source, &config_path) {
        Ok(()) => {
            println!(
                "Imported ASCII art from {} into {}",
                source.display(),
                config_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: art import failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_display() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let facts = collect_facts(&config);
    let art = ascii::resolve_art(&config.ascii);
    let title = display::title(&collectors::system::runtime_version());

    let colors = ColorSession::for_stdout();
    let mut stdout = io::stdout().lock();
    let rendered = display::render(&mut stdout, &config, &title, &facts, &art, &colors);
    drop(stdout);
    drop(colors);

    match rendered {
        Ok(()) => ExitCode::SUCCESS,
        // A closed pipe (e.g. `sysfetch | head`) is not worth reporting
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: failed to write output: {}", err);
            ExitCode::FAILURE
        }
    }
}
