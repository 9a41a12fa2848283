use clap::Parser;
use colored::Colorize;

use pomosh::cli::args::{Cli, Commands};
use pomosh::cli::commands;
use pomosh::config::{FileStore, Paths};
use pomosh::error::PomoshError;
use pomosh::logging::{self, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoshError> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    paths.ensure_dirs()?;

    let target = match cli.command {
        Commands::Start => LogTarget::File(&paths.log_file),
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(cli.verbose, target) {
        eprintln!("{}: {e:#}", "warning".yellow().bold());
    }

    let mut store = FileStore::open(&paths.config_file)?;
    let general = store.config().general.clone();
    general.color.apply();
    let format = cli.output.unwrap_or(general.default_output);

    let output = match cli.command {
        Commands::Start => {
            pomosh::tui::run(store)?;
            String::new()
        }
        Commands::Simulate(args) => commands::simulate(&store.config().timer, &args, format)?,
        Commands::Config(args) => commands::config(&mut store, args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
