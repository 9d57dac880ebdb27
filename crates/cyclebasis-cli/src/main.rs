mod cli;
mod cmd;
mod error;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser;

use crate::cmd::cycles::CyclesArgs;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(&cli) {
        eprintln!("{}", err.message());
        std::process::exit(err.exit_code());
    }
}

/// Installs the `env_logger` backend.
///
/// `--verbose` forces `debug`, `--quiet` forces `error`; otherwise `RUST_LOG`
/// is honoured with `warn` as the fallback.
fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(log::LevelFilter::Error);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Cycles {
            file,
            chordless,
            no_self_checks,
            info,
            max_depth,
            strict,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            let args = CyclesArgs {
                chordless: *chordless,
                self_checks: !*no_self_checks,
                info: *info,
                max_depth: *max_depth,
                strict: *strict,
            };
            cmd::cycles::run(&content, &args, &cli.format)
        }
        Command::Info { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::info::run(&content, &cli.format)
        }
        Command::Dot { file, chordless } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::dot::run(&content, *chordless)
        }
        Command::Version => {
            println!("{}", cyclebasis_core::version());
            Ok(())
        }
    }
}
