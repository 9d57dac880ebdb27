//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for commands that print data.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// All subcommands supported by `cyclebasis`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a cycle basis of a graph file.
    ///
    /// Prints one cycle per line as ` - ` separated vertex ids. Exits 1 if the
    /// pipeline fails a self-check, or with `--strict` if fewer than
    /// `E - V + C` cycles were found.
    Cycles {
        /// Graph file in `<label>:<count>` / `<v1>-<v2>` format, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,

        /// Draw the basis from chordless cycles only.
        #[arg(long)]
        chordless: bool,

        /// Skip validating cycles between stages.
        #[arg(long)]
        no_self_checks: bool,

        /// Report per-stage counts and timings.
        #[arg(long)]
        info: bool,

        /// Stop extending exploration paths at this many vertices.
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Treat a basis smaller than `E - V + C` as a failure.
        #[arg(long)]
        strict: bool,
    },

    /// Print vertex, edge and component counts and the expected basis size.
    Info {
        /// Graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Write the graph as Graphviz DOT with basis cycles colored.
    Dot {
        /// Graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,

        /// Color the chordless basis instead of the default one.
        #[arg(long)]
        chordless: bool,
    },

    /// Print the cyclebasis-core library version.
    Version,
}

/// Root CLI struct for the `cyclebasis` binary.
///
/// All global flags are marked `global = true` so that clap propagates them to
/// every subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "cyclebasis",
    version,
    about = "Cycle basis detection for undirected graphs",
    long_about = "Finds a set of independent simple cycles spanning the cycle space\n\
                  of an undirected graph, optionally restricted to chordless cycles."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log per-stage progress at debug level (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `CYCLEBASIS_MAX_FILE_SIZE` environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "CYCLEBASIS_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}
