use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "Keystone")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluation, exchange and history tooling for chess engines")]
pub struct Args {
    /// Write debug logging to a file.
    #[arg(short, long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Override a search parameter, e.g. --set "SEE Knight Value=320".
    #[arg(long = "set", value_name = "NAME=VALUE", global = true)]
    pub overrides: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a position given as FEN.
    Eval { fen: String },

    /// Run static exchange evaluation for a move in UCI notation.
    See {
        fen: String,

        #[arg(value_name = "MOVE")]
        mv: String,

        #[arg(allow_negative_numbers = true, default_value_t = 0)]
        threshold: i32,
    },

    /// Play random games on every worker and time evaluation, SEE and history updates.
    Bench {
        /// Worker threads. Defaults to the number of logical CPUs.
        #[arg(short, long)]
        threads: Option<usize>,

        #[arg(long, default_value_t = 200)]
        games: usize,

        #[arg(long, default_value_t = 120)]
        plies: usize,

        #[arg(long, default_value_t = 1)]
        seed: u64,
    },

    /// List search parameters with their ranges.
    Params,
}
