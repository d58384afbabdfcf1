mod args;
mod bench;

use std::error::Error;
use std::fs::File;
use std::sync::Arc;

use args::{Args, Command};
use bench::BenchOptions;
use clap::Parser;
use cozy_chess::{Board, Color};
use evaluation::{Evaluator, PawnCache, HCE};
use log::{debug, LevelFilter};
use search::{static_exchange, SearchConfig};
use simplelog::{Config, WriteLogger};
use utils::{legal_moves, AttackTables, Move, Position};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let config = search_config(&args.overrides)?;

    match args.command {
        Command::Eval { fen } => eval(&fen),
        Command::See { fen, mv, threshold } => see(&fen, &mv, threshold, &config),
        Command::Bench {
            threads,
            games,
            plies,
            seed,
        } => {
            let options = BenchOptions {
                threads: threads.unwrap_or_else(num_cpus::get).max(1),
                games,
                plies,
                seed,
            };
            bench::run(&options, &config)
        }
        Command::Params => {
            for line in config.describe() {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}

fn search_config(overrides: &[String]) -> Result<SearchConfig, Box<dyn Error>> {
    let mut config = SearchConfig::default();

    for entry in overrides {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("Expected NAME=VALUE, got '{}'", entry))?;
        config.update(name.trim(), value)?;
        debug!("Set option '{}' to '{}'", name.trim(), value.trim());
    }

    Ok(config)
}

fn parse_board(fen: &str) -> Result<Board, Box<dyn Error>> {
    fen.parse::<Board>()
        .map_err(|e| format!("Invalid FEN '{}': {:?}", fen, e).into())
}

fn eval(fen: &str) -> Result<(), Box<dyn Error>> {
    let board = parse_board(fen)?;
    let evaluator = Evaluator::with_defaults(
        Arc::new(AttackTables::build()),
        Arc::new(PawnCache::default()),
    );

    let score = evaluator.evaluate_board(&board);
    let white = match board.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    };

    println!("{} eval: {} cp (side to move), {} cp (white)", evaluator.name(), score, white);
    Ok(())
}

fn see(fen: &str, mv: &str, threshold: i32, config: &SearchConfig) -> Result<(), Box<dyn Error>> {
    let board = parse_board(fen)?;
    let mv = Move::from_uci(&board, mv)?;

    if !legal_moves(&board).contains(&mv) {
        return Err(format!("Illegal move {} in {}", mv, fen).into());
    }

    let tables = AttackTables::build();
    let position = Position::from_board(&board, |_, _, _| Default::default());
    let wins = static_exchange(&tables, &position, mv, threshold, &config.see_values());

    println!("see {} >= {}: {}", mv, threshold, wins);
    Ok(())
}
