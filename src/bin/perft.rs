//! Perft runner for validating the move generator.
//!
//! Usage:
//! `cargo run --release --bin perft`
//! `cargo run --release --bin perft -- --depth 5`
//! `cargo run --release --bin perft -- --fen "<fen>" --depth 3 --divide`
//!
//! `TETRA_PERFT_DEPTH` sets the default depth; `RUST_LOG` controls logging
//! (default `tetra=info`).

use std::time::Instant;

use tetra::game_state::chess_rules::STARTING_POSITION_FEN;
use tetra::move_generation::perft::{perft, perft_divide};
use tetra::utils::render_game_state::render_position;
use tetra::Position;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DEPTH: u8 = 4;

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn default_depth() -> u8 {
    std::env::var("TETRA_PERFT_DEPTH")
        .ok()
        .and_then(|value| value.parse::<u8>().ok())
        .unwrap_or(DEFAULT_DEPTH)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tetra=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let fen = arg_value(&args, "--fen").unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
    let depth = match arg_value(&args, "--depth") {
        Some(value) => value.parse::<u8>()?,
        None => default_depth(),
    };
    let divide = args.iter().any(|arg| arg == "--divide");

    let mut position = Position::from_fen(&fen)?;
    println!("{}", render_position(&position));
    info!(
        fen = %position.fen(),
        depth,
        divide,
        started = %chrono::Local::now().to_rfc3339(),
        "perft run"
    );

    let start = Instant::now();
    let nodes = if divide {
        let divided = perft_divide(&mut position, depth);
        for (mv, count) in &divided {
            println!("{mv}: {count}");
        }
        divided.iter().map(|(_, count)| count).sum()
    } else {
        perft(&mut position, depth)
    };
    let elapsed_ms = start.elapsed().as_millis();

    let nps = if elapsed_ms > 0 {
        nodes as u128 * 1000 / elapsed_ms
    } else {
        nodes as u128
    };
    println!("depth={depth} nodes={nodes} elapsed_ms={elapsed_ms} nps={nps}");
    info!(
        nodes,
        elapsed_ms = elapsed_ms as u64,
        finished = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "perft run finished"
    );
    Ok(())
}
