use clap::Parser;
use piecetrace::{Piece, PieceConfig, ThresholdMethod};
use rayon::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "piecetrace", about = "Puzzle-piece photos to four corners and four validated sides")]
struct Cli {
    /// Input images (PNG, JPEG, BMP), one piece each
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Fixed brightness threshold (0-255). Overrides Otsu auto-detection.
    #[arg(long)]
    threshold: Option<u8>,

    /// Treat bright pixels as the piece
    #[arg(long)]
    invert: bool,

    /// Side simplification tolerance in pixels
    #[arg(long, default_value = "0.25")]
    rdp_epsilon: f64,

    /// Merge side vertices closer than this many pixels
    #[arg(long, default_value = "1.75")]
    merge_distance: f64,

    /// Length/chord ratio below which a side counts as a straight edge
    #[arg(long, default_value = "1.1")]
    edge_ratio: f64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = PieceConfig {
        threshold: match cli.threshold {
            Some(t) => ThresholdMethod::Fixed(t),
            None => ThresholdMethod::Otsu,
        },
        invert: cli.invert,
        rdp_epsilon: cli.rdp_epsilon,
        merge_distance: cli.merge_distance,
        edge_ratio: cli.edge_ratio,
        ..PieceConfig::default()
    };

    let results: Vec<_> = cli
        .images
        .par_iter()
        .map(|path| {
            let id = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let result = piecetrace::process_file(path, &id, &config);
            (id, result)
        })
        .collect();

    let mut failed = 0;
    for (id, result) in &results {
        match result {
            Ok(piece) => print_summary(piece),
            Err(e) => {
                log::warn!("{}: {}", id, e);
                failed += 1;
            }
        }
    }

    eprintln!();
    eprintln!("  {} of {} pieces accepted", results.len() - failed, results.len());
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_summary(piece: &Piece) {
    let c = piece.centroid();
    println!("{}  {}x{} px  centroid ({:.1}, {:.1})", piece.id(), piece.width(), piece.height(), c.x, c.y);
    for (corner, side) in piece.corners().iter().zip(piece.sides()) {
        println!(
            "  side {}  from ({}, {})  length {:>7.1}  angle {:>6.1}°  {}",
            side.index(),
            corner.vertex.x,
            corner.vertex.y,
            side.length(),
            side.angle().to_degrees(),
            if side.is_edge() { "edge" } else { "tab/blank" },
        );
    }
}
