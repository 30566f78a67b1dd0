//! Endgame probe CLI
//!
//! Print the endgame evaluators that match each given position.

use endgames::{Endgames, RegistryConfig};
use probe::analyze;
use std::env;
use std::io::{self, BufRead};
use std::process;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Endgame probe");
    println!();
    println!("Usage:");
    println!("  egprobe [--config FILE] [--json] [FEN...]");
    println!();
    println!("Options:");
    println!("  --config, -c FILE   Registry code lists in TOML (default: built-in set)");
    println!("  --json, -j          One JSON object per position");
    println!();
    println!("With no FEN arguments, positions are read from stdin, one per line.");
    println!();
    println!("Examples:");
    println!("  egprobe \"8/8/8/4k3/8/8/8/1NB1K3 w - - 0 1\"");
    println!("  RUST_LOG=debug egprobe --json < positions.txt");
}

struct Options {
    config: Option<String>,
    json: bool,
    fens: Vec<String>,
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mut opts = Options { config: None, json: false, fens: Vec::new() };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file");
                    return None;
                }
                opts.config = Some(args[i + 1].clone());
                i += 1;
            }
            "--json" | "-j" => opts.json = true,
            "--help" | "-h" => return None,
            fen => opts.fens.push(fen.to_string()),
        }
        i += 1;
    }
    Some(opts)
}

/// Non-empty trimmed lines of `input`. Lines that cannot be read are
/// reported and counted; reading stops at the first I/O failure.
fn read_fens(input: impl BufRead) -> (Vec<String>, usize) {
    let mut fens = Vec::new();
    let mut unreadable = 0;
    for (n, line) in input.lines().enumerate() {
        match line {
            Ok(l) if !l.trim().is_empty() => fens.push(l.trim().to_string()),
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: stdin line {}: {}", n + 1, e);
                unreadable += 1;
                // Only a bad encoding leaves the stream usable.
                if e.kind() != io::ErrorKind::InvalidData {
                    break;
                }
            }
        }
    }
    (fens, unreadable)
}

fn build_registry(config: Option<&str>) -> Result<Endgames, endgames::EndgameError> {
    match config {
        Some(path) => Endgames::from_config(&RegistryConfig::load(path)?),
        None => Ok(Endgames::new()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(opts) = parse_args(&args) else {
        print_usage();
        return;
    };

    let registry = match build_registry(opts.config.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut failed = 0;
    let fens: Vec<String> = if opts.fens.is_empty() {
        let (fens, unreadable) = read_fens(io::stdin().lock());
        failed += unreadable;
        fens
    } else {
        opts.fens
    };

    for fen in &fens {
        let report = match analyze(&registry, fen) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {}: {}", fen, e);
                failed += 1;
                continue;
            }
        };

        if opts.json {
            match serde_json::to_string(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}: {}", fen, e);
                    failed += 1;
                }
            }
        } else {
            print!("{}", report);
        }
    }

    tracing::debug!(positions = fens.len(), failed, "probe finished");
    if failed > 0 {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fens_skips_blank_lines() {
        let input = "8/8/8/4k3/8/8/8/1NB1K3 w - - 0 1\n\n  \n 4k3/8/8/8/8/8/8/4K3 b - - 0 1 \n";
        let (fens, unreadable) = read_fens(input.as_bytes());
        assert_eq!(unreadable, 0);
        assert_eq!(fens, vec!["8/8/8/4k3/8/8/8/1NB1K3 w - - 0 1", "4k3/8/8/8/8/8/8/4K3 b - - 0 1"]);
    }

    #[test]
    fn test_read_fens_counts_invalid_utf8() {
        let mut input = b"4k3/8/8/8/8/8/8/4K3 w - - 0 1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"4k3/8/8/8/8/8/8/4K3 b - - 0 1\n");
        let (fens, unreadable) = read_fens(input.as_slice());
        assert_eq!(unreadable, 1);
        assert_eq!(fens.len(), 2);
    }
}
