//! `placement_stats.rs` — quick local placement-coverage runner
//!
//! PURPOSE
//! -------
//! - Checks how reliably the generator places every word of real puzzle content.
//! - Loads the content once, then generates each puzzle under many seeds and
//!   reports the share of runs with every word placed and the median generation time.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin placement_stats --release`
//! - More seeds:                     `cargo run --bin placement_stats --release -- -r 1000`
//! - Print the first grid per case:  `cargo run --bin placement_stats --release -- --print`
//! - See all flags:                  `cargo run --bin placement_stats -- --help`
//!
//! NOTES
//! -----
//! - Seeds run from `--first-seed` upward, so numbers are reproducible.
//! - I/O (printing) is kept outside the timed section.
//! - We report the *median* time (more robust than mean for noisy runs).

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Instant;
use milim::content::PuzzleContent;
use milim::generator;

/// Local placement runner: load content once, generate each puzzle under many seeds.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the puzzle content file
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/puzzles.json")
    )]
    content: String,

    /// Number of seeds per puzzle
    #[arg(short = 'r', long = "runs", default_value_t = 200)]
    num_runs: u64,

    /// First seed
    #[arg(long, default_value_t = 0)]
    first_seed: u64,

    /// Print the grid of the first run of each puzzle
    #[arg(short, long)]
    print: bool,
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn pluralizer(count: usize, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}

const MAX_LABEL_LEN: usize = 36;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// (label, median ms, fully placed runs, total runs, words placed, words requested)
    type SummaryRow = (String, f64, u64, u64, usize, usize);

    let cli = Cli::parse();

    eprintln!("Loading content from: {}", cli.content);
    let puzzles = PuzzleContent::load_from_path(&cli.content).map_err(|e| *e)?;
    eprintln!("Loaded {} {}", puzzles.len(), pluralizer(puzzles.len(), "puzzle"));

    let mut summary: Vec<SummaryRow> = Vec::with_capacity(puzzles.len());

    for (idx, content) in puzzles.iter().enumerate() {
        let label = format!("{}x{} {}", content.grid_size(), content.grid_size(), content.words().join(","));
        eprintln!("\n[{:02}] {}", idx + 1, label);

        let mut times = Vec::new();
        let mut fully_placed = 0;
        let mut placed_total = 0;

        for seed in cli.first_seed..cli.first_seed + cli.num_runs {
            let mut rng = StdRng::seed_from_u64(seed);
            let t_generate = Instant::now();
            let result = generator::generate(black_box(content), &mut rng);
            times.push(t_generate.elapsed().as_secs_f64() * 1000.0);

            if result.is_complete() {
                fully_placed += 1;
            } else {
                eprintln!("  seed {seed}: unplaced {}", result.unplaced.join(", "));
            }
            placed_total += result.word_positions.len();

            if cli.print && seed == cli.first_seed {
                println!("{}\n", result.grid);
            }
        }

        let med = median(times);
        eprintln!(
            "  → median {:.3}ms over {} {}; {} fully placed",
            med,
            cli.num_runs,
            pluralizer(cli.num_runs as usize, "run"),
            fully_placed
        );
        summary.push((
            label,
            med,
            fully_placed,
            cli.num_runs,
            placed_total,
            content.words().len() * cli.num_runs as usize,
        ));
    }

    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_LABEL_LEN$} | {:>11} | {:>11} | {:>8}",
        "puzzle", "median (ms)", "full runs", "words %"
    );
    eprintln!("{:-<MAX_LABEL_LEN$}-+-{:-<11}-+-{:-<11}-+-{:-<8}", "", "", "", "");
    for (label, med, full, runs, placed, requested) in &summary {
        let display = if label.chars().count() > MAX_LABEL_LEN {
            format!("{}…", label.chars().take(MAX_LABEL_LEN - 1).collect::<String>())
        } else {
            label.clone()
        };
        let pct = if *requested == 0 { 0.0 } else { *placed as f64 / *requested as f64 * 100.0 };
        let full_str = format!("{full}/{runs}");
        eprintln!("{display:<MAX_LABEL_LEN$} | {med:>11.3} | {full_str:>11} | {pct:>7.1}%");
    }

    Ok(())
}
