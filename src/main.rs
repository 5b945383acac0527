use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use milim::content::PuzzleContent;
use milim::direction::Direction;
use milim::errors::ContentError;
use milim::generator;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Word-search puzzle generator
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Path to a puzzle content file (one JSON object or an array of them)
    content: Option<String>,

    /// Inline words, comma separated (used instead of a content file)
    #[arg(short, long, value_delimiter = ',', conflicts_with = "content")]
    words: Vec<String>,

    /// Grid size for inline words (8, 10 or 12)
    #[arg(short = 's', long, default_value_t = 10)]
    size: usize,

    /// Permitted directions for inline words, comma separated
    #[arg(short, long, value_delimiter = ',', default_value = "horizontal,vertical,diagonal")]
    directions: Vec<String>,

    /// Which puzzle of the content file to generate (0-based)
    #[arg(short, long, default_value_t = 0)]
    puzzle: usize,

    /// Seed for a reproducible grid
    #[arg(long)]
    seed: Option<u64>,

    /// Also print where each word was placed
    #[arg(short, long)]
    answers: bool,
}

/// Entry point of the puzzle generator CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("MILIM_DEBUG").is_ok();
    milim::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(content_err) = e.downcast_ref::<ContentError>() {
            eprintln!("Error: {}", content_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load puzzle content from a file, or build it from inline flags.
/// 3. Generate the grid.
/// 4. Print the grid (and optionally the answers) on stdout.
/// 5. Print unplaced words and timing on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let content = load_content(&cli).map_err(|e| *e)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let t_generate = Instant::now();
    let result = generator::generate(&content, &mut rng);
    let generate_secs = t_generate.elapsed().as_secs_f64();

    println!("{}", result.grid);

    if cli.answers {
        println!();
        for pos in &result.word_positions {
            println!("{}: {} -> {}", pos.word, pos.start, pos.end);
        }
    }

    if !result.unplaced.is_empty() {
        eprintln!("⚠️  Could not place: {}", result.unplaced.join(", "));
    }

    eprintln!(
        "Loaded content in {:.3}s; generated {}x{} grid in {:.3}s ({}/{} words placed).",
        load_secs,
        content.grid_size(),
        content.grid_size(),
        generate_secs,
        result.word_positions.len(),
        content.words().len()
    );

    Ok(())
}

fn load_content(cli: &Cli) -> Result<PuzzleContent, Box<ContentError>> {
    if let Some(path) = &cli.content {
        let mut puzzles = PuzzleContent::load_from_path(path)?;
        log::info!("loaded {} puzzle(s) from {path}", puzzles.len());
        if cli.puzzle >= puzzles.len() {
            return Err(Box::new(ContentError::NoSuchPuzzle { index: cli.puzzle, count: puzzles.len() }));
        }
        return Ok(puzzles.swap_remove(cli.puzzle));
    }

    let directions = cli
        .directions
        .iter()
        .map(|d| d.parse::<Direction>())
        .collect::<Result<Vec<_>, _>>()?;
    PuzzleContent::new(&cli.words, cli.size, &directions)
}
