use anyhow::Context;
use clap::Parser;
use log::{warn, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_word_search::*;
use std::fs;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

const PUZZLE_FILE: &str = "word_search.svg";
const ANSWERS_FILE: &str = "word_search_answers.svg";

/// Generates a word-search puzzle from a list of words and writes it as SVG.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains the words to hide, with one word or phrase on each line.
    /// Spaces inside a phrase are removed.
    words_file: PathBuf,

    /// Number of rows in the grid.
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns in the grid.
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Random positions to try for each word before restarting with a fresh grid.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS_PER_WORD)]
    max_attempts_per_word: usize,

    /// Fresh grids to try before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: usize,

    /// Seed for the random generator, to reproduce a puzzle.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Race grid attempts across all cores. Uses a random seed unless `--seed` is given.
    #[arg(long)]
    parallel: bool,

    /// Directory to write the puzzle and answer SVGs into.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Log progress at info level. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> PlacerConfig {
        PlacerConfig::default()
            .with_size(self.rows, self.cols)
            .with_max_attempts_per_word(self.max_attempts_per_word)
            .with_max_retries(self.max_retries)
    }
}

fn main() -> anyhow::Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();
    init_logger(args.verbose);

    let words_reader = io::BufReader::new(
        File::open(&args.words_file)
            .with_context(|| format!("unable to open {}", args.words_file.display()))?,
    );
    let words = WordList::from_reader(words_reader)?;
    println!("File: {}", args.words_file.display());
    println!("There are {} words to hide.", words.len());

    let config = args.config();
    if let Some(limit) = too_long_for_grid(&words, &config) {
        warn!(
            "The longest word has {} letters but the grid spans at most {} cells; placement will \
             exhaust its retries.",
            words.longest(),
            limit
        );
    }

    let placer = Placer::new(config);
    let puzzle = match (args.parallel, args.seed) {
        (true, seed) => placer.place_words_parallel(&words, seed.unwrap_or_else(rand::random)),
        (false, Some(seed)) => placer.place_words(&words, &mut StdRng::seed_from_u64(seed)),
        (false, None) => placer.place_words(&words, &mut rand::thread_rng()),
    }?;

    println!("\n{}", puzzle.grid);
    print_answer_key(&puzzle);
    write_svgs(&puzzle, &args.out_dir)?;

    println!(
        "Puzzle generated in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Returns the longest span a word can have in the configured grid, if some word is longer.
fn too_long_for_grid(words: &WordList, config: &PlacerConfig) -> Option<usize> {
    let limit = config.rows.max(config.cols);
    if words.longest() > limit {
        Some(limit)
    } else {
        None
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_answer_key(puzzle: &WordSearch) {
    println!("|Word|Start (row, col)|Direction|");
    println!("|----|----------------|---------|");
    for record in puzzle.placements.iter() {
        println!(
            "|{}|({}, {})|{:?}|",
            record.word, record.row, record.col, record.direction
        );
    }
}

fn write_svgs(puzzle: &WordSearch, out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("unable to create {}", out_dir.display()))?;

    let puzzle_path = out_dir.join(PUZZLE_FILE);
    fs::write(&puzzle_path, render_svg(&puzzle.grid, None))
        .with_context(|| format!("unable to write {}", puzzle_path.display()))?;
    println!("SVG saved as {}", puzzle_path.display());

    let answers_path = out_dir.join(ANSWERS_FILE);
    fs::write(
        &answers_path,
        render_svg(&puzzle.grid, Some(puzzle.placements.as_slice())),
    )
    .with_context(|| format!("unable to write {}", answers_path.display()))?;
    println!("SVG saved as {}", answers_path.display());

    Ok(())
}
