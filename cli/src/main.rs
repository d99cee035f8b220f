use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::info;

use spangram::{BoardGenerator, GeneratorConfig, GridShape, PlacementError, PlacementPolicy};

#[derive(Parser, Debug)]
#[command(name = "spangram")]
#[command(about = "Lay words out as worms on a Strands-style letter board")]
struct Cli {
    #[command(flatten)]
    search: SearchArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Random seed; leave out for a different board every run
    #[arg(long, global = true, env = "SPANGRAM_SEED")]
    seed: Option<u64>,

    /// Attempts before giving up
    #[arg(long, global = true, env = "SPANGRAM_ATTEMPTS", default_value_t = 5)]
    attempts: usize,

    /// Path extensions allowed per attempt, 0 for no limit
    #[arg(long, global = true, env = "SPANGRAM_STEP_LIMIT", default_value_t = 2_000_000)]
    step_limit: u64,

    /// How worms are placed: exhaustive or isolated
    #[arg(long, global = true, env = "SPANGRAM_POLICY", default_value_t = PlacementPolicy::Exhaustive)]
    policy: PlacementPolicy,
}

impl SearchArgs {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_policy(self.policy)
            .with_seed(self.seed)
            .with_max_attempts(self.attempts)
            .with_step_limit(Some(self.step_limit).filter(|limit| *limit > 0))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a board into worms of the given lengths and print their numbers
    Partition {
        #[arg(required = true)]
        lengths: Vec<usize>,
    },
    /// Write a special word and the remaining words onto one board
    Board {
        special_word: String,

        #[arg(required = true)]
        words: Vec<String>,

        /// Print the board and placements as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let generator = BoardGenerator::new(cli.search.config());

    match cli.command {
        Command::Partition { lengths } => partition(&generator, &lengths),
        Command::Board { special_word, words, json } => board(&generator, &special_word, &words, json),
    }
}

fn partition(generator: &BoardGenerator, lengths: &[usize]) -> Result<()> {
    info!("partitioning {} worms with {:?}", lengths.len(), generator.config());
    let (grid, partition) = generator.generate_board_with_lengths(lengths).map_err(explain)?;

    let shape = grid.shape();
    println!("Partitioned {}x{} board into {} worms.", shape.rows(), shape.cols(), lengths.len());
    for row in partition.labels().rows() {
        println!("{}", row.iter().map(|label| format!("{label:02}")).collect::<Vec<_>>().join(" "));
    }
    for (index, path) in partition.paths().iter().enumerate() {
        println!("worm {:02} (length {}): {:?}", index + 1, path.len(), path.cells());
    }

    Ok(())
}

fn board(generator: &BoardGenerator, special_word: &str, words: &[String], json: bool) -> Result<()> {
    info!("laying out {special_word} and {} more words with {:?}", words.len(), generator.config());
    let themed = generator.generate_themed_board(special_word, words).map_err(explain)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&themed).context("could not serialize board")?);
        return Ok(());
    }

    print!("{}", themed.board);
    println!();
    let special = &themed.placements.special_word;
    println!("{} (special): {:?}", special.word, special.path.cells());
    for placement in &themed.placements.words {
        println!("{}: {:?}", placement.word, placement.path.cells());
    }

    Ok(())
}

fn explain(failure: PlacementError) -> anyhow::Error {
    match failure {
        PlacementError::UnsupportedSize { total } => match GridShape::smallest_fitting(total) {
            Some(shape) => anyhow!(
                "{failure}; the nearest supported board is {}x{} ({} cells)",
                shape.rows(),
                shape.cols(),
                shape.cell_count()
            ),
            None => anyhow!("{failure}; the largest supported board has 100 cells"),
        },
        _ => anyhow::Error::new(failure),
    }
}
