//! Runs the search engines on a start board and prints the outcome.

use clap::{Parser, ValueEnum};
use eight_puzzle_search::ga::{GaConfig, GaRunner};
use eight_puzzle_search::puzzle::{manhattan_distance, Board};
use eight_puzzle_search::sa::{SaConfig, SaRunner};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Engine {
    Genetic,
    Annealing,
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "eight-puzzle", about = "Genetic and simulated-annealing search for the 8-puzzle")]
struct Cli {
    /// Engine to run.
    #[arg(value_enum, default_value_t = Engine::Both)]
    engine: Engine,

    /// Start board as nine comma-separated labels, row-major, 0 for the blank.
    /// Defaults to each engine's stock example.
    #[arg(long, value_delimiter = ',')]
    start: Option<Vec<u8>>,

    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print every generation's best board for the genetic engine.
    #[arg(long)]
    show_trace: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let custom = cli
        .start
        .as_deref()
        .map(Board::try_from)
        .transpose()?;

    if matches!(cli.engine, Engine::Genetic | Engine::Both) {
        let start = match custom {
            Some(board) => board,
            None => Board::new([1, 2, 3, 0, 5, 6, 4, 7, 8])?,
        };
        let mut config = GaConfig::default();
        config.seed = cli.seed;
        let result = GaRunner::run(&start, &config)?;

        println!("Genetic algorithm");
        println!("Initial configuration:\n{start}\n");
        if cli.show_trace {
            for (step, board) in result.trace.iter().enumerate() {
                println!("Step {step}:\n{board}\n");
            }
        }
        println!(
            "Final configuration after {} generations (fitness {}):\n{}\n",
            result.generations, result.best_fitness, result.best
        );
        report(result.solved);
    }

    if matches!(cli.engine, Engine::Annealing | Engine::Both) {
        let start = match custom {
            Some(board) => board,
            None => Board::from_rows([[1, 2, 3], [4, 5, 6], [0, 7, 8]])?,
        };
        let mut config = SaConfig::default();
        config.seed = cli.seed;
        let result = SaRunner::run(&start, &config)?;

        println!("Simulated annealing");
        println!(
            "Initial configuration (cost {}):\n{start}\n",
            manhattan_distance(&start)
        );
        println!(
            "Final configuration after {} iterations (cost {}):\n{}\n",
            result.iterations, result.best_cost, result.best
        );
        report(result.solved);
    }

    Ok(())
}

fn report(solved: bool) {
    if solved {
        println!("Final target state successfully reached!\n");
    } else {
        println!("Current state is not the target state.\n");
    }
}
