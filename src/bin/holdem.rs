//! Hand classification and equity histogram CLI.
//!
//! Classifies hands, compares two hands, or prints the category
//! histogram of a starting hand over every (or a sample of) board.

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use holdem::cards::Card;
use holdem::cards::Evaluator;
use holdem::cards::Strength;
use holdem::equity::Equity;
use holdem::equity::Mode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    query: Query,
    /// Worker threads for histogram computation (defaults to one per core)
    #[arg(long, global = true)]
    threads: Option<usize>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Also write DEBUG logs to this file
    #[arg(long, global = true)]
    log_file: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Query {
    #[command(
        about = "Category histogram of a starting hand over all boards",
        alias = "hist"
    )]
    Histogram {
        /// Two hole cards, e.g. "AsKd"
        #[arg(long, required = true)]
        hole: String,
        /// Known board cards, at most five
        #[arg(long, default_value = "")]
        board: String,
        /// Sample this many boards instead of enumerating them all
        #[arg(long, num_args = 0..=1)]
        monte_carlo: Option<Option<usize>>,
        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Classify 5 to 7 cards into their best hand", alias = "eval")]
    Classify {
        #[arg(required = true)]
        cards: String,
    },
    #[command(about = "Compare the best hands of two card sets", alias = "cmp")]
    Compare {
        #[arg(required = true)]
        hand1: String,
        #[arg(required = true)]
        hand2: String,
    },
}

fn classify(cards: &str) -> anyhow::Result<Strength> {
    let cards = Card::parse(cards).with_context(|| format!("parsing {:?}", cards))?;
    Ok(Evaluator::classify(&cards)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    holdem::log(level, cli.log_file.as_deref()).context("initialize logger")?;
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configure thread pool")?;
    }
    match cli.query {
        Query::Histogram {
            hole,
            board,
            monte_carlo,
            seed,
        } => {
            let hole = Card::parse(&hole).with_context(|| format!("parsing hole {:?}", hole))?;
            let board = Card::parse(&board).with_context(|| format!("parsing board {:?}", board))?;
            let mut equity = Equity::deal(&hole, &board)?;
            if let Some(seed) = seed {
                equity = equity.seeded(seed);
            }
            let mode = match monte_carlo {
                Some(n) => Mode::Sampled(n.unwrap_or(holdem::DEFAULT_SAMPLES)),
                None => Mode::Exhaustive,
            };
            let histogram = equity.histogram(mode)?;
            match cli.json {
                true => println!("{}", serde_json::to_string_pretty(&histogram.distribution())?),
                false => print!("{}", histogram),
            }
        }
        Query::Classify { cards } => {
            let strength = classify(&cards)?;
            match cli.json {
                true => println!("{}", serde_json::to_string_pretty(&strength.ranking())?),
                false => println!("{}", strength),
            }
        }
        Query::Compare { hand1, hand2 } => {
            let a = classify(&hand1)?;
            let b = classify(&hand2)?;
            log::debug!("{}", a);
            log::debug!("{}", b);
            println!("{}", a.versus(&b));
        }
    }
    Ok(())
}
