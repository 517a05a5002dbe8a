//! pagerank
//!
//! Ranks the pages of an HTML corpus by sampling and by iteration.

use anyhow::{Context, Result};
use clap::Parser;
use corpus_pagerank::{
    page_rank::{iterated, sampled, PageRank, PageRankResult, DEFAULT_DAMPING},
    uniform, Corpus,
};
use rand::{rngs::SmallRng, SeedableRng};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagerank")]
#[command(author, version, about = "Rank the pages of an HTML corpus with PageRank")]
struct Cli {
    /// Directory holding the `.html` pages
    corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(long, default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// Length of the sampled walk
    #[arg(long, default_value_t = sampled::DEFAULT_SAMPLES)]
    samples: usize,

    /// Iteration stops once no page moves by more than this
    #[arg(long, default_value_t = iterated::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Give up iterating after this many steps (0 = never)
    #[arg(long, default_value_t = iterated::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Seed for the sampler, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let corpus = Corpus::crawl(&cli.corpus)
        .with_context(|| format!("failed to read corpus {}", cli.corpus.display()))?;
    let start = uniform(corpus.graph());

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let config = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let ranks = sampled::SampledPageRank::new(corpus.graph(), &config, rng)
        .and_then(|pr| pr.calc(&start))
        .context("sampling failed")?;
    println!("PageRank Results from Sampling (n = {})", ranks.samples);
    print!("{}", ranks.report(&corpus));
    println!("Sampling PageRank Sum: {:.4}", ranks.sum());

    let config = iterated::Config {
        damping: cli.damping,
        threshold: cli.threshold,
        max_iterations: Some(cli.max_iterations).filter(|cap| *cap > 0),
    };
    let ranks = iterated::IteratedPageRank::new(corpus.graph(), &config)
        .and_then(|pr| pr.calc(&start))
        .context("iteration failed")?;
    println!("PageRank Results from Iteration");
    print!("{}", ranks.report(&corpus));
    println!("Iteration PageRank Sum: {:.4}", ranks.sum());

    Ok(())
}
