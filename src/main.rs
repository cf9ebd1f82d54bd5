use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use holorange::{HasherKind, Monotonic, MonotonicConfig, SamplerKind, StrategyKind};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Largest domain the ladder and histogram views will enumerate.
const MAX_ENUMERATED: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "holorange", about = "Seeded monotonic surjective functions over huge domains")]
struct Cli {
    /// Log construction and split decisions (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every value, then each value's preimage as a ladder.
    Basics(FunctionArgs),
    /// Print a histogram of preimage sizes.
    Distribution(FunctionArgs),
    /// Evaluate single points on arbitrarily large functions.
    Query {
        #[command(flatten)]
        function: FunctionArgs,
        /// Index to map forward.
        #[arg(long)]
        index: Option<BigUint>,
        /// Value to map back to its indices.
        #[arg(long)]
        value: Option<BigUint>,
    },
}

#[derive(Args, Debug)]
struct FunctionArgs {
    /// Domain length.
    #[arg(long)]
    size: BigUint,
    /// Image length.
    #[arg(long)]
    image_size: BigUint,
    /// Root seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Implementation: surjective, fast or linear.
    #[arg(long, default_value_t = StrategyKind::Surjective)]
    strategy: StrategyKind,
    /// Sampler backend: binomial, normal or fast.
    #[arg(long, default_value_t = SamplerKind::Binomial)]
    sampler: SamplerKind,
    /// Hasher: keyed or fast.
    #[arg(long, default_value_t = HasherKind::Keyed)]
    hasher: HasherKind,
    /// Memoized recursion levels.
    #[arg(long, default_value_t = 10)]
    cache_depth: usize,
    /// Flexible ranges longer than this are halved instead of sampled.
    #[arg(long, default_value = "1000")]
    sampler_max_length: BigUint,
}

impl FunctionArgs {
    fn build(&self) -> Result<Box<dyn Monotonic>> {
        if !self.strategy.is_seeded()
            && (self.seed != 0
                || self.sampler != SamplerKind::default()
                || self.hasher != HasherKind::default())
        {
            warn!(
                strategy = %self.strategy,
                "--seed, --sampler and --hasher have no effect on this strategy"
            );
        }
        let config = MonotonicConfig::new(self.size.clone(), self.image_size.clone())
            .with_seed(self.seed)
            .with_strategy(self.strategy)
            .with_sampler(self.sampler)
            .with_hasher(self.hasher)
            .with_cache_depth(self.cache_depth)
            .with_sampler_max_length(self.sampler_max_length.clone());
        info!(?config, "building monotonic");
        config.build().context("invalid monotonic configuration")
    }

    fn enumerable_size(&self) -> Result<u64> {
        match self.size.to_u64() {
            Some(size) if size <= MAX_ENUMERATED => Ok(size),
            _ => bail!(
                "size {} too large to enumerate (max {}); use `query` instead",
                self.size,
                MAX_ENUMERATED
            ),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Basics(args) => run_basics(&args)?,
        Commands::Distribution(args) => run_distribution(&args)?,
        Commands::Query {
            function,
            index,
            value,
        } => run_query(&function, index, value)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_basics(args: &FunctionArgs) -> Result<()> {
    let size = args.enumerable_size()?;
    let monotonic = args.build()?;
    let width = (monotonic.image_size() - 1u32).to_string().len() + 1;

    let mut row = String::new();
    for i in 0..size {
        let value = monotonic
            .at(&BigUint::from(i))
            .with_context(|| format!("at({i}) failed"))?;
        row.push_str(&format!("{value:>width$}"));
    }
    println!("{row}");

    let mut value = BigUint::default();
    while &value < monotonic.image_size() {
        let range = monotonic
            .indices_of(&value)
            .with_context(|| format!("indices_of({value}) failed"))?;
        let from = range.from().to_usize().unwrap_or(0);
        let len = range.size().to_usize().unwrap_or(0);
        let cell = format!("{value:>width$}");
        println!("{}{}", " ".repeat(from * width), cell.repeat(len));
        value += 1u32;
    }

    Ok(())
}

fn run_distribution(args: &FunctionArgs) -> Result<()> {
    args.enumerable_size()?;
    let monotonic = args.build()?;

    let mut histogram: BTreeMap<BigUint, u64> = BTreeMap::new();
    let mut value = BigUint::default();
    while &value < monotonic.image_size() {
        let group = monotonic
            .indices_of(&value)
            .with_context(|| format!("indices_of({value}) failed"))?
            .size();
        *histogram.entry(group).or_default() += 1;
        value += 1u32;
    }

    let peak = histogram.values().copied().max().unwrap_or(1).max(1);
    println!("group size\tcount");
    for (group, count) in &histogram {
        let bar = "#".repeat(((count * 60) / peak).max(1) as usize);
        println!("{group}\t{count}\t{bar}");
    }

    Ok(())
}

fn run_query(args: &FunctionArgs, index: Option<BigUint>, value: Option<BigUint>) -> Result<()> {
    if index.is_none() && value.is_none() {
        bail!("pass --index and/or --value");
    }
    let monotonic = args.build()?;

    if let Some(index) = index {
        let mapped = monotonic
            .at(&index)
            .with_context(|| format!("at({index}) failed"))?;
        println!("at({index}) = {mapped}");
    }
    if let Some(value) = value {
        let range = monotonic
            .indices_of(&value)
            .with_context(|| format!("indices_of({value}) failed"))?;
        println!("indices_of({value}) = {range}\tcount={}", range.size());
    }

    Ok(())
}
