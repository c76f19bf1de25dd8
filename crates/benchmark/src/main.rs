//! U-CutStock benchmark runner CLI

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_cutstock_benchmark::{
    BenchmarkConfig, BenchmarkRunner, Dataset, DatasetParser, SyntheticGenerator,
};
use u_cutstock_core::{Config, KerfPolicy, Solver, Strategy};
use u_cutstock_d1::{describe_result, CutOptimizer};

#[derive(Parser)]
#[command(name = "cutstock-bench")]
#[command(about = "Cutting-stock optimizer and benchmark runner for U-CutStock")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in datasets
    List,

    /// Solve a single instance and print the cut plan
    Solve {
        /// Path to a JSON instance, or a built-in dataset name
        file: String,

        /// Packing strategy
        #[arg(short, long, value_enum, default_value = "ffd")]
        strategy: StrategyArg,

        /// How kerf is charged per bar
        #[arg(short, long, value_enum, default_value = "between")]
        kerf_policy: KerfPolicyArg,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every strategy on an instance and compare
    Compare {
        /// Path to a JSON instance, or a built-in dataset name
        file: String,

        /// Number of runs per configuration
        #[arg(short, long, default_value = "1")]
        runs: usize,

        /// Also run the every-cut kerf policy
        #[arg(long)]
        all_policies: bool,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Generate a synthetic instance
    Generate {
        /// Random seed (omit for a random instance)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of stock lengths
        #[arg(long, default_value = "2")]
        stock_types: usize,

        /// Number of cut requirements
        #[arg(long, default_value = "8")]
        cut_types: usize,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// First Fit Decreasing
    Ffd,
    /// Best Fit Decreasing
    Bfd,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Ffd => Strategy::FirstFitDecreasing,
            StrategyArg::Bfd => Strategy::BestFitDecreasing,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum KerfPolicyArg {
    /// One kerf between adjacent pieces (n - 1 per bar)
    Between,
    /// One kerf per piece (n per bar)
    Every,
}

impl From<KerfPolicyArg> for KerfPolicy {
    fn from(arg: KerfPolicyArg) -> Self {
        match arg {
            KerfPolicyArg::Between => KerfPolicy::BetweenCuts,
            KerfPolicyArg::Every => KerfPolicy::EveryCut,
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("Built-in datasets:");
            println!("==================");
            for name in Dataset::builtin_names() {
                if let Some(ds) = Dataset::builtin(name) {
                    let info = ds.info();
                    println!(
                        "  - {:<10} {} stock types, {} pieces  {}",
                        name,
                        info.stock_types,
                        info.total_pieces,
                        info.description.unwrap_or_default()
                    );
                }
            }
            println!("\nUse 'cutstock-bench solve <NAME|FILE>' to solve one");
        }

        Commands::Solve {
            file,
            strategy,
            kerf_policy,
            json,
        } => {
            let ds = DatasetParser::new().load(&file)?;
            let config = Config::new()
                .with_strategy(strategy.into())
                .with_kerf_policy(kerf_policy.into());

            let result = CutOptimizer::new(config).solve(&ds.input)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", describe_result(&result));
            }
        }

        Commands::Compare {
            file,
            runs,
            all_policies,
            output,
            csv,
        } => {
            let ds = DatasetParser::new().load(&file)?;

            let mut config = BenchmarkConfig::new().with_runs_per_config(runs);
            if all_policies {
                config = config.with_kerf_policies(vec![KerfPolicy::BetweenCuts, KerfPolicy::EveryCut]);
            }

            let results = BenchmarkRunner::new(config).run_dataset(&ds);
            if results.runs.is_empty() {
                anyhow::bail!("every run on '{}' failed", ds.name);
            }

            results.print_summary();

            println!("Strategy Comparison:");
            println!("{:-<60}", "");
            for summary in results.summary_by_strategy() {
                println!(
                    "  {:<6} runs={:<3} avg_bars={:.1} avg_waste={:.1}mm avg_time={:.3}ms",
                    summary.strategy,
                    summary.run_count,
                    summary.avg_bars,
                    summary.avg_waste,
                    summary.avg_time_ms
                );
            }

            if let Some(best) = results.best_run() {
                println!(
                    "\nBest: {} / {} with {} bars, {:.1}mm waste",
                    best.strategy, best.kerf_policy, best.bars_used, best.total_waste
                );
            }

            if let Some(path) = output {
                results.save_json(&path)?;
                println!("Results saved to: {}", path.display());
            }

            if let Some(path) = csv {
                results.save_csv(&path)?;
                println!("CSV saved to: {}", path.display());
            }
        }

        Commands::Generate {
            seed,
            stock_types,
            cut_types,
            output,
        } => {
            let mut generator = match seed {
                Some(seed) => SyntheticGenerator::with_seed(seed),
                None => SyntheticGenerator::new(),
            };
            let ds = generator.generate(stock_types, cut_types);
            let json = DatasetParser::new().to_json(&ds)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &json)?;
                    log::info!(
                        "Wrote {} ({} pieces over {} bars) to {}",
                        ds.name,
                        ds.input.total_cut_count(),
                        ds.input.total_stock_count(),
                        path.display()
                    );
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}
