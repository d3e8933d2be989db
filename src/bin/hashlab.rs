//! HashLab CLI
//!
//! Interactive workbench and one-shot hash evaluation.

use std::io;

use clap::{Parser, Subcommand, ValueEnum};
use hashlab::hashing::{HashMethod, HashSuite};
use hashlab::{shell, Config, StrategyKind, Workbench};
use tracing_subscriber::{fmt, EnvFilter};

/// HashLab
#[derive(Parser, Debug)]
#[command(name = "hashlab")]
#[command(about = "Hash tables, probing strategies and hash functions")]
#[command(version)]
struct Args {
    /// Slots per table
    #[arg(short, long, default_value = "10")]
    capacity: usize,

    /// Prime P for the double hashing step P - (key mod P)
    #[arg(short, long, default_value = "7")]
    prime: u64,

    /// Seed for the universal hash (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive shell
    Shell {
        /// Table active at startup
        #[arg(long, value_enum, default_value = "linear")]
        strategy: StrategyArg,
    },

    /// Hash a key with one method (or all of them)
    Hash {
        /// Key to hash
        #[arg(allow_negative_numbers = true)]
        key: i64,

        /// Method to use; all methods when omitted
        #[arg(short, long, value_enum)]
        method: Option<MethodArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Linear,
    Quadratic,
    Double,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Linear => StrategyKind::Linear,
            StrategyArg::Quadratic => StrategyKind::Quadratic,
            StrategyArg::Double => StrategyKind::DoubleHash,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MethodArg {
    Division,
    MidSquare,
    Folding,
    Multiplication,
    Universal,
}

impl From<MethodArg> for HashMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Division => HashMethod::Division,
            MethodArg::MidSquare => HashMethod::MidSquare,
            MethodArg::Folding => HashMethod::Folding,
            MethodArg::Multiplication => HashMethod::Multiplication,
            MethodArg::Universal => HashMethod::Universal,
        }
    }
}

fn main() {
    // Initialize tracing/logging on stderr so shell output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,hashlab=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder()
        .capacity(args.capacity)
        .double_hash_prime(args.prime);
    if let Some(seed) = args.seed {
        builder = builder.universal_seed(seed);
    }
    if let Commands::Shell { strategy } = &args.command {
        builder = builder.default_strategy((*strategy).into());
    }

    let config = match builder.build() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    match args.command {
        Commands::Shell { .. } => {
            tracing::info!("HashLab v{}", hashlab::VERSION);

            let mut workbench = match Workbench::new(&config) {
                Ok(w) => w,
                Err(e) => {
                    tracing::error!("Failed to build workbench: {}", e);
                    std::process::exit(1);
                }
            };

            let stdin = io::stdin();
            if let Err(e) = shell::run(&mut workbench, stdin.lock(), io::stdout()) {
                tracing::error!("Shell error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Hash { key, method } => {
            let suite = match HashSuite::from_config(&config) {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!("Failed to build hash functions: {}", e);
                    std::process::exit(1);
                }
            };
            let methods: Vec<HashMethod> = match method {
                Some(m) => vec![m.into()],
                None => HashMethod::ALL.to_vec(),
            };

            for m in methods {
                println!("{:<15} {}", m.to_string(), suite.index(m, key, config.capacity));
            }
        }
    }
}
