use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// qROM Resource Estimator - Clifford+T costs of minimized lookup circuits
#[derive(Parser, Debug)]
#[command(name = "qrom")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a qROM truth table as a PLA/ESOP file for the minimizer
    Encode(EncodeCommand),
    /// Estimate resources from an already-minimized gate list
    Estimate(EstimateCommand),
    /// Write the closed-form worst-case baseline table (no minimizer)
    Guess(GuessCommand),
    /// Sweep random qROM instances through the minimizer into a CSV table
    Sweep(SweepCommand),
}

#[derive(Parser, Debug)]
pub struct EncodeCommand {
    /// Number of address bits
    #[arg(short = 'n', long = "bits", value_name = "BITS")]
    pub bits: u32,

    /// Output PLA file path
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Addresses holding a 1, written in the given order
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<u64>,

    /// Draw this many distinct random addresses instead of listing them
    #[arg(
        short = 'r',
        long = "random",
        value_name = "COUNT",
        conflicts_with = "addresses"
    )]
    pub random: Option<u64>,

    /// RNG seed for --random
    #[arg(short, long, default_value_t = 0, value_name = "SEED")]
    pub seed: u64,
}

#[derive(Parser, Debug)]
pub struct EstimateCommand {
    /// Minimizer output file (.exorcised gate list)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct GuessCommand {
    /// Smallest address-bit count (must be at least 4)
    #[arg(long = "n-min", default_value_t = 5, value_name = "BITS")]
    pub n_min: u32,

    /// Largest address-bit count
    #[arg(long = "n-max", default_value_t = 33, value_name = "BITS")]
    pub n_max: u32,

    /// Output CSV file path
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct SweepCommand {
    /// Smallest address-bit count
    #[arg(long = "n-min", default_value_t = 5, value_name = "BITS")]
    pub n_min: u32,

    /// Largest address-bit count
    #[arg(long = "n-max", default_value_t = 12, value_name = "BITS")]
    pub n_max: u32,

    /// Random qROM instances per address-bit count
    #[arg(
        short,
        long,
        default_value_t = 100,
        value_name = "COUNT",
        help = "Number of random qROM instances per n"
    )]
    pub trials: u64,

    /// Path to the ABC binary (EXORCISM-4 minimizer)
    #[arg(long, default_value = "abc", value_name = "PATH")]
    pub abc: PathBuf,

    /// Output CSV file path
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// RNG seed; each (n, trial) draws a stream derived from it
    #[arg(short, long, default_value_t = 0, value_name = "SEED")]
    pub seed: u64,

    /// Worker threads (default: all cores)
    #[arg(short, long, value_name = "THREADS")]
    pub jobs: Option<usize>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
