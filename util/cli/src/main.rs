//! qROM resource estimation CLI.

mod cli;
mod sweep;

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, bail};
use mimalloc::MiMalloc;
use qrom_estimate::{Resources, estimate};
use qrom_pla::{read_exorcised, write_qrom_pla_file};

use cli::{Cli, Command, EncodeCommand, EstimateCommand, GuessCommand};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse_args();

    match args.command {
        Command::Encode(encode_args) => run_encode(encode_args),
        Command::Estimate(estimate_args) => run_estimate(estimate_args),
        Command::Guess(guess_args) => run_guess(guess_args),
        Command::Sweep(sweep_args) => sweep::run_sweep(sweep_args),
    }
}

fn run_encode(args: EncodeCommand) -> anyhow::Result<()> {
    if args.bits == 0 {
        bail!("--bits must be at least 1");
    }

    let addresses = match args.random {
        Some(count) => {
            if args.bits > 33 {
                bail!("--random supports at most 33 address bits");
            }
            let universe = 1u64 << args.bits;
            if count > universe {
                bail!("cannot draw {count} distinct addresses from {universe}");
            }
            sweep::draw_addresses(args.bits, count, args.seed)
        }
        None => args.addresses,
    };

    write_qrom_pla_file(&args.output, args.bits, &addresses)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} ({} address bits, {} ones)",
        args.output.display(),
        args.bits,
        addresses.len()
    );
    Ok(())
}

fn run_estimate(args: EstimateCommand) -> anyhow::Result<()> {
    let tally = read_exorcised(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let resources = estimate(&tally)?;

    println!("Gate list: {}", args.file.display());
    println!(
        "Gates: {} across {} control-count classes",
        tally.total_gates(),
        tally.iter().count()
    );
    for (controls, occurrences) in tally.iter() {
        println!("  {controls} controls: {occurrences}");
    }
    println!();
    println!("{resources}");
    Ok(())
}

fn run_guess(args: GuessCommand) -> anyhow::Result<()> {
    if args.n_min < 4 {
        bail!("--n-min must be at least 4; the cost formulas need 4+ controls");
    }
    if args.n_min > args.n_max {
        bail!("--n-min must not exceed --n-max");
    }

    let mut writer = BufWriter::new(
        File::create(&args.output)
            .with_context(|| format!("creating {}", args.output.display()))?,
    );
    writeln!(writer, "n,q,{}", Resources::CSV_FIELDS)?;

    // Worst case before minimization: one n-controlled gate per stored 1,
    // with q = n - 1 address bits' worth of ones.
    for n in args.n_min..=args.n_max {
        let q = n - 1;
        let ones = 1u64 << q;
        let row = Resources {
            width: 2 * n as u64,
            depth: ones * qrom_mpmct::depth(n),
            t_count: ones * qrom_mpmct::t_count(n),
            t_depth: ones * qrom_mpmct::t_depth(n),
            h_count: ones * qrom_mpmct::h_count(n),
            cnot_count: ones * qrom_mpmct::cnot_count(n),
        };
        writeln!(writer, "{n},{q},{}", row.csv_row())?;
    }
    writer.flush()?;

    println!(
        "Wrote baseline table for n in [{}, {}] to {}",
        args.n_min,
        args.n_max,
        args.output.display()
    );
    Ok(())
}
