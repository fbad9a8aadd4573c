//! Random qROM sweep across address-bit counts.
//!
//! Every (n, trial) estimation is independent, so trials run on a rayon
//! pool and only the final CSV write is serialized, in deterministic
//! (n, trial) order.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, bail};
use indicatif::ProgressBar;
use qrom_estimate::{AbcExorcism, EstimateError, Resources, estimate_qrom};
use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::cli::SweepCommand;

/// Draw `count` distinct addresses from `[0, 2^bits)`, sorted ascending.
///
/// Sorting keeps the encoded PLA reproducible for a given seed regardless
/// of the sampler's internal order.
pub fn draw_addresses(bits: u32, count: u64, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut addresses: Vec<u64> = index::sample(&mut rng, 1usize << bits, count as usize)
        .into_iter()
        .map(|i| i as u64)
        .collect();
    addresses.sort_unstable();
    addresses
}

pub fn run_sweep(args: SweepCommand) -> anyhow::Result<()> {
    if args.n_min == 0 {
        bail!("--n-min must be at least 1");
    }
    if args.n_min > args.n_max {
        bail!("--n-min must not exceed --n-max");
    }
    if args.n_max > 33 {
        bail!("--n-max above 33 is not supported; the address draw is in-memory");
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("configuring worker pool")?;
    }

    let tasks: Vec<(u32, u64)> = (args.n_min..=args.n_max)
        .flat_map(|n| (0..args.trials).map(move |trial| (n, trial)))
        .collect();

    println!(
        "Sweeping n in [{}, {}], {} trials each, minimizer {}",
        args.n_min,
        args.n_max,
        args.trials,
        args.abc.display()
    );
    let progress = ProgressBar::new(tasks.len() as u64);

    let minimizer = AbcExorcism::new(&args.abc);
    let results: Vec<(u32, u32, Result<Resources, EstimateError>)> = tasks
        .par_iter()
        .map(|&(n, trial)| {
            let q = n - 1;
            let result = run_trial(n, q, trial, args.seed, &minimizer);
            progress.inc(1);
            (n, q, result)
        })
        .collect();
    progress.finish();

    let mut writer = BufWriter::new(
        File::create(&args.output)
            .with_context(|| format!("creating {}", args.output.display()))?,
    );
    writeln!(writer, "n,q,{}", Resources::CSV_FIELDS)?;

    let mut failures = 0u64;
    for (n, q, result) in results {
        match result {
            Ok(resources) => writeln!(writer, "{n},{q},{}", resources.csv_row())?,
            Err(e) => {
                // Keep the row so a failed trial is visible in the table.
                failures += 1;
                eprintln!("n={n} trial failed: {e}");
                writeln!(writer, "{n},{q},FAILED,,,,,")?;
            }
        }
    }
    writer.flush()?;

    println!(
        "Wrote {} rows to {} ({failures} failures)",
        tasks.len(),
        args.output.display()
    );
    if failures > 0 {
        bail!("{failures} of {} trials failed", tasks.len());
    }
    Ok(())
}

fn run_trial(
    n: u32,
    q: u32,
    trial: u64,
    seed: u64,
    minimizer: &AbcExorcism,
) -> Result<Resources, EstimateError> {
    // Per-trial seed derivation keeps trials independent and repeatable.
    let trial_seed = seed ^ ((n as u64) << 32) ^ trial;
    let addresses = draw_addresses(n, 1u64 << q, trial_seed);

    let workdir = tempfile::tempdir()?;
    estimate_qrom(n, &addresses, minimizer, workdir.path())
}
