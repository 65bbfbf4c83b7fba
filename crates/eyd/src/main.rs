mod cli;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use console::style;
use eyd_lib::{
    mounts_under, quarantine_timestamp, system_mounts, Archiver, Config, PrunePlan,
};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let keep = cli::parse_keep_args(&cli.keep).context("Failed to decode keep paths")?;

    let mut config = Config::new(cli.root, cli.quarantine_base, cli.follow_symlinks);
    config.validate()?;

    let mounts = system_mounts()?;
    let mounts = mounts_under(&config.root, &mounts);
    let timestamp = quarantine_timestamp(Utc::now());

    let plan = PrunePlan::build(
        &config.root,
        &keep,
        &mounts,
        &config.quarantine_base,
        &timestamp,
    )
    .context("Failed to resolve keep paths")?;

    log::info!("Pruning {} into {}", plan.root().display(), plan.quarantine().display());

    let archiver = Archiver::from_plan(plan, config.walk.clone());
    archiver
        .run(|entry| {
            println!(
                "{} {} {} {}",
                style("moving").cyan(),
                entry.source.display(),
                style("to").dim(),
                entry.destination.display()
            );
        })
        .context("Pruning aborted; entries already moved remain in the quarantine")?;

    Ok(())
}
