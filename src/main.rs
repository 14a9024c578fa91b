//! Command-line explorer for locale number formats
//!
//! Without arguments it lists every known locale that passes or fails the numeric
//! self-test. With locale arguments it prints a report for each of them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use locale_tools::{
    FR_FR, JA_JP, LocaleId, LocaleProbe, LocaleTable, PT_BR, ProbeReport, TableFormatter,
};

/// Inspect how locales format numbers and currency amounts
#[derive(Debug, Parser)]
#[command(name = "locale-tools", version, about)]
struct Cli {
    /// Locales to report on (e.g. pt_BR, en-US); all known locales when omitted
    #[arg(value_name = "LOCALE")]
    locales: Vec<LocaleId>,

    /// Extra locale table (TOML) merged over the built-in one
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut table = LocaleTable::builtin().clone();
    if let Some(path) = &cli.data {
        let overlay = LocaleTable::load(path)
            .with_context(|| format!("Failed to load locale data from {}", path.display()))?;
        table.merge(overlay);
    }
    let probe = LocaleProbe::new(TableFormatter::new(&table));

    if cli.locales.is_empty() {
        run_survey(&probe, &table)
    } else {
        for locale in &cli.locales {
            let report = probe
                .report(locale)
                .with_context(|| format!("Failed to probe {locale}"))?;
            print_report(&report);
        }
        Ok(())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_survey(probe: &LocaleProbe<TableFormatter<'_>>, table: &LocaleTable) -> Result<()> {
    println!("{}", probe.separator(&JA_JP)?);
    println!("{}", probe.decimal_point(&FR_FR)?);

    let reports = probe.survey(&table.available_locales());
    for report in reports.iter().filter(|r| r.numeric_test) {
        println!("{} : {}", report.locale, report.sample);
    }
    println!("-------------------------------------------");
    for report in reports.iter().filter(|r| !r.numeric_test) {
        println!("{} : {}", report.locale, report.sample);
    }

    let dzongkha: LocaleId = "dz".parse()?;
    for locale in [&PT_BR, &JA_JP, &dzongkha] {
        println!("{}", probe.cent_digits(locale)?);
    }
    Ok(())
}

fn print_report(report: &ProbeReport) {
    println!(
        "{:<10} sample={:?} decimal={:?} separator={:?} numeric_test={} cent_digits={} has_cents={}",
        report.locale.to_string(),
        report.sample,
        report.decimal_point,
        report.separator,
        report.numeric_test,
        report.cent_digits,
        report.has_cents,
    );
}
