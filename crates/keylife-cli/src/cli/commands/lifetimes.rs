//! `keylife lifetimes` - Merge DNSKEY observations into lifetime intervals.

use anyhow::{Context as _, Result};
use colored::Colorize;
use keylife_core::{LifetimeBuilder, LifetimeInterval, LifetimeSummary, RawObservation};
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::LifetimesArgs;
use crate::education::Explain;
use crate::input;
use crate::output::{self, OutputFormat, Report};

#[derive(Tabled)]
struct IntervalRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Duration")]
    duration: String,
}

pub fn execute(ctx: Context, args: LifetimesArgs) -> Result<()> {
    if ctx.explain {
        Explain::lifetimes().print();
    }

    let observations: Vec<RawObservation> = input::read_records(&args.input, args.input_format)?;
    let intervals = LifetimeBuilder::build_raw(observations)
        .with_context(|| format!("cannot build key lifetimes from {}", args.input))?;
    let summary = args
        .summary
        .then(|| LifetimeSummary::from_intervals(&intervals));

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => match summary {
            Some(summary) => output::print_structured(
                ctx.output_format,
                &Report {
                    results: &intervals,
                    summary,
                },
            )?,
            None => output::print_structured(ctx.output_format, &intervals)?,
        },
        OutputFormat::Csv => {
            output::write_csv(std::io::stdout().lock(), &intervals)?;
        }
        OutputFormat::Pretty => {
            print_pretty(&ctx, &intervals, summary.as_ref());
        }
    }

    Ok(())
}

fn print_pretty(ctx: &Context, intervals: &[LifetimeInterval], summary: Option<&LifetimeSummary>) {
    let fmt = ctx.timestamp_format.as_str();

    println!(
        "{} {}",
        "Key Lifetimes:".bold(),
        intervals.len().to_string().cyan()
    );

    if intervals.is_empty() {
        println!("{}", "No observations.".dimmed());
        return;
    }

    let rows: Vec<IntervalRow> = intervals
        .iter()
        .map(|interval| IntervalRow {
            key: interval.key.clone(),
            start: output::format_timestamp(&interval.start_time, fmt),
            end: output::format_timestamp(&interval.end_time, fmt),
            duration: output::format_duration(interval.duration()),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");

    if let Some(summary) = summary {
        println!();
        println!("{}", "Summary:".bold().underline());
        println!("  {} {}", "Intervals:".bold(), summary.intervals);
        println!("  {} {}", "Distinct keys:".bold(), summary.distinct_keys);
        if let (Some(earliest), Some(latest)) = (summary.earliest, summary.latest) {
            println!(
                "  {} {} .. {}",
                "Observed span:".bold(),
                output::format_timestamp(&earliest, fmt),
                output::format_timestamp(&latest, fmt)
            );
        }
        if summary.reappearing_keys.is_empty() {
            println!("  {} none", "Re-published keys:".bold());
        } else {
            println!(
                "  {} {}",
                "Re-published keys:".bold(),
                summary.reappearing_keys.join(", ").yellow()
            );
        }
    } else if ctx.show_tips {
        println!();
        println!(
            "{}",
            "Tip: Add --summary to spot keys that were re-published after retirement".dimmed()
        );
    }

    if ctx.verbose {
        println!();
        println!("{}", "Sessions per key:".bold().underline());
        for (key, sessions) in LifetimeBuilder::sessions_by_key(intervals) {
            println!("  {} {} session(s)", key.cyan(), sessions.len());
        }
    }
}
