//! `keylife classify` - Label key transitions by overlap pattern.

use anyhow::{Context as _, Result};
use colored::{ColoredString, Colorize};
use keylife_core::{
    Classification, ClassificationResult, ClassificationSummary, RawTransitionRecord,
    TransitionClassifier,
};
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::ClassifyArgs;
use crate::education::Explain;
use crate::input;
use crate::output::{self, OutputFormat, Report};

#[derive(Tabled)]
struct ClassificationRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Classification")]
    classification: String,
}

pub fn execute(ctx: Context, args: ClassifyArgs) -> Result<()> {
    if ctx.explain {
        Explain::classify().print();
    }

    let records: Vec<RawTransitionRecord> = input::read_records(&args.input, args.input_format)?;
    let results = TransitionClassifier::classify_raw(records)
        .with_context(|| format!("cannot classify transitions in {}", args.input))?;
    let summary = args
        .summary
        .then(|| ClassificationSummary::from_results(&results));

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => match summary {
            Some(summary) => output::print_structured(
                ctx.output_format,
                &Report {
                    results: &results,
                    summary,
                },
            )?,
            None => output::print_structured(ctx.output_format, &results)?,
        },
        OutputFormat::Csv => {
            output::write_csv(std::io::stdout().lock(), &results)?;
        }
        OutputFormat::Pretty => {
            print_pretty(&ctx, &results, summary.as_ref());
        }
    }

    Ok(())
}

fn paint(classification: Classification) -> ColoredString {
    let label = classification.as_str();
    match classification {
        Classification::MultiSignature => label.green(),
        Classification::CoPresent => label.cyan(),
        Classification::Cutover => label.yellow(),
        Classification::Unknown => label.dimmed(),
    }
}

fn print_pretty(
    ctx: &Context,
    results: &[ClassificationResult],
    summary: Option<&ClassificationSummary>,
) {
    println!(
        "{} {}",
        "Key Transitions:".bold(),
        results.len().to_string().cyan()
    );

    if results.is_empty() {
        println!("{}", "No transition records.".dimmed());
        return;
    }

    let rows: Vec<ClassificationRow> = results
        .iter()
        .enumerate()
        .map(|(index, result)| ClassificationRow {
            index,
            key: result.key.clone(),
            classification: paint(result.classification).to_string(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");

    if let Some(summary) = summary {
        println!();
        println!("{}", "Summary:".bold().underline());
        for class in Classification::ALL {
            println!("  {:<16} {}", paint(class), summary.count(class));
        }
    } else if ctx.show_tips {
        println!();
        println!("{}", "Tip: Add --summary to count each classification".dimmed());
    }
}
