//! Educational features: explanations of what each analysis computes.

use colored::Colorize;
use keylife_core::Classification;

/// Command explanation builder.
pub struct Explain {
    description: String,
    rules: Vec<(String, String)>,
    what_happens: Vec<String>,
    learn_more: Vec<String>,
}

impl Explain {
    fn new() -> Self {
        Self {
            description: String::new(),
            rules: Vec::new(),
            what_happens: Vec::new(),
            learn_more: Vec::new(),
        }
    }

    fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    fn rule(mut self, condition: &str, outcome: &str) -> Self {
        self.rules.push((condition.to_string(), outcome.to_string()));
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn rfc(mut self, number: u32) -> Self {
        self.learn_more
            .push(format!("https://www.rfc-editor.org/rfc/rfc{number}"));
        self
    }

    /// Print the explanation to stderr so structured stdout stays parseable.
    pub fn print(&self) {
        eprintln!();
        eprintln!("{}", "=== What This Does ===".bold().cyan());
        eprintln!("{}", self.description);
        eprintln!();

        if !self.rules.is_empty() {
            eprintln!("{}", "Rules (first match wins):".bold());
            for (i, (condition, outcome)) in self.rules.iter().enumerate() {
                eprintln!("  {}. {:<22} -> {}", i + 1, condition, outcome.yellow());
            }
            eprintln!();
        }

        if !self.what_happens.is_empty() {
            eprintln!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, step);
            }
            eprintln!();
        }

        for url in &self.learn_more {
            eprintln!("{} {}", "Learn more:".bold(), url.cyan().underline());
        }
        eprintln!();
    }

    /// Explanation for `keylife classify`.
    pub fn classify() -> Self {
        Classification::ALL
            .iter()
            .fold(
                Self::new().description(
                    "Labels each key transition by how the outgoing and incoming keys \
                     overlapped in the zone. Overlap evidence outranks the cutover flag.",
                ),
                |explain, class| explain.rule(class.rule(), class.as_str()),
            )
            .step("Read transition records (key, overlap_count, cutover)")
            .step("Reject any record with a missing key or negative overlap_count")
            .step("Apply the rules above to each record, keeping input order")
            .rfc(6781)
    }

    /// Explanation for `keylife lifetimes`.
    pub fn lifetimes() -> Self {
        Self::new()
            .description(
                "Rebuilds how long each DNSKEY stayed published by merging consecutive \
                 sightings of the same key into one interval.",
            )
            .step("Sort observations by timestamp (ties keep file order)")
            .step("Bridge: same key as the open interval extends its end time")
            .step("Bust: a different key closes the open interval")
            .step("Bind: that observation opens the next interval")
            .step("A key seen again after another key gets a new interval per session")
            .rfc(7583)
    }
}
