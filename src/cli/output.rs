//! Output formatting for CLI commands.

use serde::Serialize;

use crate::classification::{ClassificationResult, most_likely};
use crate::cli::args::{OutputFormat, ParlanceArgs};
use crate::error::Result;

/// Summary structure for model inspection.
#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub path: String,
    pub labels: Vec<String>,
    pub vocabulary_size: usize,
}

/// Print a serializable value according to the requested output format.
pub fn output_json<T: Serialize>(value: &T, cli_args: &ParlanceArgs) -> Result<()> {
    let encoded = if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{encoded}");
    Ok(())
}

/// Print a classification result as a human-readable report.
pub fn print_result_human(result: &ClassificationResult) {
    for (index, sentence) in result.sentences.iter().enumerate() {
        println!("sentence {index}:");
        for (name, distribution) in &sentence.predictions {
            if distribution.is_empty() {
                println!("  {name}: <classification failed>");
                continue;
            }
            let mut ranked: Vec<_> = distribution.iter().collect();
            ranked.sort_by(|a, b| b.1.total_cmp(a.1));
            let formatted: Vec<String> = ranked
                .iter()
                .map(|(label, probability)| format!("{label}={probability:.4}"))
                .collect();
            println!("  {name}: {}", formatted.join(" "));
        }
        match sentence.question_type {
            Some(question_type) => println!("  question: {question_type:?}"),
            None => println!("  question: -"),
        }
    }
}

/// Print a classification result per the requested format.
pub fn print_result(result: &ClassificationResult, cli_args: &ParlanceArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            print_result_human(result);
            Ok(())
        }
        OutputFormat::Json => output_json(result, cli_args),
    }
}

/// Print a model summary per the requested format.
pub fn print_model_summary(summary: &ModelSummary, cli_args: &ParlanceArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            println!("model: {}", summary.path);
            println!("labels: {}", summary.labels.join(", "));
            println!("vocabulary: {} terms", summary.vocabulary_size);
            Ok(())
        }
        OutputFormat::Json => output_json(summary, cli_args),
    }
}

/// Render the most likely topic of a distribution map for log lines.
pub fn top_topic(result: &ClassificationResult) -> Option<String> {
    let first = result.sentences.first()?;
    let distribution = first.predictions.get("topic")?;
    distribution
        .keys()
        .find(|label| most_likely(distribution, label))
        .cloned()
}
