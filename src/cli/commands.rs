//! Command implementations for the Parlance CLI.

use std::fs;
use std::sync::Arc;

use crate::analysis::AnalyzedText;
use crate::classification::ModelArtifact;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::service::{ClassificationConfig, ClassificationService};
use crate::storage::MemorySharedState;

/// Execute a CLI command.
pub fn execute_command(args: ParlanceArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::ModelInfo(info_args) => model_info(info_args.clone(), &args),
    }
}

/// Classify an analyzed-text JSON file against a trained model.
fn classify(args: ClassifyArgs, cli_args: &ParlanceArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading model from: {}", args.model.display());
    }

    let content = fs::read_to_string(&args.input)?;
    let analyzed: AnalyzedText = serde_json::from_str(&content)?;

    let state = Arc::new(MemorySharedState::new());
    state.insert_analyzed(&args.unit_id, &analyzed)?;

    let config = ClassificationConfig {
        model_path: args.model,
        topic_labels: args.labels,
        detect_interrogatives: !args.no_interrogatives,
    };
    let service = ClassificationService::open(&config, state.clone())?;

    let result = service.classify_unit(&args.unit_id)?;

    if cli_args.verbosity() > 1 {
        if let Some(topic) = top_topic(&result) {
            println!("Leading topic of first sentence: {topic}");
        }
    }

    print_result(&result, cli_args)
}

/// Load and validate a model artifact, printing its schema summary.
fn model_info(args: ModelInfoArgs, cli_args: &ParlanceArgs) -> Result<()> {
    let artifact = ModelArtifact::read(&args.model)?;

    let labels = artifact
        .attributes
        .iter()
        .find_map(|attribute| match attribute {
            crate::classification::Attribute::Nominal { values, .. } => Some(values.clone()),
            _ => None,
        })
        .unwrap_or_default();

    let summary = ModelSummary {
        path: args.model.display().to_string(),
        labels,
        vocabulary_size: artifact.vocabulary.len(),
    };

    print_model_summary(&summary, cli_args)
}
