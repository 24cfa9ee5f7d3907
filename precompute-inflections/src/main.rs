use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use language_utils::Language;
use precompute_inflections::{PrecomputeConfig, run_job};

/// Precompute inflection tables for the vocabulary files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file listing the jobs to run; defaults to the app's data layout
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only run jobs for this language (ISO 639-1 or 639-3 code)
    #[arg(short, long, value_parser = parse_language)]
    language: Option<Language>,
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| format!("unsupported language: {code}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PrecomputeConfig::load(path)?,
        None => PrecomputeConfig::default(),
    };

    let jobs: Vec<_> = config
        .jobs
        .iter()
        .filter(|job| args.language.is_none_or(|language| job.language == language))
        .collect();
    if jobs.is_empty() {
        log::warn!("No jobs to run");
    }

    for job in jobs {
        println!("Precomputing {} inflections", job.language);
        let summary = run_job(job).context(format!("{} inflections failed", job.language))?;
        println!("{summary}");
    }

    Ok(())
}
