mod config;
mod errors;
mod models;
mod taxonomy;
mod verification;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::profile::GithubProfile;
use crate::taxonomy::{SkillTaxonomy, TopicMap};
use crate::verification::export::{build_export_report, export_filename};
use crate::verification::recommend::{generate_recommendations, skill_badge};
use crate::verification::trust::{consistency_percentage, TrustLevel};

const SAMPLE_RESUME: &str = include_str!("../fixtures/sample_resume.txt");
const SAMPLE_PROFILE: &str = include_str!("../fixtures/sample_profile.json");

/// SkillCred verification engine — extracts skills from a resume and a
/// GitHub profile, cross-references them, and scores trust.
#[derive(Parser, Debug)]
#[command(name = "engine", version, about)]
struct Cli {
    /// Plain-text resume file
    #[arg(long, conflicts_with = "sample")]
    resume: Option<PathBuf>,

    /// GitHub profile payload (JSON)
    #[arg(long, conflicts_with = "sample")]
    profile: Option<PathBuf>,

    /// Analyze the built-in sample dataset
    #[arg(long)]
    sample: bool,

    /// Write the export report here (a directory gets the dated default name)
    #[arg(long)]
    export: Option<PathBuf>,

    /// Log per-skill recommendations
    #[arg(long)]
    recommendations: bool,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillCred engine v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let (resume_text, profile) = load_inputs(&cli, &config)?;

    let taxonomy = SkillTaxonomy::builtin();
    let topics = TopicMap::builtin();

    let result = verification::run_analysis(&taxonomy, &topics, &resume_text, profile, |stage| {
        info!("{}", stage.label());
    });

    let level = TrustLevel::from_score(result.trust_score);
    info!(
        "{} skills analyzed — overall {}/100 ({}), {}% consistent across sources",
        result.skills.len(),
        result.trust_score,
        level.trust_label(),
        consistency_percentage(&result.skills),
    );

    let totals = result.github_data.language_totals();
    if !totals.is_empty() {
        let top: Vec<String> = totals
            .iter()
            .take(3)
            .map(|(language, pct)| format!("{language} ({pct}%)"))
            .collect();
        info!("Top repository languages: {}", top.join(", "));
    }

    for skill in &result.skills {
        info!(
            "  {} [{}] — trust {} ({})",
            skill.name,
            skill.category.as_str(),
            skill.trust_score,
            skill_badge(skill).confidence_label(),
        );
        if cli.recommendations {
            for recommendation in generate_recommendations(skill) {
                info!("    - {recommendation}");
            }
        }
    }

    if let Some(path) = &cli.export {
        let now = Utc::now();
        let report = build_export_report(&result, now);
        let path = if path.is_dir() {
            path.join(export_filename(now))
        } else {
            path.clone()
        };
        fs::write(&path, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("Failed to write export report to {}", path.display()))?;
        info!("Export report written to {}", path.display());
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn load_inputs(cli: &Cli, config: &Config) -> Result<(String, GithubProfile)> {
    if cli.sample {
        return Ok((
            SAMPLE_RESUME.to_string(),
            GithubProfile::from_json(SAMPLE_PROFILE)?,
        ));
    }
    let (Some(resume_path), Some(profile_path)) = (&cli.resume, &cli.profile) else {
        bail!("--resume and --profile are required unless --sample is set");
    };
    let resume_text = read_resume(resume_path, config.max_resume_bytes)?;
    let payload = fs::read_to_string(profile_path)
        .with_context(|| format!("Failed to read profile payload {}", profile_path.display()))?;
    Ok((resume_text, GithubProfile::from_json(&payload)?))
}

fn read_resume(path: &Path, max_bytes: u64) -> Result<String> {
    let size = fs::metadata(path)
        .with_context(|| format!("Failed to read resume file {}", path.display()))?
        .len();
    if size > max_bytes {
        bail!(
            "Resume file {} is {size} bytes; the limit is {max_bytes}",
            path.display()
        );
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read resume file {}", path.display()))
}
