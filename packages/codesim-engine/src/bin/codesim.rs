//! Codesim CLI
//!
//! Structural similarity between source files.
//!
//! # Usage
//!
//! ```bash
//! # Compare two files (language inferred from extension)
//! codesim compare a.java b.java
//!
//! # All-pairs batch over a JSON request, read from stdin
//! codesim batch - < request.json
//!
//! # Raw character similarity
//! codesim text a.txt b.txt
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use codesim_engine::{
    detector_for, text_similarity, BatchDetector, ComparisonResult, DetectionRequest,
    DetectorConfig, LanguageId, SimilarityDetector,
};

#[derive(Parser)]
#[command(name = "codesim")]
#[command(about = "Structural code similarity for plagiarism detection", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two source files
    Compare {
        file_a: PathBuf,
        file_b: PathBuf,

        /// Language (java, python); inferred from the extension when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare every pair of submissions in a JSON request
    Batch {
        /// Request file, or `-` for stdin
        request: String,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report pairs scoring above this value
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Character-level similarity of two text files
    Text { file_a: PathBuf, file_b: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compare {
            file_a,
            file_b,
            language,
            config,
            json,
        } => run_compare(&file_a, &file_b, language.as_deref(), config.as_deref(), json),
        Commands::Batch {
            request,
            config,
            threshold,
        } => run_batch(&request, config.as_deref(), threshold),
        Commands::Text { file_a, file_b } => run_text(&file_a, &file_b),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<DetectorConfig> {
    let config = match path {
        Some(path) => DetectorConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DetectorConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn resolve_language(explicit: Option<&str>, file: &Path) -> Result<LanguageId> {
    if let Some(name) = explicit {
        return Ok(LanguageId::from_name(name)?);
    }
    let ext = file.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match LanguageId::from_extension(ext) {
        Some(language) => Ok(language),
        None => bail!(
            "cannot infer language from {}; pass --language",
            file.display()
        ),
    }
}

fn run_compare(
    file_a: &Path,
    file_b: &Path,
    language: Option<&str>,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let language = resolve_language(language, file_a)?;
    let config = load_config(config)?;
    let code_a = read_source(file_a)?;
    let code_b = read_source(file_b)?;

    let result = detector_for(language, config).compare(&code_a, &code_b);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_comparison(file_a, file_b, &result);
    }
    Ok(())
}

fn print_comparison(file_a: &Path, file_b: &Path, result: &ComparisonResult) {
    println!("{} vs {}", file_a.display(), file_b.display());
    println!("  Similarity: {:.0}%", result.avg_score * 100.0);
    println!("  Sequence:   {:.0}%", result.seq_score * 100.0);
    println!("  Structure:  {:.0}%", result.struct_score * 100.0);

    if result.line_matches.is_empty() {
        println!("  No matched regions");
        return;
    }
    println!("  Matched regions:");
    for m in &result.line_matches {
        println!("    lines {} <-> lines {}", m.a, m.b);
    }
}

fn run_batch(request: &str, config: Option<&Path>, threshold: Option<f64>) -> Result<()> {
    let config = load_config(config)?;

    let raw = if request == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        read_source(Path::new(request))?
    };

    let mut request: DetectionRequest =
        serde_json::from_str(&raw).context("invalid detection request")?;
    if threshold.is_some() {
        request.threshold = threshold;
    }

    let response = BatchDetector::with_config(config).detect(&request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn run_text(file_a: &Path, file_b: &Path) -> Result<()> {
    let a = read_source(file_a)?;
    let b = read_source(file_b)?;
    println!("{:.2}", text_similarity(&a, &b));
    Ok(())
}
