use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use dotenvy::dotenv;
use pm_common::graph::{GraphFilter, build_graph};
use pm_common::ingest::{IngestError, exclude_academic_employers, load_employers, load_institutions};
use pm_common::logging::{LogConfig, init_tracing_subscriber, install_tracing_panic_hook};
use pm_common::matching::{InsightEngine, MatchingConfig, NoiseSource};
use pm_common::report::MatchReport;
use pm_common::{Employer, Institution};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "pm-cli",
    about = "Score institution/employer partnerships and emit a JSON report"
)]
struct Cli {
    /// Institutions dataset (JSON array)
    #[arg(long, env = "PM_INSTITUTIONS_PATH")]
    institutions: PathBuf,

    /// Employers dataset (JSON array)
    #[arg(long, env = "PM_EMPLOYERS_PATH")]
    employers: PathBuf,

    /// Seed for the variance term and pathway phrasing (default: entropy)
    #[arg(long, env = "PM_SEED")]
    seed: Option<u64>,

    /// Drop universities, colleges and education-sector employers before scoring
    #[arg(long, default_value_t = false)]
    exclude_academic: bool,

    /// Score a single institution/employer pair without the selection policy
    #[arg(long, num_args = 2, value_names = ["INSTITUTION_ID", "EMPLOYER_ID"])]
    pair: Option<Vec<String>>,

    /// Emit graph nodes/links instead of the match report
    #[arg(long, default_value_t = false, conflicts_with = "pair")]
    graph: bool,

    /// Institution types or employer sectors to keep in --graph output (repeatable)
    #[arg(long = "filter", requires = "graph")]
    filters: Vec<String>,

    /// Write output here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("unknown institution id: {0}")]
    UnknownInstitution(String),
    #[error("unknown employer id: {0}")]
    UnknownEmployer(String),
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

struct Datasets {
    institutions: Vec<Institution>,
    employers: Vec<Employer>,
}

fn load(cli: &Cli) -> Result<Datasets, CliError> {
    let institutions = load_institutions(&cli.institutions)?;
    let mut employers = load_employers(&cli.employers)?;
    if cli.exclude_academic {
        employers = exclude_academic_employers(employers);
    }
    Ok(Datasets {
        institutions,
        employers,
    })
}

fn score_pair<N: NoiseSource>(
    engine: &mut InsightEngine<N>,
    data: &Datasets,
    institution_id: &str,
    employer_id: &str,
) -> Result<pm_common::Match, CliError> {
    let institution = data
        .institutions
        .iter()
        .find(|i| i.id == institution_id)
        .ok_or_else(|| CliError::UnknownInstitution(institution_id.to_string()))?;
    let employer = data
        .employers
        .iter()
        .find(|e| e.id == employer_id)
        .ok_or_else(|| CliError::UnknownEmployer(employer_id.to_string()))?;

    Ok(engine.evaluate_pair(institution, employer))
}

fn render<N: NoiseSource>(
    cli: &Cli,
    engine: &mut InsightEngine<N>,
    data: &Datasets,
) -> Result<String, CliError> {
    if let Some([institution_id, employer_id]) = cli.pair.as_deref() {
        let found = score_pair(engine, data, institution_id, employer_id)?;
        return to_json(&found);
    }

    let matches = engine.compute_matches(&data.institutions, &data.employers);

    if cli.graph {
        let filter = GraphFilter::new(cli.filters.iter().cloned());
        let graph = build_graph(&data.institutions, &data.employers, &matches, &filter);
        info!(
            nodes = graph.nodes.len(),
            links = graph.links.len(),
            "assembled graph"
        );
        return to_json(&graph);
    }

    let report = MatchReport::new(data.institutions.len(), data.employers.len(), matches);
    info!(
        run_id = %report.run_id,
        matches = report.matches.len(),
        fallback = report.fallback_matches,
        "built match report"
    );
    to_json(&report)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn emit(output: Option<&Path>, body: &str) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, body).map_err(|source| CliError::Write {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{body}").map_err(|source| CliError::Write {
                path: "<stdout>".into(),
                source,
            })
        }
    }
}

fn run() -> Result<(), CliError> {
    dotenv().ok();
    let log_config = LogConfig::from_env("pm-cli");
    let _log_guard = init_tracing_subscriber(&log_config);
    install_tracing_panic_hook(&log_config);

    let cli = Cli::parse();
    let data = load(&cli)?;
    let config = MatchingConfig::from_env();

    let body = match cli.seed {
        Some(seed) => render(&cli, &mut InsightEngine::seeded(config, seed), &data)?,
        None => render(&cli, &mut InsightEngine::with_entropy(config), &data)?,
    };

    emit(cli.output.as_deref(), &body)
}

fn main() {
    if let Err(err) = run() {
        eprintln!("pm-cli failed: {err}");
        std::process::exit(1);
    }
}
