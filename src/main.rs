//! Pairval command-line entrypoint.
//!
//! All settings come from `PAIRVAL_*` environment variables; the JSON report goes to stdout
//! and logs go to stderr (filter with `RUST_LOG`).

use std::io::Write;

use mimalloc::MiMalloc;

use pairval::config::Config;
use pairval::report;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "\
Usage: pairval

Evaluates verification pairs and prints a JSON report.

Environment:
  PAIRVAL_PAIRS_PATH      pair list, one `index_a index_b label` per line (required)
  PAIRVAL_FEATURES_PATH   raw feature file (required)
  PAIRVAL_FEATURES2_PATH  second raw feature file for index_b (optional)
  PAIRVAL_FEATURE_DIM     values per feature vector (required)
  PAIRVAL_FEATURE_DTYPE   f32 | f16 (default: f32)
  PAIRVAL_KFOLD           cross-validation folds (default: 10)
  PAIRVAL_TOP_K           pairs per top-pair category (default: 5)
  PAIRVAL_ZERO_NORM       reject | neutral (default: reject)
  RUST_LOG                log filter, e.g. pairval=debug
";

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--help" || arg == "-h") {
        print!("{USAGE}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        pairs = ?config.pairs_path,
        features = ?config.features_path,
        kfold = config.kfold,
        top_k = config.top_k,
        "Pairval starting"
    );

    let report = report::run(&config)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(())
}
