use anyhow::Result;
use clap::Parser;
use roc_pkg_harvest::command::GhCommand;
use roc_pkg_harvest::config::{HarvestConfig, Paths};
use roc_pkg_harvest::pipeline::{Mode, run};
use roc_pkg_harvest::runtime::RealRuntime;
use std::path::PathBuf;
use std::time::Duration;

/// roc-pkg-harvest - Roc package index data
///
/// Harvest package repositories and their releases with the GitHub CLI,
/// cache them as JSON and generate a Roc module from the cache.
///
/// Examples:
///   roc-pkg-harvest --do-download --do-code-gen   # Refresh everything
///   roc-pkg-harvest --do-code-gen                 # Regenerate from the cache
#[derive(Parser, Debug)]
#[command(author, version = env!("ROC_PKG_HARVEST_VERSION"), about)]
struct Cli {
    /// Fetch fresh data from GitHub and overwrite the cache
    #[arg(long)]
    do_download: bool,

    /// Generate the Roc source file
    #[arg(long)]
    do_code_gen: bool,

    /// With --do-download, produce an empty dataset without calling GitHub
    #[arg(long)]
    dummy: bool,

    /// Cache file location
    #[arg(long, env = "ROC_PKG_DATA_FILE", value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Generated Roc source location
    #[arg(long, env = "ROC_PKG_OUTPUT", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Pause after every GitHub call, in milliseconds
    #[arg(long, env = "ROC_PKG_API_DELAY_MS", value_name = "MS", default_value_t = 0)]
    api_delay_ms: u64,

    /// GitHub CLI executable
    #[arg(long, default_value = "gh", value_name = "PROGRAM")]
    gh: String,
}

impl Cli {
    fn mode(&self) -> Mode {
        Mode {
            download: self.do_download,
            code_gen: self.do_code_gen,
            dummy: self.dummy,
        }
    }

    fn paths(&self) -> Paths {
        let defaults = Paths::default();
        Paths {
            data_file: self.data_file.clone().unwrap_or(defaults.data_file),
            output_file: self.output.clone().unwrap_or(defaults.output_file),
        }
    }

    fn config(&self) -> HarvestConfig {
        HarvestConfig::default().with_api_delay(Duration::from_millis(self.api_delay_ms))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let runner = GhCommand::new(cli.gh.clone());
    run(&RealRuntime, &runner, &cli.config(), &cli.paths(), cli.mode()).await?;
    Ok(())
}
