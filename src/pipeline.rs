//! Orchestration of acquisition, caching and code generation.

use anyhow::Result;
use log::info;

use crate::cache::{load_dataset, save_dataset, write_generated};
use crate::command::CommandRunner;
use crate::config::{HarvestConfig, Paths};
use crate::github::GitHub;
use crate::harvest::harvest_dataset;
use crate::model::Dataset;
use crate::runtime::Runtime;

/// Which stages a run performs. Every combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mode {
    /// Acquire fresh data instead of reading the cache.
    pub download: bool,
    /// Render the generated source file.
    pub code_gen: bool,
    /// Acquire an empty dataset without calling the platform.
    pub dummy: bool,
}

/// Run the selected stages and return the dataset that was produced or loaded.
///
/// Without `download` the cache is always read, even when nothing is rendered,
/// so a missing or malformed cache fails the run. `dummy` only affects acquisition.
pub async fn run<R: Runtime, C: CommandRunner>(
    runtime: &R,
    runner: &C,
    config: &HarvestConfig,
    paths: &Paths,
    mode: Mode,
) -> Result<Dataset> {
    let dataset = if mode.download {
        let dataset = if mode.dummy {
            info!("Running in dummy mode.");
            Dataset::empty()
        } else {
            let github = GitHub::new(runner, config);
            harvest_dataset(&github).await?
        };
        save_dataset(runtime, &paths.data_file, &dataset)?;
        dataset
    } else {
        load_dataset(runtime, &paths.data_file)?
    };

    if mode.code_gen {
        write_generated(runtime, &paths.output_file, &dataset)?;
    }

    Ok(dataset)
}
