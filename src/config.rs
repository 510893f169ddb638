use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

/// Repositories that host Roc packages but are missed by the search index.
const KNOWN_ROC_REPOS: &[&str] = &[
    "bhansconnect/roc-fuzz",
    "hasnep/roc-colors",
    "hasnep/roc-dataframes",
    "hasnep/roc-hex",
    "hasnep/roc-semver",
    "hasnep/roc-svg",
    "jancvanb/roc-random",
    "joseph-salmon/roc-audio-platform-test",
    "jwoudenberg/rvn",
    "kilianvounckx/roc_regex",
    "lukewilliamboswell/basic-ssg",
    "lukewilliamboswell/roc-ansi",
    "lukewilliamboswell/roc-cgi-server",
    "lukewilliamboswell/roc-graphics-mach",
    "lukewilliamboswell/roc-graphics",
    "lukewilliamboswell/roc-gui",
    "lukewilliamboswell/roc-htmx-playground",
    "lukewilliamboswell/roc-masonry-experiment",
    "lukewilliamboswell/roc-package-explorations",
    "lukewilliamboswell/roc-pdf-experiment",
    "lukewilliamboswell/roc-random",
    "lukewilliamboswell/roc-ray",
    "lukewilliamboswell/roc-sdl",
    "lukewilliamboswell/roc-serverless",
    "lukewilliamboswell/roc-tinvyvg",
    "lukewilliamboswell/roc-tui",
    "lukewilliamboswell/roc-wasm4",
    "lukewilliamboswell/roc-zig-package-experiment",
    "lukewilliamboswell/test_port_audio",
    "mulias/roc-array2d",
    "roc-lang/basic-cli",
    "roc-lang/unicode",
    "subtlesplendor/roc-data",
    "subtlesplendor/roc-parser",
];

/// Repositories that match the search but do not publish packages.
const NOT_PACKAGES: &[&str] = &["roc-lang/roc", "roc-lang/examples"];

/// Settings for the acquisition pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestConfig {
    /// Pause after every external call.
    pub api_delay: Duration,
    /// Result cap for each search query.
    pub search_limit: u32,
    /// Primary language filter for the first search.
    pub language: String,
    /// Topic filter for the second search.
    pub topic: String,
    /// Cap on the number of releases listed per repository.
    pub release_limit: u32,
    pub allow_list: BTreeSet<String>,
    pub deny_list: BTreeSet<String>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            api_delay: Duration::ZERO,
            search_limit: 1000,
            language: "roc".to_string(),
            topic: "roc-lang".to_string(),
            release_limit: 1000,
            allow_list: KNOWN_ROC_REPOS.iter().map(|s| s.to_string()).collect(),
            deny_list: NOT_PACKAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl HarvestConfig {
    /// Production filters with no delay and no static lists.
    pub fn empty() -> Self {
        Self {
            allow_list: BTreeSet::new(),
            deny_list: BTreeSet::new(),
            ..Self::default()
        }
    }

    pub fn with_api_delay(mut self, delay: Duration) -> Self {
        self.api_delay = delay;
        self
    }
}

/// Where the cache and generated source live.
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub data_file: PathBuf,
    pub output_file: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data").join("data.json"),
            output_file: PathBuf::from("src").join("Data.roc"),
        }
    }
}
