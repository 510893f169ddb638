//! Domain model for harvested packages.
//!
//! Each entity converts between four shapes:
//!
//! - raw platform JSON -> domain (`from_raw`)
//! - domain <-> cache file (`to_cache` / `from_cache`)
//! - domain -> render tree (`to_render_value`)
//!
//! Optional fields stay `Option` in the domain and cache shapes; they only
//! become `Url ...` / `No...` tags in the render tree.

mod bundle;
mod dataset;
mod release;
mod repo;

pub use bundle::{first_bundle_url, is_bundle_url};
pub use dataset::{CachedDataset, Dataset};
pub use release::{CachedRelease, Release, sort_releases, strip_version_prefix};
pub use repo::{CachedRepo, Repo};
