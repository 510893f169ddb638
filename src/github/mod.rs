//! Hosting platform access through the `gh` command line client.
//!
//! - `types` - raw JSON shapes as the platform reports them
//! - `client` - the queries the acquisition pipeline issues

mod client;
mod types;

pub use client::{GitHub, parse_release_tags};
pub use types::{RawAsset, RawOwner, RawRelease, RawRepo, SearchHit};
