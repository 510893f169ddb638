use regex::Regex;
use std::sync::OnceLock;

static BUNDLE_URL: OnceLock<Regex> = OnceLock::new();

fn bundle_url() -> &'static Regex {
    BUNDLE_URL.get_or_init(|| {
        Regex::new(r"(?:^|/)[A-Za-z0-9_-]{43}\.tar(?:\.gz|\.br)?$")
            .expect("bundle URL pattern is a valid regex")
    })
}

/// Whether `url` points at a package bundle: a 43 character content hash
/// followed by `.tar`, `.tar.gz` or `.tar.br`.
pub fn is_bundle_url(url: &str) -> bool {
    bundle_url().is_match(url)
}

/// The first bundle URL in source order, if any.
pub fn first_bundle_url<'a, I>(urls: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    urls.into_iter().find(|url| is_bundle_url(url))
}
