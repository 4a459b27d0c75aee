//! One-shot dictionary setup: fetch the archive, extract it, hand back the
//! paths of the two exception lists the generator feeds on.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::config::WordgenConfig;
use crate::{extract, fetch};

/// WordNet 3.1 dictionary tarball.
pub const DEFAULT_DICTIONARY_URL: &str = "https://wordnetcode.princeton.edu/wn3.1.dict.tar.gz";

/// Relative paths of the exception lists inside the extracted archive.
const NOUN_FILE: &str = "dict/noun.exc";
const VERB_FILE: &str = "dict/verb.exc";

/// Locations of the noun and verb exception lists after a successful setup.
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub noun_path: PathBuf,
    pub verb_path: PathBuf,
}

/// Extracts the last path segment of the archive URL for use as the cache
/// file name.
fn archive_file_name(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Ensures `<cache-root>/dict/noun.exc` and `<cache-root>/dict/verb.exc`
/// exist, downloading and extracting the archive as needed.
///
/// The cached archive is trusted as-is; extraction runs only when either
/// exception list is missing, so a warm cache performs no network access and
/// no unpacking.
pub fn ensure_dictionary(cfg: &WordgenConfig) -> Result<Dictionary> {
    let cache_root = cfg.cache_root()?;
    ensure_dictionary_at(&cfg.dictionary_url, &cache_root)
}

pub fn ensure_dictionary_at(url: &str, cache_root: &Path) -> Result<Dictionary> {
    let archive_name = archive_file_name(url)
        .with_context(|| format!("dictionary URL has no file name: {}", url))?;
    let archive_path = cache_root.join(archive_name);

    fetch::ensure(url, &archive_path)?;

    let dict = Dictionary {
        noun_path: cache_root.join(NOUN_FILE),
        verb_path: cache_root.join(VERB_FILE),
    };
    if !dict.noun_path.exists() || !dict.verb_path.exists() {
        let archive = File::open(&archive_path)
            .with_context(|| format!("failed to open archive {}", archive_path.display()))?;
        extract::extract(archive, cache_root)
            .with_context(|| format!("failed to extract {}", archive_path.display()))?;
        tracing::info!(path = %archive_path.display(), "dictionary extracted");
    }

    Ok(dict)
}
