//! Dictionary archive fetch: one-shot HTTP GET into the cache directory.
//!
//! The body is streamed into a `.part` temp file and renamed into place only
//! after a successful transfer, so a half-written download can never be
//! mistaken for a valid cache entry. An archive that already exists at the
//! cache path is trusted as-is and never re-downloaded.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the in-flight download: appends `.part` to the cache path.
pub fn temp_path(cache_path: &Path) -> PathBuf {
    let mut o = cache_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Ensures the archive at `url` exists at `cache_path`.
///
/// Returns immediately when the cache file is already present (no
/// re-validation, no network access). No retries; on any failure the temp
/// file is removed and the cache path is left absent.
pub fn ensure(url: &str, cache_path: &Path) -> Result<()> {
    if cache_path.exists() {
        tracing::debug!(path = %cache_path.display(), "archive already cached");
        return Ok(());
    }

    if let Some(parent) = cache_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create cache directory {}", parent.display()))?;
    }

    tracing::info!(url, path = %cache_path.display(), "downloading dictionary archive");

    let tmp = temp_path(cache_path);
    let file = File::create(&tmp)
        .with_context(|| format!("failed to create temp file {}", tmp.display()))?;

    match download_to(url, &file) {
        Ok(written) => {
            drop(file);
            fs::rename(&tmp, cache_path).with_context(|| {
                format!(
                    "failed to rename {} to {}",
                    tmp.display(),
                    cache_path.display()
                )
            })?;
            tracing::info!(url, path = %cache_path.display(), bytes = written, "archive downloaded");
            Ok(())
        }
        Err(e) => {
            drop(file);
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

/// Performs the GET, streaming the body into `file`. Returns bytes written.
fn download_to(url: &str, file: &File) -> Result<u64> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;

    let mut out = file;
    let mut written: u64 = 0;
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match out.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                tracing::warn!("cache write failed: {}", e);
                Ok(0) // abort transfer
            }
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {} failed", url))?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    Ok(written)
}
