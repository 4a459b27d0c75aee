//! Tar+gzip extraction for the dictionary archive.
//!
//! Destination paths are computed by joining the target root with each member
//! path, so nothing here touches the process working directory and concurrent
//! extractions into different roots cannot interfere. Member paths are taken
//! as given in the archive; there is no rollback of entries written before a
//! failure.

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tar::{Archive, EntryType};

/// Extraction failure, tagged with the operation that failed.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("mkdir failed: {path}: {source}")]
    Mkdir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("create failed: {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("copy failed: {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown entry type {kind:?} in {path}")]
    UnknownEntryType { kind: EntryType, path: PathBuf },
    #[error("archive read failed: {0}")]
    Read(#[source] io::Error),
}

/// Unpacks the gzip-compressed tar stream into `target_dir`.
///
/// Directory members are created recursively; regular-file members are copied
/// byte-for-byte. Any other member type aborts extraction with an error. The
/// end of the archive is the entry iterator ending, never an error.
pub fn extract<R: Read>(gzip_stream: R, target_dir: &Path) -> Result<(), ExtractError> {
    let mut archive = Archive::new(GzDecoder::new(gzip_stream));
    for entry in archive.entries().map_err(ExtractError::Read)? {
        let mut entry = entry.map_err(ExtractError::Read)?;
        let member = entry.path().map_err(ExtractError::Read)?.into_owned();
        let dest = target_dir.join(&member);
        match entry.header().entry_type() {
            EntryType::Directory => {
                fs::create_dir_all(&dest).map_err(|source| ExtractError::Mkdir {
                    path: dest.clone(),
                    source,
                })?;
            }
            EntryType::Regular => {
                let mut out = File::create(&dest).map_err(|source| ExtractError::Create {
                    path: dest.clone(),
                    source,
                })?;
                io::copy(&mut entry, &mut out).map_err(|source| ExtractError::Copy {
                    path: dest.clone(),
                    source,
                })?;
            }
            kind => {
                return Err(ExtractError::UnknownEntryType { kind, path: dest });
            }
        }
    }
    Ok(())
}
