//! Build snapshot collection.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::HarnessConfig;
use crate::error::VerifyError;

/// The four file listings a verification run checks against.
///
/// Collected once after the generator finishes and treated as immutable for
/// the rest of the run; every check receives it by shared reference.
#[derive(Debug)]
pub struct BuildSnapshot {
    /// Markdown sources under the docs directory
    pub source_docs: Vec<PathBuf>,

    /// HTML documents the generator produced
    pub output_docs: Vec<PathBuf>,

    /// Files under the source assets directory
    pub source_assets: Vec<PathBuf>,

    /// Asset copies the generator produced
    pub output_assets: Vec<PathBuf>,
}

impl BuildSnapshot {
    /// Collect all four listings.
    ///
    /// The listings are independent and gathered concurrently; all of them
    /// must complete before any check runs.
    pub async fn collect(config: &HarnessConfig) -> Result<Self, VerifyError> {
        let docs_dir = config.docs_dir.clone();
        let html_dir = config.html_dir();
        let assets_dir = config.assets_dir.clone();
        let img_dir = config.img_dir();

        let (source_docs, output_docs, source_assets, output_assets) = tokio::try_join!(
            scan(move || walk_markdown(&docs_dir)),
            scan(move || list_files(&html_dir, Some("html"))),
            scan(move || list_files(&assets_dir, None)),
            scan(move || list_files(&img_dir, None)),
        )?;

        Ok(Self {
            source_docs,
            output_docs,
            source_assets,
            output_assets,
        })
    }
}

async fn scan<F>(list: F) -> Result<Vec<PathBuf>, VerifyError>
where
    F: FnOnce() -> Result<Vec<PathBuf>, VerifyError> + Send + 'static,
{
    match tokio::task::spawn_blocking(list).await {
        Ok(result) => result,
        Err(e) => Err(VerifyError::Io {
            path: PathBuf::new(),
            source: std::io::Error::other(e),
        }),
    }
}

/// Recursively enumerate Markdown sources under `dir`.
fn walk_markdown(dir: &Path) -> Result<Vec<PathBuf>, VerifyError> {
    let mut files = Vec::new();

    if !dir.exists() {
        return Ok(files);
    }

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| VerifyError::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext == "md" || ext == "mdx" {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Enumerate the files directly under `dir`, optionally filtered by
/// extension. A missing directory yields an empty listing; the directory
/// checks decide whether that is a failure.
pub(crate) fn list_files(dir: &Path, extension: Option<&str>) -> Result<Vec<PathBuf>, VerifyError> {
    let mut files = Vec::new();

    if !dir.exists() {
        return Ok(files);
    }

    let entries = fs::read_dir(dir).map_err(|e| VerifyError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| VerifyError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if let Some(wanted) = extension {
            if path.extension().and_then(|e| e.to_str()) != Some(wanted) {
                continue;
            }
        }

        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Read a file as UTF-8 text, attaching the path to any I/O failure.
pub(crate) fn read_text(path: &Path) -> Result<String, VerifyError> {
    fs::read_to_string(path).map_err(|e| VerifyError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
