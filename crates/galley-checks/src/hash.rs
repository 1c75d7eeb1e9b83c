//! Content hash for the concatenated CSS bundle.
//!
//! The generator names its bundle `main.{digest}.css`, where the digest is
//! a SHA-1 over the baseline stylesheet followed by every user stylesheet.
//! Recomputing the same digest locally is what lets the harness find the
//! cache-busted artifact without asking the generator anything.

use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};

use crate::error::VerifyError;
use crate::snapshot::{list_files, read_text};

/// Enumerate the user stylesheets feeding the bundle, in digest order.
///
/// Lexicographic path order keeps the digest reproducible across platforms;
/// raw directory order is not deterministic.
pub fn user_stylesheets(static_css_dir: &Path) -> Result<Vec<PathBuf>, VerifyError> {
    list_files(static_css_dir, Some("css"))
}

/// Recompute the digest embedded in the bundle filename.
///
/// The baseline stylesheet is hashed first, then every user stylesheet in
/// order. All content is read as UTF-8 text and the digest is taken over the
/// UTF-8 bytes of the single concatenation.
pub fn bundle_digest(baseline_css: &Path, static_css_dir: &Path) -> Result<String, VerifyError> {
    let mut concatenated = read_text(baseline_css)?;

    for file in user_stylesheets(static_css_dir)? {
        concatenated.push_str(&read_text(&file)?);
    }

    let mut hasher = Sha1::new();
    hasher.update(concatenated.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
