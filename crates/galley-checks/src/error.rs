//! Error taxonomy for verification failures.
//!
//! Every variant carries the identifier a reader needs to locate the
//! discrepancy (file path, document id, or digest) without rerunning the
//! harness. No error is recovered locally and nothing is retried.

use std::path::PathBuf;

/// Errors raised by the verification harness.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Generator `{command}` failed: {message}")]
    GeneratorInvocation { command: String, message: String },

    #[error("Build output missing: {} does not exist or is not a directory", .0.display())]
    MissingOutput(PathBuf),

    #[error("No generated HTML for document id(s): {}", .ids.join(", "))]
    MissingOutputDocument { ids: Vec<String> },

    #[error("Unresolved placeholder {token} in {}", .file.display())]
    UnresolvedPlaceholder { file: PathBuf, token: String },

    #[error("CSS bundle not found: expected {} (computed digest {digest})", .expected.display())]
    HashMismatch { digest: String, expected: PathBuf },

    #[error("Minified rules from {} not found in the CSS bundle", .0.display())]
    MissingRule(PathBuf),

    #[error("Asset(s) not copied: {}", .names.join(", "))]
    MissingAsset { names: Vec<String> },

    #[error("Front-matter error in {}: {source}", .file.display())]
    Frontmatter {
        file: PathBuf,
        #[source]
        source: galley_frontmatter::FrontmatterError,
    },

    #[error("CSS error in {}: {message}", .file.display())]
    Css { file: PathBuf, message: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
