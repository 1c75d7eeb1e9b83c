//! Run orchestration: build, snapshot, checks, teardown, report.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::checks;
use crate::config::HarnessConfig;
use crate::error::VerifyError;
use crate::generator;
use crate::snapshot::BuildSnapshot;

/// Outcome of a single check.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Check name
    pub name: &'static str,

    /// Whether the check passed
    pub passed: bool,

    /// Failure detail, if any
    pub detail: Option<String>,
}

impl CheckReport {
    fn from_result(name: &'static str, result: Result<(), VerifyError>) -> Self {
        match result {
            Ok(()) => Self {
                name,
                passed: true,
                detail: None,
            },
            Err(e) => Self {
                name,
                passed: false,
                detail: Some(e.to_string()),
            },
        }
    }
}

/// Aggregate outcome of a verification run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Per-check outcomes, in the order the checks ran
    pub checks: Vec<CheckReport>,
}

impl RunReport {
    /// A run passes iff every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

/// Removes the build output directory when dropped.
///
/// Owned by the runner for the duration of a run so removal happens on
/// success, on check failure, and on panic alike.
struct OutputDirGuard {
    path: PathBuf,
    armed: bool,
}

impl OutputDirGuard {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    /// Leave the directory in place on drop.
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for OutputDirGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        if let Err(e) = fs::remove_dir_all(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Verification harness.
///
/// Holds exclusive ownership of the output directory for the duration of a
/// run; concurrent runs against the same output directory are not supported.
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    /// Create a harness for the given configuration.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Invoke the generator once, verify its output, and tear it down.
    ///
    /// The output directory is removed when this returns, pass or fail,
    /// unless `keep_output` is set. A generator failure aborts the run
    /// before any check executes.
    pub async fn run(&self) -> Result<RunReport, VerifyError> {
        let mut guard = OutputDirGuard::new(self.config.output_dir.clone());
        if self.config.keep_output {
            guard.disarm();
        }

        generator::invoke(&self.config.build_command, &self.config.site_dir).await?;

        self.verify().await
    }

    /// Verify an already-built output tree.
    ///
    /// Runs the checks only; the output tree is left in place. `run` is the
    /// entry point that owns teardown.
    pub async fn verify(&self) -> Result<RunReport, VerifyError> {
        let dir_check = CheckReport::from_result(
            "build output directory exists",
            checks::output_dir_exists(&self.config),
        );

        // Without an output tree the remaining checks have nothing to read.
        if !dir_check.passed {
            return Ok(RunReport {
                checks: vec![dir_check],
            });
        }

        let snapshot = BuildSnapshot::collect(&self.config).await?;

        tracing::debug!(
            "Snapshot: {} source docs, {} output docs, {} source assets, {} output assets",
            snapshot.source_docs.len(),
            snapshot.output_docs.len(),
            snapshot.source_assets.len(),
            snapshot.output_assets.len()
        );

        let checks = vec![
            dir_check,
            CheckReport::from_result(
                "generated HTML for each Markdown source",
                checks::documents_generated(&snapshot),
            ),
            CheckReport::from_result(
                "table of contents placeholders substituted",
                checks::placeholders_resolved(&snapshot, &self.config.placeholder),
            ),
            CheckReport::from_result(
                "concatenated CSS bundle matches content hash",
                checks::css_bundle(&self.config),
            ),
            CheckReport::from_result(
                "assets copied from the docs tree",
                checks::assets_copied(&snapshot),
            ),
        ];

        Ok(RunReport { checks })
    }
}
