//! Build-and-verify command.

use std::path::Path;

use anyhow::Result;
use galley_checks::{Harness, RunReport};

use super::load_config;

/// Run the verification pipeline.
pub async fn run(config_path: &Path, skip_build: bool, keep_output: bool, json: bool) -> Result<()> {
    let file_config = load_config(config_path)?;

    let mut config = file_config.into_harness_config();
    // Verifying a tree the harness did not build implies keeping it.
    config.keep_output = config.keep_output || keep_output || skip_build;

    let harness = Harness::new(config);

    let report = if skip_build {
        tracing::info!("Skipping build, verifying existing output");
        harness.verify().await?
    } else {
        harness.run().await?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    let failed = report.checks.iter().filter(|c| !c.passed).count();
    if failed > 0 {
        anyhow::bail!("{} of {} checks failed", failed, report.checks.len());
    }

    tracing::info!("All {} checks passed", report.checks.len());

    Ok(())
}

fn print_report(report: &RunReport) {
    for check in &report.checks {
        if check.passed {
            tracing::info!("PASS {}", check.name);
        } else {
            tracing::error!(
                "FAIL {}: {}",
                check.name,
                check.detail.as_deref().unwrap_or("no detail")
            );
        }
    }
}
