//! Bundle digest query command.
//!
//! Prints the digest the harness would expect in the bundle filename, for
//! diagnosing hash-mismatch failures without a full run.

use std::path::Path;

use anyhow::Result;
use galley_checks::hash::bundle_digest;

use super::load_config;

/// Run the hash command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?.into_harness_config();

    let digest = bundle_digest(&config.baseline_css, &config.static_css_dir)?;
    let expected = config.css_dir().join(format!("main.{digest}.css"));

    println!("{}", digest);
    println!("{}", expected.display());

    Ok(())
}
