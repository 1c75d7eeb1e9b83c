//! Build-output verification harness for documentation sites.
//!
//! Invokes an external site generator once, snapshots the source and output
//! trees, and runs independent artifact checks against the result: generated
//! documents, substituted placeholders, the content-addressed CSS bundle,
//! and copied assets. The output tree is removed when the run finishes.

pub mod checks;
pub mod config;
pub mod error;
pub mod generator;
pub mod hash;
pub mod runner;
pub mod snapshot;

pub use config::HarnessConfig;
pub use error::VerifyError;
pub use runner::{CheckReport, Harness, RunReport};
pub use snapshot::BuildSnapshot;
