//! External generator invocation.
//!
//! The generator is an opaque collaborator: the harness runs it exactly once
//! and only looks at the output tree it leaves behind.

use std::path::Path;

use tokio::process::Command;

use crate::error::VerifyError;

/// Invoke the external site generator and wait for it to finish.
///
/// The working directory is passed explicitly to the subprocess; the harness
/// never changes its own current directory. A spawn failure or a non-zero
/// exit status is fatal for the whole run.
pub async fn invoke(command: &[String], working_dir: &Path) -> Result<(), VerifyError> {
    let Some((program, args)) = command.split_first() else {
        return Err(VerifyError::GeneratorInvocation {
            command: String::new(),
            message: "build command is empty".to_string(),
        });
    };

    tracing::info!(
        "Running `{}` in {}",
        command.join(" "),
        working_dir.display()
    );

    let status = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .status()
        .await
        .map_err(|e| VerifyError::GeneratorInvocation {
            command: command.join(" "),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(VerifyError::GeneratorInvocation {
            command: command.join(" "),
            message: format!("exited with {}", status),
        });
    }

    Ok(())
}
