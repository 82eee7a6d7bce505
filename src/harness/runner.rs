use log::info;
use std::path::Path;
use std::process::Command;

use super::error::HarnessError;

/// Launches the build artifact against a trace. Tests substitute a fake.
pub trait Launcher {
  fn run(&self, binary: &Path, trace: &Path) -> Result<(), HarnessError>;
}

/// Runs the binary as a blocking child process with the trace path as its
/// only argument. Streams are inherited; the exit status is the sole
/// machine-readable signal.
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
  fn run(&self, binary: &Path, trace: &Path) -> Result<(), HarnessError> {
    info!("Launching {} {}", binary.display(), trace.display());

    let status = Command::new(binary).arg(trace).status()?;
    if !status.success() {
      return Err(HarnessError::Execution {
        code: status.code(),
      });
    }
    Ok(())
  }
}
