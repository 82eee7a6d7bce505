use log::info;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::error::HarnessError;

/// Ordered compilation inputs. Order and membership come from the harness
/// configuration, never from the command line.
#[derive(Debug, Clone)]
pub struct SourceManifest {
  pub sources: Vec<PathBuf>,
  pub include_dirs: Vec<PathBuf>,
}

/// External compiler capability. Tests substitute a fake.
pub trait Toolchain {
  fn compile(&self, manifest: &SourceManifest, output: &Path) -> Result<(), HarnessError>;
}

/// Invokes the configured compiler driver with a fixed command line:
/// standard, warnings, optimization, include flags, output path, then the
/// sources in manifest order. Streams are inherited, so diagnostics reach
/// the user directly; only the exit status is inspected.
pub struct CompilerToolchain {
  program: String,
}

impl CompilerToolchain {
  pub fn new(program: &str) -> Self {
    Self {
      program: program.to_string(),
    }
  }
}

impl Toolchain for CompilerToolchain {
  fn compile(&self, manifest: &SourceManifest, output: &Path) -> Result<(), HarnessError> {
    let mut cmd = Command::new(&self.program);
    cmd.arg("-std=c++17").arg("-Wall").arg("-O2");
    for dir in &manifest.include_dirs {
      cmd.arg(format!("-I{}", dir.display()));
    }
    cmd.arg("-o").arg(output);
    for source in &manifest.sources {
      cmd.arg(source);
    }

    info!("Compile command: {:?}", cmd);

    let status = cmd.status()?;
    if !status.success() {
      return Err(HarnessError::Compile);
    }
    Ok(())
  }
}
