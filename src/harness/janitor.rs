use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Remove the build artifact, tolerating one that was never produced.
/// Delete failures are reported but never change the exit code.
pub fn remove_artifact(path: &Path) {
  match fs::remove_file(path) {
    Ok(()) => {}
    Err(e) if e.kind() == ErrorKind::NotFound => {}
    Err(e) => warn!("failed to remove {}: {}", path.display(), e),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn removes_existing_artifact() {
    let tmp = TempDir::new().unwrap();
    let artifact = tmp.path().join("trace_runner");
    std::fs::write(&artifact, "").unwrap();

    remove_artifact(&artifact);
    assert!(!artifact.exists());
  }

  #[test]
  fn missing_artifact_is_tolerated() {
    let tmp = TempDir::new().unwrap();
    remove_artifact(&tmp.path().join("trace_runner"));
  }
}
